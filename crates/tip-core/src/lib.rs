//! The TIP analyzer's single entry point.
//!
//! Everything downstream — the AST, the binder, the solver, the closure
//! pass — is reusable in isolation, but most callers just want to hand a
//! [`Program`] to [`TypeAnalysis::run`] and get back a fully typed result
//! or the first error encountered. This crate is that seam.

pub use tip_ast::{NodeId, NodeIdGen, Program};
pub use tip_binder::SymbolTable;
pub use tip_checker::{AnalysisResult, Graph, Type};
pub use tip_common::{AnalysisError, SymbolError, TypeError};

use tracing::debug;

/// A completed analysis: the symbol table used to generate constraints and
/// the resulting typed result, kept together since diagnostics often need
/// both (e.g. rendering a binding's source name next to its inferred type).
pub struct TypeAnalysis {
    pub symbols: SymbolTable,
    pub result: AnalysisResult,
}

impl TypeAnalysis {
    /// Resolve symbols, generate constraints, unify, and close — in that
    /// order, each a prerequisite for the next. Self-contained: beyond the
    /// program itself, the only state threaded through is the fresh `Var`
    /// counter owned by the term arena inside `tip_checker::check`, which
    /// is allocated fresh for this call and never shared across runs.
    pub fn run(program: &Program) -> Result<TypeAnalysis, AnalysisError> {
        let symbols = tip_binder::resolve(program)?;
        debug!(bindings = symbols.len(), "symbol resolution complete");

        let result = tip_checker::check(program, &symbols)?;
        debug!(typed_nodes = result.len(), "type inference complete");

        Ok(TypeAnalysis { symbols, result })
    }

    /// The solved type of an expression or binding, by its stable node
    /// identity. `None` if `node` was never assigned a type — which only
    /// happens for a node that isn't reachable from the program (e.g. a
    /// caller holding onto a stale id from a different `Program`).
    pub fn type_of(&self, node: NodeId) -> Option<&Type> {
        self.result.type_of(node)
    }

    /// The control-flow graph for every function in `program`, independent
    /// of whether type inference over it succeeded. Exposed here purely as
    /// the auxiliary interface the spec carves out for downstream
    /// analyses; it plays no role in `run`'s own pipeline.
    pub fn control_flow_graphs(program: &Program) -> Vec<Graph> {
        Graph::build_program(program)
    }
}
