//! Type inference for TIP: constraint generation, unification, and the
//! closure pass that turns solved union-find state into finite types.
//!
//! [`check`] is the single entry point; it consumes a program and its
//! already-built symbol table and returns an [`AnalysisResult`] or the
//! first [`tip_common::TypeError`] encountered during unification.

pub mod cfg;
mod closure;
mod constraints;
mod result;
mod ty;

use rustc_hash::FxHashMap;
use tip_ast::Program;
use tip_binder::SymbolTable;
use tip_common::TypeError;
use tip_solver::{solve, TermArena};
use tracing::debug;

pub use cfg::Graph;
pub use result::AnalysisResult;
pub use ty::Type;

/// Run constraint generation, unification, and closure over `program`.
pub fn check(program: &Program, symbols: &SymbolTable) -> Result<AnalysisResult, TypeError> {
    let mut arena = TermArena::new();
    let generated = constraints::generate(program, symbols, &mut arena);
    debug!(
        constraints = generated.constraints.len(),
        terms = arena.len(),
        "generated constraints"
    );

    solve(&mut arena, &generated.constraints)?;

    let mut types = FxHashMap::default();
    for (&node, &var) in &generated.node_vars {
        let ty = closure::close(&mut arena, var);
        types.insert(node, ty);
    }

    Ok(AnalysisResult::new(types))
}
