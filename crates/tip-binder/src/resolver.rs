//! Maps every identifier *use* to its *binding* node under TIP's lexical
//! scoping: functions are visible program-wide; parameters and local
//! `var` declarations are visible within the enclosing function body.

use rustc_hash::FxHashMap;
use tip_ast::{Function, FunctionBlock, Ident, NodeId, Program, VarDecl, Visitor};
use tip_common::SymbolError;
use tracing::trace;

use crate::scope::ScopeStack;

/// Identifier-use -> identifier-binding mapping produced by [`resolve`].
#[derive(Debug, Default)]
pub struct SymbolTable {
    bindings: FxHashMap<NodeId, NodeId>,
}

impl SymbolTable {
    /// The binding node a given use node resolves to, if the use was
    /// successfully resolved (lookups before a failed [`resolve`] call
    /// never reach user code, so this is infallible in practice).
    pub fn binding_of(&self, use_id: NodeId) -> Option<NodeId> {
        self.bindings.get(&use_id).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

struct Binder {
    scopes: ScopeStack,
    bindings: FxHashMap<NodeId, NodeId>,
    error: Option<SymbolError>,
}

impl Binder {
    fn new() -> Self {
        Binder {
            scopes: ScopeStack::new(),
            bindings: FxHashMap::default(),
            error: None,
        }
    }

    fn resolve_use(&mut self, ident: &Ident) {
        match self.scopes.lookup(&ident.name) {
            Some(binding) => {
                self.bindings.insert(ident.id, binding);
            }
            None if self.error.is_none() => {
                trace!(name = %ident.name, line = ident.span.line, "unbound identifier");
                self.error = Some(SymbolError::unbound(ident.name.clone(), ident.span));
            }
            None => {}
        }
    }
}

impl Visitor for Binder {
    fn visit_program(&mut self, program: &Program) {
        // Functions are mutually visible: pre-seed before binding any body.
        for func in &program.functions {
            self.scopes.declare(&func.name.name, func.name.id);
        }
        for func in &program.functions {
            self.visit_function(func);
        }
    }

    fn visit_function(&mut self, func: &Function) {
        self.scopes.enter_scope();
        for param in &func.params.names {
            self.scopes.declare(&param.name, param.id);
        }
        self.visit_function_block(&func.body);
        self.scopes.exit_scope();
    }

    fn visit_function_block(&mut self, block: &FunctionBlock) {
        for decl in &block.var_decls {
            self.visit_var_decl(decl);
        }
        for stmt in &block.stmts {
            self.visit_stmt(stmt);
        }
        self.visit_expr(&block.return_stmt.value);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        for name in &decl.names {
            self.scopes.declare(&name.name, name.id);
        }
    }

    /// By construction this is only reached from the default `walk_stmt`
    /// / `walk_expr` helpers, which call it exclusively at use sites
    /// (every binding site is handled above without delegating here).
    fn visit_ident(&mut self, ident: &Ident) {
        self.resolve_use(ident);
    }
}

/// Resolve every identifier use in `program`. Fails on the first unbound
/// use encountered in traversal order.
pub fn resolve(program: &Program) -> Result<SymbolTable, SymbolError> {
    let mut binder = Binder::new();
    binder.visit_program(program);
    match binder.error {
        Some(err) => Err(err),
        None => Ok(SymbolTable {
            bindings: binder.bindings,
        }),
    }
}
