//! Constraint generation: one pass over the AST producing `Equal` facts
//! over freshly allocated type terms, consulting the symbol table to tie
//! identifier uses back to their bindings.
//!
//! This walks the tree by hand rather than through `tip_ast::Visitor`:
//! every recursive call needs to return the subexpression's `TermId`, which
//! the visitor's side-effecting `()` contract doesn't carry.

use rustc_hash::FxHashMap;
use tip_ast::{Assign, AssignTarget, Block, Const, Expr, Function, Program, Stmt};
use tip_ast::NodeId;
use tip_binder::SymbolTable;
use tip_solver::{Constraint, ParamList, TermArena, TermId};

/// Everything the solver and result facade need out of one generation pass.
pub struct ConstraintOutput {
    pub constraints: Vec<Constraint>,
    /// Every AST node that was assigned a fresh term, keyed by node identity.
    pub node_vars: FxHashMap<NodeId, TermId>,
    /// The inverse of `node_vars`, for mapping a solved term back to the
    /// node it was minted for.
    pub var_nodes: FxHashMap<TermId, NodeId>,
}

pub fn generate(program: &Program, symbols: &SymbolTable, arena: &mut TermArena) -> ConstraintOutput {
    let mut gen = Generator {
        symbols,
        arena,
        node_vars: FxHashMap::default(),
        constraints: Vec::new(),
        int_term: None,
        string_term: None,
    };
    for func in &program.functions {
        gen.gen_function(func);
    }
    let var_nodes = gen.node_vars.iter().map(|(&n, &v)| (v, n)).collect();
    ConstraintOutput {
        constraints: gen.constraints,
        node_vars: gen.node_vars,
        var_nodes,
    }
}

struct Generator<'a> {
    symbols: &'a SymbolTable,
    arena: &'a mut TermArena,
    node_vars: FxHashMap<NodeId, TermId>,
    constraints: Vec<Constraint>,
    int_term: Option<TermId>,
    string_term: Option<TermId>,
}

impl<'a> Generator<'a> {
    fn var_for(&mut self, id: NodeId) -> TermId {
        *self
            .node_vars
            .entry(id)
            .or_insert_with(|| self.arena.fresh_var())
    }

    fn equal(&mut self, a: TermId, b: TermId) {
        self.constraints.push(Constraint::new(a, b));
    }

    fn int_term(&mut self) -> TermId {
        if let Some(t) = self.int_term {
            return t;
        }
        let t = self.arena.new_int();
        self.int_term = Some(t);
        t
    }

    fn string_term(&mut self) -> TermId {
        if let Some(t) = self.string_term {
            return t;
        }
        let t = self.arena.new_string();
        self.string_term = Some(t);
        t
    }

    /// The var a use-site identifier is equated to: its binding's var,
    /// looked up through the symbol table. Panics on an unresolved name —
    /// by contract `symbols` was already built successfully by the caller.
    fn binding_var(&mut self, use_id: NodeId) -> TermId {
        let binding = self
            .symbols
            .binding_of(use_id)
            .expect("constraint generation runs only over a successfully resolved program");
        self.var_for(binding)
    }

    fn gen_function(&mut self, func: &Function) {
        let fn_var = self.var_for(func.name.id);
        let param_vars: ParamList = func
            .params
            .names
            .iter()
            .map(|p| self.var_for(p.id))
            .collect();

        for decl in &func.body.var_decls {
            for name in &decl.names {
                self.var_for(name.id);
            }
        }
        for stmt in &func.body.stmts {
            self.gen_stmt(stmt);
        }
        let ret_var = self.gen_expr(&func.body.return_stmt.value);

        let fun_term = self.arena.new_fun(param_vars, ret_var);
        self.equal(fn_var, fun_term);

        if func.name.name == "main" {
            let int = self.int_term();
            self.equal(ret_var, int);
        }
    }

    fn gen_block(&mut self, block: &Block) {
        for stmt in &block.stmts {
            self.gen_stmt(stmt);
        }
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign(assign) => self.gen_assign(assign),
            Stmt::Output(output) => {
                let v = self.gen_expr(&output.value);
                let int = self.int_term();
                self.equal(v, int);
            }
            Stmt::If(if_stmt) => {
                let c = self.gen_expr(&if_stmt.cond);
                let int = self.int_term();
                self.equal(c, int);
                self.gen_block(&if_stmt.then_branch);
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.gen_block(else_branch);
                }
            }
            Stmt::While(while_stmt) => {
                let c = self.gen_expr(&while_stmt.cond);
                let int = self.int_term();
                self.equal(c, int);
                self.gen_block(&while_stmt.body);
            }
            Stmt::Block(block) => self.gen_block(block),
        }
    }

    fn gen_assign(&mut self, assign: &Assign) {
        let rhs_var = self.gen_expr(&assign.value);
        match &assign.target {
            AssignTarget::Ident(ident) => {
                let binding_var = self.binding_var(ident.id);
                let target_var = self.var_for(ident.id);
                self.equal(target_var, binding_var);
                self.equal(target_var, rhs_var);
            }
            // Field writes leave the record's type unconstrained; only the
            // base expression's own identifier use still needs resolving.
            AssignTarget::DirectField { base, .. } => {
                let binding_var = self.binding_var(base.id);
                let base_var = self.var_for(base.id);
                self.equal(base_var, binding_var);
            }
            AssignTarget::IndirectField { base, .. } => {
                self.gen_expr(base);
            }
            AssignTarget::Deref(inner) => {
                let inner_var = self.gen_expr(inner);
                let ptr = self.arena.new_ptr(rhs_var);
                self.equal(inner_var, ptr);
            }
        }
    }

    fn gen_expr(&mut self, expr: &Expr) -> TermId {
        let self_var = self.var_for(expr.id());
        match expr {
            Expr::Const { value, .. } => match value {
                Const::Int(_) | Const::Bool(_) => {
                    let int = self.int_term();
                    self.equal(self_var, int);
                }
                Const::String(_) => {
                    let s = self.string_term();
                    self.equal(self_var, s);
                }
                Const::Null => {
                    let inner = self.arena.fresh_var();
                    let ptr = self.arena.new_ptr(inner);
                    self.equal(self_var, ptr);
                }
            },
            Expr::Ident(ident) => {
                let binding_var = self.binding_var(ident.id);
                self.equal(self_var, binding_var);
            }
            Expr::Input { .. } => {
                let int = self.int_term();
                self.equal(self_var, int);
            }
            Expr::Binary {
                op, left, right, ..
            } => {
                let l = self.gen_expr(left);
                let r = self.gen_expr(right);
                let int = self.int_term();
                if op.is_equality() {
                    self.equal(l, r);
                } else {
                    self.equal(l, int);
                    self.equal(r, int);
                }
                self.equal(self_var, int);
            }
            Expr::AddressOf { target, .. } => {
                let binding_var = self.binding_var(target.id);
                let target_var = self.var_for(target.id);
                self.equal(target_var, binding_var);
                let ptr = self.arena.new_ptr(target_var);
                self.equal(self_var, ptr);
            }
            Expr::Deref { expr: inner, .. } => {
                let inner_var = self.gen_expr(inner);
                let ptr = self.arena.new_ptr(self_var);
                self.equal(ptr, inner_var);
            }
            Expr::Alloc { expr: inner, .. } => {
                let inner_var = self.gen_expr(inner);
                let ptr = self.arena.new_ptr(inner_var);
                self.equal(self_var, ptr);
            }
            Expr::Call { callee, args, .. } => {
                let callee_var = self.gen_expr(callee);
                let arg_vars: ParamList = args.iter().map(|a| self.gen_expr(a)).collect();
                let fun = self.arena.new_fun(arg_vars, self_var);
                self.equal(callee_var, fun);
            }
            // Records carry an expression-level var but the spec imposes no
            // field-level constraints; still walk the values so nested uses
            // resolve and nested expressions get their own constraints.
            Expr::Record { fields, .. } => {
                for (_, value) in fields {
                    self.gen_expr(value);
                }
            }
            Expr::Access { head, .. } => {
                self.gen_expr(head);
            }
        }
        self_var
    }
}
