//! A single traversal shape shared by the symbol resolver and the
//! constraint generator: each node dispatches to one visitor method, and
//! the default implementation recurses into children in source order.
//! Override only the methods you care about; everything else falls
//! through to `walk_*`.

use crate::ast::{
    AssignTarget, Block, Expr, Function, FunctionBlock, Ident, Program, Stmt, VarDecl,
};

pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_function(&mut self, func: &Function) {
        walk_function(self, func);
    }

    fn visit_function_block(&mut self, block: &FunctionBlock) {
        walk_function_block(self, block);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        walk_var_decl(self, decl);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    /// Called for every identifier *occurrence*: binding sites (`var`
    /// names, parameters, function names) and use sites alike. Visitors
    /// that only care about one kind check the call site, not this hook.
    fn visit_ident(&mut self, _ident: &Ident) {}
}

pub fn walk_program<V: Visitor + ?Sized>(v: &mut V, program: &Program) {
    for func in &program.functions {
        v.visit_function(func);
    }
}

pub fn walk_function<V: Visitor + ?Sized>(v: &mut V, func: &Function) {
    v.visit_ident(&func.name);
    for param in &func.params.names {
        v.visit_ident(param);
    }
    v.visit_function_block(&func.body);
}

pub fn walk_function_block<V: Visitor + ?Sized>(v: &mut V, block: &FunctionBlock) {
    for decl in &block.var_decls {
        v.visit_var_decl(decl);
    }
    for stmt in &block.stmts {
        v.visit_stmt(stmt);
    }
    v.visit_expr(&block.return_stmt.value);
}

pub fn walk_var_decl<V: Visitor + ?Sized>(v: &mut V, decl: &VarDecl) {
    for name in &decl.names {
        v.visit_ident(name);
    }
}

pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &Block) {
    for stmt in &block.stmts {
        v.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(v: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Assign(assign) => {
            match &assign.target {
                AssignTarget::Ident(id) => v.visit_ident(id),
                AssignTarget::DirectField { base, .. } => v.visit_ident(base),
                AssignTarget::IndirectField { base, .. } => v.visit_expr(base),
                AssignTarget::Deref(expr) => v.visit_expr(expr),
            }
            v.visit_expr(&assign.value);
        }
        Stmt::Output(output) => v.visit_expr(&output.value),
        Stmt::If(if_stmt) => {
            v.visit_expr(&if_stmt.cond);
            v.visit_block(&if_stmt.then_branch);
            if let Some(else_branch) = &if_stmt.else_branch {
                v.visit_block(else_branch);
            }
        }
        Stmt::While(while_stmt) => {
            v.visit_expr(&while_stmt.cond);
            v.visit_block(&while_stmt.body);
        }
        Stmt::Block(block) => v.visit_block(block),
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(v: &mut V, expr: &Expr) {
    match expr {
        Expr::Const { .. } | Expr::Input { .. } => {}
        Expr::Ident(ident) => v.visit_ident(ident),
        Expr::Binary { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::AddressOf { target, .. } => v.visit_ident(target),
        Expr::Deref { expr, .. } | Expr::Alloc { expr, .. } => v.visit_expr(expr),
        Expr::Call { callee, args, .. } => {
            v.visit_expr(callee);
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::Record { fields, .. } => {
            for (_, value) in fields {
                v.visit_expr(value);
            }
        }
        Expr::Access { head, .. } => v.visit_expr(head),
    }
}
