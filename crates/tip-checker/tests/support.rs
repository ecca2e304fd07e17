//! Hand-built ASTs for the literal example programs in the type inference
//! scenarios. There is no parser in this workspace, so these mirror what
//! one would produce from TIP source text.
#![allow(dead_code)]

use tip_ast::{
    Assign, AssignTarget, BinOp, Block, Const, Expr, Function, FunctionBlock, Ident, If,
    NodeIdGen, Output, Parameters, Program, Return, Stmt, VarDecl, While,
};
use tip_common::Span;

pub fn ident(gen: &NodeIdGen, name: &str) -> Ident {
    Ident {
        id: gen.next(),
        name: name.to_string(),
        span: Span::new(1, 0, 0),
    }
}

pub fn ident_expr(gen: &NodeIdGen, name: &str) -> Expr {
    Expr::Ident(ident(gen, name))
}

pub fn int(gen: &NodeIdGen, v: i64) -> Expr {
    Expr::Const {
        id: gen.next(),
        value: Const::Int(v),
    }
}

pub fn assign_ident(gen: &NodeIdGen, name: &str, value: Expr) -> Stmt {
    Stmt::Assign(Assign {
        id: gen.next(),
        target: AssignTarget::Ident(ident(gen, name)),
        value,
    })
}

pub fn var_decl(gen: &NodeIdGen, names: &[&str]) -> VarDecl {
    VarDecl {
        id: gen.next(),
        names: names.iter().map(|n| ident(gen, n)).collect(),
    }
}

pub fn ret(gen: &NodeIdGen, value: Expr) -> Return {
    Return {
        id: gen.next(),
        value,
    }
}

/// `short() { var x, y, z; x = input; y = alloc x; *y = x; z = *y; return z; }`
pub fn program_short(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["x", "y", "z"])],
        stmts: vec![
            assign_ident(gen, "x", Expr::Input { id: gen.next() }),
            assign_ident(
                gen,
                "y",
                Expr::Alloc {
                    id: gen.next(),
                    expr: Box::new(ident_expr(gen, "x")),
                },
            ),
            Stmt::Assign(Assign {
                id: gen.next(),
                target: AssignTarget::Deref(Box::new(ident_expr(gen, "y"))),
                value: ident_expr(gen, "x"),
            }),
            assign_ident(
                gen,
                "z",
                Expr::Deref {
                    id: gen.next(),
                    expr: Box::new(ident_expr(gen, "y")),
                },
            ),
        ],
        return_stmt: ret(gen, ident_expr(gen, "z")),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "short"),
            params: Parameters {
                id: gen.next(),
                names: vec![],
            },
            body,
        }],
    }
}

/// `store(a,b) { *b = a; return 0; }`
pub fn program_store(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![],
        stmts: vec![Stmt::Assign(Assign {
            id: gen.next(),
            target: AssignTarget::Deref(Box::new(ident_expr(gen, "b"))),
            value: ident_expr(gen, "a"),
        })],
        return_stmt: ret(gen, int(gen, 0)),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "store"),
            params: Parameters {
                id: gen.next(),
                names: vec![ident(gen, "a"), ident(gen, "b")],
            },
            body,
        }],
    }
}

/// `main() { var p; p = alloc null; *p = p; return 0; }`
pub fn program_self_storing_pointer(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["p"])],
        stmts: vec![
            assign_ident(
                gen,
                "p",
                Expr::Alloc {
                    id: gen.next(),
                    expr: Box::new(Expr::Const {
                        id: gen.next(),
                        value: Const::Null,
                    }),
                },
            ),
            Stmt::Assign(Assign {
                id: gen.next(),
                target: AssignTarget::Deref(Box::new(ident_expr(gen, "p"))),
                value: ident_expr(gen, "p"),
            }),
        ],
        return_stmt: ret(gen, int(gen, 0)),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "main"),
            params: Parameters {
                id: gen.next(),
                names: vec![],
            },
            body,
        }],
    }
}

/// ```text
/// foo(p,x) {
///   var f,q;
///   if (*q==0) { f=1; } else { q = alloc 0; *q = (*p)-1; f = (*p)*(x(q,x)); }
///   return f;
/// }
/// main() { var n; n = input; return foo(&n, foo); }
/// ```
pub fn program_higher_order_recursion(gen: &NodeIdGen) -> Program {
    let deref_p = || Expr::Deref {
        id: gen.next(),
        expr: Box::new(ident_expr(gen, "p")),
    };
    let deref_q_eq_0 = Expr::Binary {
        id: gen.next(),
        op: BinOp::Eq,
        left: Box::new(Expr::Deref {
            id: gen.next(),
            expr: Box::new(ident_expr(gen, "q")),
        }),
        right: Box::new(int(gen, 0)),
    };
    let then_branch = Block {
        id: gen.next(),
        stmts: vec![assign_ident(gen, "f", int(gen, 1))],
    };
    let else_branch = Block {
        id: gen.next(),
        stmts: vec![
            assign_ident(
                gen,
                "q",
                Expr::Alloc {
                    id: gen.next(),
                    expr: Box::new(int(gen, 0)),
                },
            ),
            Stmt::Assign(Assign {
                id: gen.next(),
                target: AssignTarget::Deref(Box::new(ident_expr(gen, "q"))),
                value: Expr::Binary {
                    id: gen.next(),
                    op: BinOp::Sub,
                    left: Box::new(deref_p()),
                    right: Box::new(int(gen, 1)),
                },
            }),
            assign_ident(
                gen,
                "f",
                Expr::Binary {
                    id: gen.next(),
                    op: BinOp::Mul,
                    left: Box::new(deref_p()),
                    right: Box::new(Expr::Call {
                        id: gen.next(),
                        callee: Box::new(ident_expr(gen, "x")),
                        args: vec![ident_expr(gen, "q"), ident_expr(gen, "x")],
                    }),
                },
            ),
        ],
    };

    let foo_body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["f", "q"])],
        stmts: vec![Stmt::If(If {
            id: gen.next(),
            cond: deref_q_eq_0,
            then_branch,
            else_branch: Some(else_branch),
        })],
        return_stmt: ret(gen, ident_expr(gen, "f")),
    };
    let foo = Function {
        id: gen.next(),
        name: ident(gen, "foo"),
        params: Parameters {
            id: gen.next(),
            names: vec![ident(gen, "p"), ident(gen, "x")],
        },
        body: foo_body,
    };

    let main_body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["n"])],
        stmts: vec![assign_ident(gen, "n", Expr::Input { id: gen.next() })],
        return_stmt: ret(
            gen,
            Expr::Call {
                id: gen.next(),
                callee: Box::new(ident_expr(gen, "foo")),
                args: vec![
                    Expr::AddressOf {
                        id: gen.next(),
                        target: ident(gen, "n"),
                    },
                    ident_expr(gen, "foo"),
                ],
            },
        ),
    };
    let main = Function {
        id: gen.next(),
        name: ident(gen, "main"),
        params: Parameters {
            id: gen.next(),
            names: vec![],
        },
        body: main_body,
    };

    Program {
        functions: vec![foo, main],
    }
}

/// `main() { var x,y; x = input; y = alloc x; x = x + y; return 0; }`
pub fn program_int_pointer_mismatch(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["x", "y"])],
        stmts: vec![
            assign_ident(gen, "x", Expr::Input { id: gen.next() }),
            assign_ident(
                gen,
                "y",
                Expr::Alloc {
                    id: gen.next(),
                    expr: Box::new(ident_expr(gen, "x")),
                },
            ),
            assign_ident(
                gen,
                "x",
                Expr::Binary {
                    id: gen.next(),
                    op: BinOp::Add,
                    left: Box::new(ident_expr(gen, "x")),
                    right: Box::new(ident_expr(gen, "y")),
                },
            ),
        ],
        return_stmt: ret(gen, int(gen, 0)),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "main"),
            params: Parameters {
                id: gen.next(),
                names: vec![],
            },
            body,
        }],
    }
}

/// `foo(p) { var q; q = "hello"; *p = q; return 0; }`
pub fn program_string_through_pointer(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["q"])],
        stmts: vec![
            assign_ident(
                gen,
                "q",
                Expr::Const {
                    id: gen.next(),
                    value: Const::String("hello".to_string()),
                },
            ),
            Stmt::Assign(Assign {
                id: gen.next(),
                target: AssignTarget::Deref(Box::new(ident_expr(gen, "p"))),
                value: ident_expr(gen, "q"),
            }),
        ],
        return_stmt: ret(gen, int(gen, 0)),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "foo"),
            params: Parameters {
                id: gen.next(),
                names: vec![ident(gen, "p")],
            },
            body,
        }],
    }
}

/// `arith() { var a,b,c; a = input; b = input; c = a + b; return c; }`
pub fn program_plain_arithmetic(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![var_decl(gen, &["a", "b", "c"])],
        stmts: vec![
            assign_ident(gen, "a", Expr::Input { id: gen.next() }),
            assign_ident(gen, "b", Expr::Input { id: gen.next() }),
            assign_ident(
                gen,
                "c",
                Expr::Binary {
                    id: gen.next(),
                    op: BinOp::Add,
                    left: Box::new(ident_expr(gen, "a")),
                    right: Box::new(ident_expr(gen, "b")),
                },
            ),
        ],
        return_stmt: ret(gen, ident_expr(gen, "c")),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "arith"),
            params: Parameters {
                id: gen.next(),
                names: vec![],
            },
            body,
        }],
    }
}

/// `loopy() { while (input) { output 1; } return 0; }` — exercises `While`
/// for the CFG builder.
pub fn program_with_while(gen: &NodeIdGen) -> Program {
    let body = FunctionBlock {
        id: gen.next(),
        var_decls: vec![],
        stmts: vec![Stmt::While(While {
            id: gen.next(),
            cond: Expr::Input { id: gen.next() },
            body: Block {
                id: gen.next(),
                stmts: vec![Stmt::Output(Output {
                    id: gen.next(),
                    value: int(gen, 1),
                })],
            },
        })],
        return_stmt: ret(gen, int(gen, 0)),
    };
    Program {
        functions: vec![Function {
            id: gen.next(),
            name: ident(gen, "loopy"),
            params: Parameters {
                id: gen.next(),
                names: vec![],
            },
            body,
        }],
    }
}
