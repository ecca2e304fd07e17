//! The finite, cycle-free type tree produced by the closure pass, and its
//! fixed string rendering.

use std::fmt;

/// A solved, cycle-free TIP type. Unlike `tip_solver::TermShape`, this
/// carries no union-find linkage — it is the materialized end result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Int,
    String,
    Ptr(Box<Type>),
    Fun(Vec<Type>, Box<Type>),
    /// An unconstrained variable, named by its union-find root id.
    Var(u32),
    /// An explicit recursive binder: `v`'s occurrences inside `body` stand
    /// for the whole `Rec` node itself.
    Rec(u32, Box<Type>),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::String => write!(f, "string"),
            Type::Ptr(inner) => write!(f, "\u{2191}{inner}"),
            Type::Fun(params, ret) => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {ret}")
            }
            Type::Var(id) => write!(f, "${id}"),
            Type::Rec(v, body) => write!(f, "\u{3bc}${v}.{body}"),
        }
    }
}
