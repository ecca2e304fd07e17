//! Union-find based unification over TIP's structural type terms.
//!
//! This crate knows nothing about TIP's AST or its constraint-generation
//! rules; it only knows how to merge two term trees (or fail) and report
//! the result. [`tip-checker`] builds the term graph and calls [`solve`]
//! over it.

mod solver;
mod types;

pub use solver::{solve, unify, Constraint};
pub use types::{ParamList, TermArena, TermId, TermShape, TermValue};
