//! AST model and visitor contract for the TIP language.
//!
//! This crate provides:
//! - `ast` - the closed family of statement and expression node variants
//! - `ids` - `NodeId`, the stable expression/statement identity used as a map key downstream
//! - `visitor` - the single-dispatch traversal shape shared by the binder and the constraint generator

pub mod ast;
pub mod ids;
pub mod visitor;

pub use ast::*;
pub use ids::{NodeId, NodeIdGen};
pub use visitor::Visitor;
