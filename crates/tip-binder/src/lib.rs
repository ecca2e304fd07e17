//! Lexically-scoped symbol resolution for the TIP language.
//!
//! This crate provides:
//! - `resolve` - binds every identifier use to its declaration, parameter, or function name
//! - `SymbolTable` - the resulting use -> binding map
//! - `SymbolError` (re-exported from `tip-common`) - raised on an unbound identifier

mod resolver;
mod scope;

pub use resolver::{resolve, SymbolTable};
pub use tip_common::SymbolError;
