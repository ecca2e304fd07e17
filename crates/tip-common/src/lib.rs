//! Common types shared across the tip analyzer crates.
//!
//! This crate provides:
//! - `Span` - source location tracking (byte offsets + source line)
//! - `SymbolError` / `TypeError` / `AnalysisError` - the analyzer's error surface

pub mod diagnostics;
pub mod span;

pub use diagnostics::{AnalysisError, SymbolError, TypeError};
pub use span::Span;
