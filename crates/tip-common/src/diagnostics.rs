//! The analyzer's two observable failure kinds.
//!
//! Both are fatal: the analysis aborts on the first one raised and no
//! partial result is exposed (see the error handling policy in the
//! top-level design notes).

use std::fmt;

use crate::span::Span;

/// An identifier use with no reachable binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolError {
    pub name: String,
    pub span: Span,
}

impl SymbolError {
    pub fn unbound(name: impl Into<String>, span: Span) -> Self {
        SymbolError {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "undefined variable `{}` at line {}",
            self.name, self.span.line
        )
    }
}

impl std::error::Error for SymbolError {}

/// A unification failure: two type terms could not be made equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeError {
    pub left: String,
    pub right: String,
}

impl TypeError {
    pub fn cannot_unify(left: impl Into<String>, right: impl Into<String>) -> Self {
        TypeError {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot unify {} and {}", self.left, self.right)
    }
}

impl std::error::Error for TypeError {}

/// The error surface of a full analysis run: either phase can abort it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    Symbol(SymbolError),
    Type(TypeError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Symbol(e) => e.fmt(f),
            AnalysisError::Type(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<SymbolError> for AnalysisError {
    fn from(e: SymbolError) -> Self {
        AnalysisError::Symbol(e)
    }
}

impl From<TypeError> for AnalysisError {
    fn from(e: TypeError) -> Self {
        AnalysisError::Type(e)
    }
}
