//! The structural type term language and its union-find representation.
//!
//! Every term — whether a fresh type variable or a concrete constructor —
//! is a key into one [`ena`] unification table. A key's `Value` is either
//! `Unbound` (a free variable) or `Known(shape)` (a variable already
//! equated to a constructor, or a constructor node itself). This gives us
//! path-compressed `find`/`union` for free, and lets [`ena`]'s value
//! merging do the "a var unified with a constructor becomes that
//! constructor" step automatically.

use ena::unify::{InPlaceUnificationTable, NoError, UnifyKey, UnifyValue};
use smallvec::SmallVec;

/// Inline capacity for a function term's parameter list. Most TIP
/// functions take a handful of parameters, so this avoids a heap
/// allocation in the common case.
pub type ParamList = SmallVec<[TermId; 4]>;

/// A type term's stable identity: a union-find key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TermId(u32);

impl TermId {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl UnifyKey for TermId {
    type Value = TermValue;

    fn index(&self) -> u32 {
        self.0
    }

    fn from_index(u: u32) -> Self {
        TermId(u)
    }

    fn tag() -> &'static str {
        "TermId"
    }
}

/// A constructor: the non-variable members of the type term language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermShape {
    Int,
    String,
    Ptr(TermId),
    Fun(ParamList, TermId),
}

/// A union-find class's payload: nothing known yet, or a constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermValue {
    Unbound,
    Known(TermShape),
}

impl UnifyValue for TermValue {
    type Error = NoError;

    fn unify_values(a: &Self, b: &Self) -> Result<Self, NoError> {
        Ok(match (a, b) {
            (TermValue::Known(shape), TermValue::Unbound)
            | (TermValue::Unbound, TermValue::Known(shape)) => TermValue::Known(shape.clone()),
            (TermValue::Unbound, TermValue::Unbound) => TermValue::Unbound,
            // Both known: the caller (`Solver::unify`) already checked
            // structural compatibility and recursively unified children
            // before asking the table to merge the two roots, so either
            // value represents the class equally well.
            (TermValue::Known(shape), TermValue::Known(_)) => TermValue::Known(shape.clone()),
        })
    }
}

/// The term arena plus its union-find links. Owns every `TermId` ever
/// allocated during one analysis; never shrinks, matching the "type
/// variables are created during constraint generation and never deleted"
/// lifecycle.
pub struct TermArena {
    pub(crate) table: InPlaceUnificationTable<TermId>,
}

impl Default for TermArena {
    fn default() -> Self {
        TermArena {
            table: InPlaceUnificationTable::new(),
        }
    }
}

impl TermArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_var(&mut self) -> TermId {
        self.table.new_key(TermValue::Unbound)
    }

    pub fn new_int(&mut self) -> TermId {
        self.table.new_key(TermValue::Known(TermShape::Int))
    }

    pub fn new_string(&mut self) -> TermId {
        self.table.new_key(TermValue::Known(TermShape::String))
    }

    pub fn new_ptr(&mut self, inner: TermId) -> TermId {
        self.table.new_key(TermValue::Known(TermShape::Ptr(inner)))
    }

    pub fn new_fun(&mut self, params: impl Into<ParamList>, ret: TermId) -> TermId {
        let params = params.into();
        self.table
            .new_key(TermValue::Known(TermShape::Fun(params, ret)))
    }

    /// The representative id of `t`'s equivalence class, with path
    /// compression.
    pub fn find_root(&mut self, t: TermId) -> TermId {
        self.table.find(t)
    }

    /// The value carried by `t`'s equivalence class (after `find`).
    pub fn value_of(&mut self, t: TermId) -> TermValue {
        let root = self.table.find(t);
        self.table.probe_value(root)
    }

    pub(crate) fn union(&mut self, a: TermId, b: TermId) {
        self.table
            .unify_var_var(a, b)
            .expect("TermValue::unify_values is infallible");
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }
}
