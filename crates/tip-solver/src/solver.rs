//! Unification over the term arena, implementing the solver's core
//! algorithm: two roots with incompatible known shapes fail the whole
//! analysis, two roots where at least one is still unbound simply merge,
//! and two roots with matching constructors recurse into their children
//! before merging.

use tip_common::TypeError;
use tracing::trace;

use crate::types::{TermArena, TermId, TermShape, TermValue};

/// One constraint emitted by the constraint generator: `left` and `right`
/// must denote the same type.
#[derive(Clone, Copy, Debug)]
pub struct Constraint {
    pub left: TermId,
    pub right: TermId,
}

impl Constraint {
    pub fn new(left: TermId, right: TermId) -> Self {
        Constraint { left, right }
    }
}

/// Unify every constraint against `arena`, stopping at the first failure.
pub fn solve(arena: &mut TermArena, constraints: &[Constraint]) -> Result<(), TypeError> {
    for c in constraints {
        unify(arena, c.left, c.right)?;
    }
    Ok(())
}

/// Make `a` and `b` denote the same type, recursively unifying their
/// children first when both are already known constructors.
pub fn unify(arena: &mut TermArena, a: TermId, b: TermId) -> Result<(), TypeError> {
    let ra = arena.find_root(a);
    let rb = arena.find_root(b);
    if ra == rb {
        return Ok(());
    }

    match (arena.value_of(ra), arena.value_of(rb)) {
        (TermValue::Unbound, _) | (_, TermValue::Unbound) => {
            arena.union(ra, rb);
            Ok(())
        }
        (TermValue::Known(sa), TermValue::Known(sb)) => unify_known(arena, ra, rb, sa, sb),
    }
}

fn unify_known(
    arena: &mut TermArena,
    ra: TermId,
    rb: TermId,
    sa: TermShape,
    sb: TermShape,
) -> Result<(), TypeError> {
    match (&sa, &sb) {
        (TermShape::Int, TermShape::Int) | (TermShape::String, TermShape::String) => {
            arena.union(ra, rb);
            Ok(())
        }
        (TermShape::Ptr(ia), TermShape::Ptr(ib)) => {
            let (ia, ib) = (*ia, *ib);
            unify(arena, ia, ib)?;
            arena.union(ra, rb);
            Ok(())
        }
        (TermShape::Fun(pa, reta), TermShape::Fun(pb, retb)) => {
            if pa.len() != pb.len() {
                trace!(arity_a = pa.len(), arity_b = pb.len(), "function arity mismatch");
                return Err(TypeError::cannot_unify(
                    render_shape(&sa),
                    render_shape(&sb),
                ));
            }
            let (pa, pb) = (pa.clone(), pb.clone());
            let (reta, retb) = (*reta, *retb);
            for (x, y) in pa.iter().zip(pb.iter()) {
                unify(arena, *x, *y)?;
            }
            unify(arena, reta, retb)?;
            arena.union(ra, rb);
            Ok(())
        }
        _ => Err(TypeError::cannot_unify(
            render_shape(&sa),
            render_shape(&sb),
        )),
    }
}

/// A one-level rendering of a shape for error messages: good enough to
/// tell the constructor kinds apart without walking into (possibly still
/// partially unresolved) children.
fn render_shape(shape: &TermShape) -> String {
    match shape {
        TermShape::Int => "int".to_string(),
        TermShape::String => "string".to_string(),
        TermShape::Ptr(_) => "\u{2191}_".to_string(),
        TermShape::Fun(params, _) => {
            let placeholders = vec!["_"; params.len()].join(", ");
            format!("({}) -> _", placeholders)
        }
    }
}
