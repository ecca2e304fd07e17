//! The closure pass: reads solved union-find state and materializes a
//! finite `Type` tree per term, introducing `Rec` binders wherever a
//! constructor's children loop back to an ancestor still being closed.

use rustc_hash::FxHashSet;
use tip_solver::{TermArena, TermId, TermShape, TermValue};

use crate::ty::Type;

/// Closes one term. `arena` is read-only here in spirit (closure never
/// mutates union-find links) even though `find_root`/`value_of` need `&mut`
/// for path compression bookkeeping.
pub fn close(arena: &mut TermArena, root: TermId) -> Type {
    let mut closer = Closer {
        arena,
        in_progress: FxHashSet::default(),
        recursive: FxHashSet::default(),
    };
    closer.close(root)
}

struct Closer<'a> {
    arena: &'a mut TermArena,
    /// Roots whose materialization is currently on the call stack — these
    /// are the active μ-binder guards. Keyed by the root's own numeric id,
    /// which doubles as that binder's variable name.
    in_progress: FxHashSet<u32>,
    /// Roots confirmed to be self-referential, recorded the moment a back
    /// edge to them is observed; consumed when that root's frame unwinds.
    recursive: FxHashSet<u32>,
}

impl<'a> Closer<'a> {
    fn close(&mut self, t: TermId) -> Type {
        let root = self.arena.find_root(t);
        let root_id = root.as_u32();

        if self.in_progress.contains(&root_id) {
            self.recursive.insert(root_id);
            return Type::Var(root_id);
        }

        match self.arena.value_of(root) {
            TermValue::Unbound => Type::Var(root_id),
            TermValue::Known(shape) => {
                self.in_progress.insert(root_id);
                let inner = self.close_shape(shape);
                self.in_progress.remove(&root_id);

                if self.recursive.remove(&root_id) {
                    Type::Rec(root_id, Box::new(inner))
                } else {
                    inner
                }
            }
        }
    }

    fn close_shape(&mut self, shape: TermShape) -> Type {
        match shape {
            TermShape::Int => Type::Int,
            TermShape::String => Type::String,
            TermShape::Ptr(inner) => Type::Ptr(Box::new(self.close(inner))),
            TermShape::Fun(params, ret) => {
                let params = params.into_iter().map(|p| self.close(p)).collect();
                let ret = Box::new(self.close(ret));
                Type::Fun(params, ret)
            }
        }
    }
}
