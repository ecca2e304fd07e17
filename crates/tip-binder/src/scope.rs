//! A scope stack keyed by name, with an explicit sentinel marking scope
//! boundaries in each name's stack individually. This lets `exit_scope`
//! pop exactly the bindings introduced since the matching `enter_scope`,
//! one name at a time, without having to track which names were touched.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tip_ast::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// Marks where a scope began, for this name's stack.
    Boundary,
    Binding(NodeId),
}

/// TIP has no nested function definitions, so a given name is rarely
/// shadowed more than once or twice; inline storage avoids a heap
/// allocation for the common case.
type SlotStack = SmallVec<[Slot; 4]>;

#[derive(Default)]
pub struct ScopeStack {
    names: FxHashMap<String, SlotStack>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Push a boundary marker onto every name's stack. Any name declared
    /// before this call but not yet reachable through a binding isn't
    /// affected (its stack is just empty, or already not top-of-stack).
    pub fn enter_scope(&mut self) {
        for slots in self.names.values_mut() {
            slots.push(Slot::Boundary);
        }
    }

    /// Pop back to (and including) the most recent boundary marker on
    /// every name's stack, undoing everything `declare`d since the
    /// matching `enter_scope`.
    pub fn exit_scope(&mut self) {
        for slots in self.names.values_mut() {
            while let Some(slot) = slots.pop() {
                if slot == Slot::Boundary {
                    break;
                }
            }
        }
    }

    /// Bind `name` to `binding` in the current (innermost) scope.
    /// Re-declaration in the same scope is not rejected: the later
    /// declaration simply shadows the earlier one, matching TIP's lack
    /// of a redeclaration check.
    pub fn declare(&mut self, name: &str, binding: NodeId) {
        self.names
            .entry(name.to_string())
            .or_default()
            .push(Slot::Binding(binding));
    }

    /// The innermost binding currently visible for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        let slots = self.names.get(name)?;
        slots.iter().rev().find_map(|slot| match slot {
            Slot::Binding(id) => Some(*id),
            Slot::Boundary => None,
        })
    }
}
