//! Stable node identity.
//!
//! Every expression (and every other AST node we need to key a map by)
//! carries a `NodeId` assigned once, at construction time, by the
//! external parser. Two nodes are the same node iff their ids are equal;
//! ids are never reused within one `Program`.

use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Monotonic allocator for `NodeId`s.
///
/// Per-analysis by default (construct one per parse, pass it to the
/// builder that assembles the AST) so that tests stay deterministic; see
/// the concurrency notes on why a process-wide counter is discouraged.
#[derive(Default)]
pub struct NodeIdGen {
    next: AtomicU32,
}

impl NodeIdGen {
    pub fn new() -> Self {
        NodeIdGen {
            next: AtomicU32::new(0),
        }
    }

    pub fn next(&self) -> NodeId {
        NodeId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
