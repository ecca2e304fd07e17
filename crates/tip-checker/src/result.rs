//! The analysis result facade: `type_of` by stable expression identity,
//! plus iteration over every typed node.

use rustc_hash::FxHashMap;
use tip_ast::NodeId;

use crate::ty::Type;

#[derive(Debug, Default)]
pub struct AnalysisResult {
    types: FxHashMap<NodeId, Type>,
}

impl AnalysisResult {
    pub(crate) fn new(types: FxHashMap<NodeId, Type>) -> Self {
        AnalysisResult { types }
    }

    pub fn type_of(&self, node: NodeId) -> Option<&Type> {
        self.types.get(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Type)> {
        self.types.iter().map(|(&id, ty)| (id, ty))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
