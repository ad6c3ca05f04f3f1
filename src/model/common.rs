use super::Block;
use crate::types::BlockId;

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCommon {
    pub id: BlockId,
    /// Reported by the API: more descendants exist server-side.
    pub has_children: bool,
    /// Populated by the tree fetcher; empty until then.
    pub children: Vec<Block>,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            has_children: false,
            children: Vec::new(),
        }
    }

    /// Attaches already-fetched children, marking the block as a parent.
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }
}
