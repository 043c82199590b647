//! Output surface trait definitions.

use crate::types::StatusBlock;

/// An addressable output region a loader writes status content into.
pub trait Surface: Send {
    /// Identifier given at construction.
    fn id(&self) -> &str;

    /// Remove all content.
    fn clear(&mut self);

    /// Append a status block after the current content.
    fn append(&mut self, block: StatusBlock);
}

/// Surface that keeps its content in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    id: String,
    blocks: Vec<StatusBlock>,
}

impl MemorySurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            blocks: Vec::new(),
        }
    }

    pub fn blocks(&self) -> &[StatusBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Current content rendered as markup.
    pub fn markup(&self) -> String {
        self.blocks.iter().map(StatusBlock::to_markup).collect()
    }
}

impl Surface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }

    fn append(&mut self, block: StatusBlock) {
        self.blocks.push(block);
    }
}
