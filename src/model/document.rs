//! Document-level types.

use super::{Block, Role};
use serde::{Deserialize, Serialize};

/// A rendered document: ordered styled blocks plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Blocks in output order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block, keeping metadata in step.
    pub fn add_block(&mut self, block: Block) {
        self.metadata.record(&block);
        self.blocks.push(block);
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The title block, if any.
    pub fn title(&self) -> Option<&Block> {
        self.blocks.iter().find(|b| b.is_title())
    }

    /// Iterate over blocks with the given role.
    pub fn blocks_with_role(&self, role: Role) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.role == role)
    }

    /// Plain text of the document, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Text of the title block
    pub title: Option<String>,

    /// Number of subheading blocks
    pub subheading_count: u32,

    /// Number of paragraph blocks
    pub paragraph_count: u32,
}

impl Metadata {
    fn record(&mut self, block: &Block) {
        match block.role {
            Role::Title => {
                if self.title.is_none() {
                    self.title = Some(block.text.clone());
                }
            }
            Role::Subheading => self.subheading_count += 1,
            Role::Paragraph => self.paragraph_count += 1,
            Role::Blank => {}
        }
    }
}
