//! Styled output blocks.

use super::Role;
use serde::{Deserialize, Serialize};

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// A styled block of text in a rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Role the block was rendered from
    pub role: Role,

    /// Block text
    pub text: String,

    /// Block styling
    pub style: BlockStyle,
}

impl Block {
    /// Create a new block.
    pub fn new(role: Role, text: impl Into<String>, style: BlockStyle) -> Self {
        Self {
            role,
            text: text.into(),
            style,
        }
    }

    /// Check if this block is the document title.
    pub fn is_title(&self) -> bool {
        self.role == Role::Title
    }

    /// Check if this block is a subheading.
    pub fn is_subheading(&self) -> bool {
        self.role == Role::Subheading
    }
}

/// Visual properties of a block.
///
/// Sizes and spacings are in points; `None` means "backend default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    /// Bold text
    pub bold: bool,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Horizontal alignment
    pub alignment: Alignment,

    /// Space before the block in points
    pub space_before: Option<f32>,

    /// Space after the block in points
    pub space_after: Option<f32>,

    /// First line indent in points
    pub first_line_indent: Option<f32>,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: Option<f32>,
}

impl BlockStyle {
    /// Check if any non-default styling is applied.
    pub fn has_styling(&self) -> bool {
        *self != BlockStyle::default()
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Convert inches to points.
pub fn inches(value: f32) -> f32 {
    value * POINTS_PER_INCH
}
