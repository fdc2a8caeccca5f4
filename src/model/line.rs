//! Line-level types produced by the classifier.

use serde::{Deserialize, Serialize};

/// Semantic category of one line of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The first non-blank line
    Title,
    /// A line opening with a numeric outline token ("1.1 ", "2、")
    Subheading,
    /// Body text
    Paragraph,
    /// Empty after cleaning; never rendered
    Blank,
}

impl Role {
    /// Whether lines with this role produce a block.
    pub fn is_rendered(self) -> bool {
        !matches!(self, Role::Blank)
    }

    /// Lowercase name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Title => "title",
            Role::Subheading => "subheading",
            Role::Paragraph => "paragraph",
            Role::Blank => "blank",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cleaned line together with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Assigned role
    pub role: Role,

    /// Cleaned, trimmed text
    pub text: String,

    /// 1-indexed line number in the source text
    pub line_number: usize,
}

impl ClassifiedLine {
    /// Create a classified line.
    pub fn new(role: Role, text: impl Into<String>, line_number: usize) -> Self {
        Self {
            role,
            text: text.into(),
            line_number,
        }
    }

    /// Shorthand for a title line.
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(Role::Title, text, 0)
    }

    /// Shorthand for a subheading line.
    pub fn subheading(text: impl Into<String>) -> Self {
        Self::new(Role::Subheading, text, 0)
    }

    /// Shorthand for a paragraph line.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Role::Paragraph, text, 0)
    }
}
