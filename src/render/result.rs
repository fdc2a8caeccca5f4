//! Formatting result with statistics.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{Metadata, Role};

/// Result of formatting and writing a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResult {
    /// Absolute path of the written file
    pub path: PathBuf,

    /// Document metadata
    pub metadata: Metadata,

    /// Formatting statistics
    pub stats: FormatStats,
}

impl FormatResult {
    /// Create a new format result.
    pub fn new(path: PathBuf, metadata: Metadata, stats: FormatStats) -> Self {
        Self {
            path,
            metadata,
            stats,
        }
    }
}

/// Statistics collected during one formatting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStats {
    /// Lines seen, including blank ones
    pub line_count: u32,

    /// Lines dropped as blank after cleaning
    pub blank_count: u32,

    /// Title blocks (0 or 1 per document)
    pub title_count: u32,

    /// Subheading blocks
    pub subheading_count: u32,

    /// Paragraph blocks
    pub paragraph_count: u32,

    /// Non-whitespace characters in rendered text
    pub char_count: u32,
}

impl FormatStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified line.
    pub fn add_line(&mut self, role: Role, text: &str) {
        self.line_count += 1;
        match role {
            Role::Title => self.title_count += 1,
            Role::Subheading => self.subheading_count += 1,
            Role::Paragraph => self.paragraph_count += 1,
            Role::Blank => self.blank_count += 1,
        }
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Record blank lines that were dropped before reaching the renderer.
    pub fn add_blank_lines(&mut self, count: u32) {
        self.line_count += count;
        self.blank_count += count;
    }

    /// Number of rendered blocks.
    pub fn block_count(&self) -> u32 {
        self.title_count + self.subheading_count + self.paragraph_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &FormatStats) {
        self.line_count += other.line_count;
        self.blank_count += other.blank_count;
        self.title_count += other.title_count;
        self.subheading_count += other.subheading_count;
        self.paragraph_count += other.paragraph_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_line() {
        let mut stats = FormatStats::new();
        stats.add_line(Role::Title, "My Title");
        stats.add_line(Role::Paragraph, "正文 内容");
        stats.add_blank_lines(2);

        assert_eq!(stats.line_count, 4);
        assert_eq!(stats.blank_count, 2);
        assert_eq!(stats.block_count(), 2);
        // "MyTitle" + "正文内容"
        assert_eq!(stats.char_count, 11);
    }

    #[test]
    fn test_merge() {
        let mut stats1 = FormatStats {
            paragraph_count: 5,
            title_count: 1,
            ..Default::default()
        };
        let stats2 = FormatStats {
            paragraph_count: 3,
            title_count: 1,
            subheading_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.title_count, 2);
        assert_eq!(stats1.subheading_count, 4);
    }
}
