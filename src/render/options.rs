//! Rendering options and the style sheet applied per role.

use crate::model::{inches, Alignment, BlockStyle, Role};

/// Styles applied to each rendered role.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    /// Style of the title block
    pub title: BlockStyle,

    /// Style of numbered subheadings
    pub subheading: BlockStyle,

    /// Style of body paragraphs
    pub paragraph: BlockStyle,
}

impl StyleSheet {
    /// Style for a role, or `None` for roles that are never rendered.
    pub fn style_for(&self, role: Role) -> Option<&BlockStyle> {
        match role {
            Role::Title => Some(&self.title),
            Role::Subheading => Some(&self.subheading),
            Role::Paragraph => Some(&self.paragraph),
            Role::Blank => None,
        }
    }
}

impl Default for StyleSheet {
    /// Centered 18pt bold title, 14pt bold subheadings, and body paragraphs
    /// indented by two CJK character widths with 1.5 line spacing.
    fn default() -> Self {
        Self {
            title: BlockStyle {
                bold: true,
                font_size: Some(18.0),
                alignment: Alignment::Center,
                space_after: Some(24.0),
                ..Default::default()
            },
            subheading: BlockStyle {
                bold: true,
                font_size: Some(14.0),
                space_before: Some(16.0),
                space_after: Some(8.0),
                ..Default::default()
            },
            paragraph: BlockStyle {
                first_line_indent: Some(inches(0.33)),
                line_spacing: Some(1.5),
                ..Default::default()
            },
        }
    }
}

/// Options for rendering classified lines into a document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Styles per role
    pub styles: StyleSheet,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the title style.
    pub fn with_title_style(mut self, style: BlockStyle) -> Self {
        self.styles.title = style;
        self
    }

    /// Set the subheading style.
    pub fn with_subheading_style(mut self, style: BlockStyle) -> Self {
        self.styles.subheading = style;
        self
    }

    /// Set the paragraph style.
    pub fn with_paragraph_style(mut self, style: BlockStyle) -> Self {
        self.styles.paragraph = style;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}
