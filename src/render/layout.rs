//! Layout of classified lines into a styled document.
//!
//! The layout stage trusts the role tags it receives. It knows nothing about
//! markdown stripping or classification rules.

use crate::model::{Block, ClassifiedLine, Document};

use super::{FormatStats, RenderOptions};

/// Render classified lines into a document with the given options.
pub fn to_document<I>(lines: I, options: &RenderOptions) -> Document
where
    I: IntoIterator<Item = ClassifiedLine>,
{
    LayoutRenderer::new(options.clone()).render(lines)
}

/// Renderer that turns classified lines into styled blocks.
pub struct LayoutRenderer {
    options: RenderOptions,
    stats: FormatStats,
}

impl LayoutRenderer {
    /// Create a new layout renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: FormatStats::new(),
        }
    }

    /// Render lines into a document.
    ///
    /// Blocks are appended in input order, one per rendered line. Blank lines
    /// never produce a block.
    pub fn render<I>(&mut self, lines: I) -> Document
    where
        I: IntoIterator<Item = ClassifiedLine>,
    {
        let mut doc = Document::new();
        for line in lines {
            if self.options.collect_stats {
                self.stats.add_line(line.role, &line.text);
            }
            if let Some(block) = self.render_line(line) {
                doc.add_block(block);
            }
        }
        doc
    }

    /// Render a single line, or `None` if its role is never rendered.
    pub fn render_line(&self, line: ClassifiedLine) -> Option<Block> {
        let style = self.options.styles.style_for(line.role)?;
        Some(Block::new(line.role, line.text, style.clone()))
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &FormatStats {
        &self.stats
    }

    /// Consume the renderer and return its statistics.
    pub fn into_stats(self) -> FormatStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Role};
    use crate::render::StyleSheet;

    fn sample_lines() -> Vec<ClassifiedLine> {
        vec![
            ClassifiedLine::title("我的文章"),
            ClassifiedLine::paragraph("这是第一段。"),
            ClassifiedLine::subheading("1.1 引言"),
            ClassifiedLine::paragraph("这是引言段落。"),
            ClassifiedLine::paragraph("第二段。"),
        ]
    }

    #[test]
    fn test_render_preserves_order_and_count() {
        let doc = to_document(sample_lines(), &RenderOptions::default());

        let roles: Vec<Role> = doc.blocks.iter().map(|b| b.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Title,
                Role::Paragraph,
                Role::Subheading,
                Role::Paragraph,
                Role::Paragraph,
            ]
        );
        // Adjacent paragraphs stay separate
        assert_eq!(doc.blocks[3].text, "这是引言段落。");
        assert_eq!(doc.blocks[4].text, "第二段。");
    }

    #[test]
    fn test_render_applies_styles() {
        let doc = to_document(sample_lines(), &RenderOptions::default());
        let styles = StyleSheet::default();

        assert_eq!(doc.blocks[0].style, styles.title);
        assert_eq!(doc.blocks[0].style.alignment, Alignment::Center);
        assert_eq!(doc.blocks[1].style, styles.paragraph);
        assert_eq!(doc.blocks[2].style, styles.subheading);
    }

    #[test]
    fn test_render_trusts_roles() {
        // A numbered line tagged as paragraph stays a paragraph
        let lines = vec![ClassifiedLine::paragraph("1.1 not a heading")];
        let doc = to_document(lines, &RenderOptions::default());
        assert_eq!(doc.blocks[0].role, Role::Paragraph);
        assert!(doc.title().is_none());
    }

    #[test]
    fn test_render_skips_blank() {
        let lines = vec![
            ClassifiedLine::title("T"),
            ClassifiedLine::new(Role::Blank, "", 2),
            ClassifiedLine::paragraph("P"),
        ];
        let doc = to_document(lines, &RenderOptions::default());
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let options = RenderOptions::default();
        let first = to_document(sample_lines(), &options);
        let second = to_document(sample_lines(), &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_collects_stats() {
        let mut renderer = LayoutRenderer::new(RenderOptions::new().with_stats(true));
        renderer.render(sample_lines());
        let stats = renderer.into_stats();
        assert_eq!(stats.title_count, 1);
        assert_eq!(stats.subheading_count, 1);
        assert_eq!(stats.paragraph_count, 3);
    }
}
