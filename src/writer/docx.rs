//! DOCX document writer.

use std::io;

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run, SpecialIndentType};

use crate::model::{Alignment, Block, BlockStyle, Document};

use super::{DocumentWriter, Sink};

/// Twips per point.
const TWIPS_PER_POINT: f32 = 20.0;

/// Line value that OOXML treats as single spacing under the auto rule.
const SINGLE_LINE_TWIPS: f32 = 240.0;

/// Writer producing Office Open XML (`.docx`) documents.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter;

impl DocxWriter {
    /// Create a new DOCX writer.
    pub fn new() -> Self {
        Self
    }

    /// Build the in-memory DOCX for a document.
    pub fn build(&self, doc: &Document) -> Docx {
        doc.blocks
            .iter()
            .fold(Docx::new(), |docx, block| docx.add_paragraph(paragraph(block)))
    }
}

impl DocumentWriter for DocxWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn write(&self, doc: &Document, sink: &mut dyn Sink) -> io::Result<()> {
        self.build(doc)
            .build()
            .pack(sink)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

fn paragraph(block: &Block) -> Paragraph {
    let style = &block.style;
    let mut para = Paragraph::new().add_run(run(&block.text, style));

    if let Some(alignment) = alignment_type(style.alignment) {
        para = para.align(alignment);
    }
    if let Some(spacing) = line_spacing(style) {
        para = para.line_spacing(spacing);
    }
    if let Some(indent) = style.first_line_indent {
        para = para.indent(
            None,
            Some(SpecialIndentType::FirstLine(twips(indent))),
            None,
            None,
        );
    }
    para
}

fn run(text: &str, style: &BlockStyle) -> Run {
    let mut run = Run::new().add_text(text);
    if style.bold {
        run = run.bold();
    }
    if let Some(size) = style.font_size {
        run = run.size(half_points(size));
    }
    run
}

fn line_spacing(style: &BlockStyle) -> Option<LineSpacing> {
    if style.space_before.is_none() && style.space_after.is_none() && style.line_spacing.is_none()
    {
        return None;
    }

    let mut spacing = LineSpacing::new();
    if let Some(before) = style.space_before {
        spacing = spacing.before(twips(before).max(0) as _);
    }
    if let Some(after) = style.space_after {
        spacing = spacing.after(twips(after).max(0) as _);
    }
    if let Some(multiplier) = style.line_spacing {
        spacing = spacing.line((multiplier * SINGLE_LINE_TWIPS).round() as _);
    }
    Some(spacing)
}

fn alignment_type(alignment: Alignment) -> Option<AlignmentType> {
    match alignment {
        Alignment::Left => None,
        Alignment::Center => Some(AlignmentType::Center),
        Alignment::Right => Some(AlignmentType::Right),
        Alignment::Justify => Some(AlignmentType::Both),
    }
}

/// Convert points to twentieths of a point.
pub(crate) fn twips(points: f32) -> i32 {
    (points * TWIPS_PER_POINT).round() as i32
}

/// Convert points to the half-point unit used for font sizes.
pub(crate) fn half_points(points: f32) -> usize {
    (points * 2.0).round().max(0.0) as usize
}
