//! # writedocx
//!
//! Format LLM-generated articles into styled Word documents.
//!
//! Generated text arrives as plain lines with a title on the first line, an
//! optional numeric outline (`1.`, `1.1 `, `2、`) and stray markdown left
//! behind by the model. This library strips the markup, classifies every line
//! as title, subheading or paragraph, applies a fixed typographic style and
//! writes the result as DOCX (or JSON / plain text).
//!
//! ## Quick Start
//!
//! ```no_run
//! use writedocx::Formatter;
//!
//! fn main() -> writedocx::Result<()> {
//!     let formatter = Formatter::new("static/downloads");
//!     let path = formatter.render("## 我的文章\n\n1. 引言\n\n正文。", "article.docx")?;
//!     println!("Wrote {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markdown cleanup**: heading markers and emphasis are removed, numbering is kept
//! - **Outline detection**: `1.`, `1.1 `, `2、` lines become subheadings
//! - **Multiple output formats**: DOCX, JSON, plain text
//! - **Atomic writes**: a failed write never leaves a partial file behind
//! - **Content store**: streamed output can be collected and exported later
//! - **Parallel processing**: batch rendering uses Rayon

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use export::{Export, Exporter};
pub use model::{
    Alignment, Block, BlockStyle, ClassifiedLine, Document, Metadata, Role,
};
pub use parser::{ErrorMode, ParseOptions};
pub use pipeline::{FormatJob, Formatter};
pub use render::{FormatResult, FormatStats, JsonFormat, RenderOptions, StyleSheet};
pub use store::{split_content_id, CollectingStream, ContentStore, StreamCollector};
pub use writer::{DocumentWriter, WriterRegistry};

use std::path::{Path, PathBuf};

/// Strip markdown from every line of `text`, keeping the line structure.
///
/// Outer whitespace of the whole text is trimmed; lines are otherwise kept
/// as they are, blank ones included.
///
/// # Example
///
/// ```
/// let cleaned = writedocx::format_content("\n## 标题\n\n**重点**内容\n");
/// assert_eq!(cleaned, "标题\n\n重点内容");
/// ```
pub fn format_content(text: &str) -> String {
    text.trim()
        .lines()
        .map(parser::strip_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format text into a styled document with default options.
///
/// # Example
///
/// ```
/// use writedocx::{format_text, Role};
///
/// let doc = format_text("我的文章\n1.1 引言\n正文");
/// assert_eq!(doc.blocks[0].role, Role::Title);
/// assert_eq!(doc.blocks[1].role, Role::Subheading);
/// ```
pub fn format_text(text: &str) -> Document {
    let lines = parser::Lines::new(text, ParseOptions::default());
    render::to_document(lines, &RenderOptions::default())
}

/// Format text and write it to `dir/filename` with default options.
///
/// Returns the absolute path of the written file.
pub fn render<P: AsRef<Path>>(content: &str, dir: P, filename: &str) -> Result<PathBuf> {
    Formatter::new(dir.as_ref()).render(content, filename)
}

/// Format text and serialize the document model as JSON.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&format_text(text), format)
}

/// Format text and return the cleaned blocks, one per line.
pub fn to_text(text: &str) -> String {
    render::to_text(&format_text(text), false)
}
