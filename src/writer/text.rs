//! Plain text document writer.

use std::io::{self, Write};

use crate::model::Document;
use crate::render::to_text;

use super::{DocumentWriter, Sink};

/// Writer emitting one block per paragraph, separated by blank lines.
#[derive(Debug, Clone, Default)]
pub struct TextWriter;

impl TextWriter {
    /// Create a new text writer.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for TextWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn write(&self, doc: &Document, sink: &mut dyn Sink) -> io::Result<()> {
        let text = to_text(doc, true);
        sink.write_all(text.as_bytes())?;
        if !text.is_empty() {
            sink.write_all(b"\n")?;
        }
        Ok(())
    }
}
