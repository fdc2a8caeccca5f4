//! JSON document writer.

use std::io;

use crate::model::Document;
use crate::render::JsonFormat;

use super::{DocumentWriter, Sink};

/// Writer serializing the document model as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    format: JsonFormat,
}

impl JsonWriter {
    /// Create a JSON writer with the given format.
    pub fn new(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl DocumentWriter for JsonWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, doc: &Document, sink: &mut dyn Sink) -> io::Result<()> {
        match self.format {
            JsonFormat::Pretty => serde_json::to_writer_pretty(sink, doc)?,
            JsonFormat::Compact => serde_json::to_writer(sink, doc)?,
        }
        Ok(())
    }
}
