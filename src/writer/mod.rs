//! Document writers with a registry keyed by file extension.
//!
//! A [`DocumentWriter`] serializes a rendered [`Document`] into some file
//! format. [`persist`] writes through a temporary file in the target
//! directory and renames it into place, so a failed write never leaves a
//! partial file at the target path.
//!
//! # Example
//!
//! ```no_run
//! use writedocx::model::Document;
//! use writedocx::writer::{persist, WriterRegistry};
//!
//! fn main() -> writedocx::Result<()> {
//!     let registry = WriterRegistry::with_defaults();
//!     let writer = registry.for_filename("article.docx")?;
//!     let path = persist(&Document::new(), writer.as_ref(), "out".as_ref(), "article.docx")?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

mod docx;
mod json;
mod text;

pub use self::docx::DocxWriter;
pub use self::json::JsonWriter;
pub use self::text::TextWriter;

use std::collections::HashMap;
use std::fs;
use std::io::{self, Cursor, Seek, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::JsonFormat;

/// Output target of a writer: anything that can be written and seeked.
pub trait Sink: Write + Seek {}

impl<T: Write + Seek> Sink for T {}

/// Trait for document writers.
///
/// Implement this trait to add support for a new output format.
pub trait DocumentWriter: Send + Sync {
    /// Get the supported file extensions for this writer.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this writer.
    fn name(&self) -> &str;

    /// MIME type of the produced file.
    fn mime_type(&self) -> &'static str;

    /// Serialize a document into `sink`.
    fn write(&self, doc: &Document, sink: &mut dyn Sink) -> io::Result<()>;

    /// Serialize a document into memory.
    fn to_bytes(&self, doc: &Document) -> io::Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.write(doc, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Check if this writer supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document writers.
///
/// The registry maps file extensions to writers. Filenames without an
/// extension resolve to the default writer (DOCX unless changed).
pub struct WriterRegistry {
    writers: HashMap<String, Arc<dyn DocumentWriter>>,
    by_name: HashMap<String, Arc<dyn DocumentWriter>>,
    default_writer: Option<Arc<dyn DocumentWriter>>,
}

impl WriterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            writers: HashMap::new(),
            by_name: HashMap::new(),
            default_writer: None,
        }
    }

    /// Create a registry with the built-in writers (DOCX, JSON, text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let docx: Arc<dyn DocumentWriter> = Arc::new(DocxWriter::new());
        registry.register(docx.clone());
        registry.register(Arc::new(JsonWriter::new(JsonFormat::Pretty)));
        registry.register(Arc::new(TextWriter::new()));
        registry.default_writer = Some(docx);
        registry
    }

    /// Register a writer for all its supported extensions.
    pub fn register(&mut self, writer: Arc<dyn DocumentWriter>) {
        for ext in writer.supported_extensions() {
            self.writers.insert(ext.to_lowercase(), writer.clone());
        }
        self.by_name.insert(writer.name().to_lowercase(), writer);
    }

    /// Set the writer used for filenames without an extension.
    pub fn set_default(&mut self, writer: Arc<dyn DocumentWriter>) {
        self.default_writer = Some(writer);
    }

    /// Get a writer by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentWriter>> {
        self.writers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a writer by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentWriter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.writers.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.writers.keys().map(|s| s.as_str()).collect()
    }

    /// Pick the writer for an output filename.
    pub fn for_filename(&self, filename: &str) -> Result<Arc<dyn DocumentWriter>> {
        match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => self
                .get_by_extension(ext)
                .ok_or_else(|| Error::UnsupportedFormat(ext.to_string())),
            None => self
                .default_writer
                .clone()
                .ok_or_else(|| Error::UnsupportedFormat(filename.to_string())),
        }
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Check that `filename` is a single normal path component.
pub fn validate_filename(filename: &str) -> Result<()> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == filename => Ok(()),
        _ => Err(Error::InvalidFilename(filename.to_string())),
    }
}

/// Write `doc` into `dir/filename` atomically and return the absolute path.
///
/// The directory is created if absent. The document is written into a
/// temporary file inside `dir` and renamed over the target, so on failure
/// nothing is left at the target path.
pub fn persist(
    doc: &Document,
    writer: &dyn DocumentWriter,
    dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    validate_filename(filename)?;

    fs::create_dir_all(dir).map_err(|e| Error::storage(dir, e))?;
    let target = dir.join(filename);

    let mut tmp = tempfile::Builder::new()
        .prefix(".writedocx-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| Error::storage(dir, e))?;

    writer
        .write(doc, tmp.as_file_mut())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| {
            log::warn!("Failed to write {}: {}", target.display(), e);
            Error::storage(&target, e)
        })?;

    tmp.persist(&target)
        .map_err(|e| Error::storage(&target, e.error))?;

    log::debug!(
        "Wrote {} blocks to {} ({})",
        doc.block_count(),
        target.display(),
        writer.name()
    );

    Ok(written_path(&target))
}

/// Absolute path of a file that has already been written.
///
/// Falls back to joining the working directory when the path cannot be
/// canonicalized; the write itself has succeeded at that point.
fn written_path(target: &Path) -> PathBuf {
    fs::canonicalize(target).unwrap_or_else(|e| {
        log::debug!("Cannot canonicalize {}: {}", target.display(), e);
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(target))
                .unwrap_or_else(|_| target.to_path_buf())
        }
    })
}
