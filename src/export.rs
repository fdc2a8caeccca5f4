//! Export of stored content to downloadable documents.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pipeline::Formatter;
use crate::store::{new_content_id, ContentStore};

/// A written document and where it can be downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    /// Absolute path of the written file
    pub path: PathBuf,

    /// File name inside the output directory
    pub filename: String,

    /// URL under the configured download prefix
    pub download_url: String,
}

/// Turns stored or ad-hoc content into `article_<id>.docx` files.
pub struct Exporter {
    formatter: Formatter,
    download_prefix: String,
}

impl Exporter {
    /// Create an exporter; a trailing `/` on the prefix is dropped.
    pub fn new(formatter: Formatter, download_prefix: impl Into<String>) -> Self {
        let prefix = download_prefix.into();
        Self {
            formatter,
            download_prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Create an exporter from process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Formatter::from_config(config), config.download_prefix())
    }

    /// Formatter used for rendering.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// File name used for a content identifier.
    pub fn filename_for(id: &str) -> String {
        format!("article_{}.docx", id)
    }

    /// Render the content stored under `id`.
    ///
    /// The entry is removed from the store only once the document has been
    /// written, so a failed export can be retried.
    pub fn export_stored(&self, store: &ContentStore, id: &str) -> Result<Export> {
        let content = store
            .get(id)
            .ok_or_else(|| Error::ContentNotFound(id.to_string()))?;

        let export = self.export_as(&content, id)?;
        store.remove(id);
        log::info!("Exported content {} to {}", id, export.path.display());
        Ok(export)
    }

    /// Render content that was never stored, under a fresh identifier.
    pub fn export_content(&self, content: &str) -> Result<Export> {
        self.export_as(content, &new_content_id())
    }

    fn export_as(&self, content: &str, id: &str) -> Result<Export> {
        let filename = Self::filename_for(id);
        let path = self.formatter.render(content, &filename)?;
        let download_url = format!("{}/{}", self.download_prefix, filename);
        Ok(Export {
            path,
            filename,
            download_url,
        })
    }
}
