//! Process configuration.
//!
//! A [`Config`] is resolved once at startup (the CLI builds it from flags and
//! environment variables) and passed into the formatter, the content store
//! and the exporter. Library code never reads the environment itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::parser::ErrorMode;

/// Default directory for written documents.
pub const DEFAULT_OUTPUT_DIR: &str = "static/downloads";

/// Default URL prefix under which written documents are served.
pub const DEFAULT_DOWNLOAD_PREFIX: &str = "/static/downloads";

/// Default maximum number of stored contents.
pub const DEFAULT_STORE_CAPACITY: usize = 256;

/// Default lifetime of stored contents.
pub const DEFAULT_STORE_TTL: Duration = Duration::from_secs(60 * 60);

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    output_dir: PathBuf,
    download_prefix: String,
    store_capacity: usize,
    store_ttl: Duration,
    error_mode: ErrorMode,
    parallel: bool,
}

impl Config {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the download URL prefix. A trailing `/` is dropped.
    pub fn with_download_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.download_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    /// Set the content store capacity.
    pub fn with_store_capacity(mut self, capacity: usize) -> Self {
        self.store_capacity = capacity;
        self
    }

    /// Set the content store time-to-live.
    pub fn with_store_ttl(mut self, ttl: Duration) -> Self {
        self.store_ttl = ttl;
        self
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable or disable parallel batch rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(self) -> Result<Self> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config("output directory cannot be empty".into()));
        }
        if self.store_capacity == 0 {
            return Err(Error::Config("store capacity must be positive".into()));
        }
        if self.store_ttl.is_zero() {
            return Err(Error::Config("store TTL must be positive".into()));
        }
        Ok(self)
    }

    /// Directory for written documents.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// URL prefix for download links, without a trailing `/`.
    pub fn download_prefix(&self) -> &str {
        &self.download_prefix
    }

    /// Maximum number of stored contents.
    pub fn store_capacity(&self) -> usize {
        self.store_capacity
    }

    /// Lifetime of stored contents.
    pub fn store_ttl(&self) -> Duration {
        self.store_ttl
    }

    /// How blank content is treated.
    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    /// Whether batches render on the rayon pool.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
            store_capacity: DEFAULT_STORE_CAPACITY,
            store_ttl: DEFAULT_STORE_TTL,
            error_mode: ErrorMode::Lenient,
            parallel: true,
        }
    }
}
