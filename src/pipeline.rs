//! The formatting pipeline: strip, classify, render, write.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{ErrorMode, Lines, ParseOptions};
use crate::render::{FormatResult, FormatStats, LayoutRenderer, RenderOptions};
use crate::writer::{persist, WriterRegistry};

/// One unit of batch work: content and the filename to write it under.
#[derive(Debug, Clone)]
pub struct FormatJob {
    /// Generated text
    pub content: String,

    /// Output filename inside the formatter's output directory
    pub filename: String,
}

impl FormatJob {
    /// Create a new job.
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
        }
    }
}

/// Turns generated text into styled documents on disk.
///
/// A formatter holds no mutable state; one instance can serve concurrent
/// calls as long as each call uses a distinct filename.
///
/// # Example
///
/// ```no_run
/// use writedocx::Formatter;
///
/// fn main() -> writedocx::Result<()> {
///     let formatter = Formatter::new("static/downloads");
///     let path = formatter.render("## 我的文章\n\n正文。", "article.docx")?;
///     println!("{}", path.display());
///     Ok(())
/// }
/// ```
pub struct Formatter {
    output_dir: PathBuf,
    parse_options: ParseOptions,
    render_options: RenderOptions,
    writers: WriterRegistry,
    parallel: bool,
}

impl Formatter {
    /// Create a formatter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            writers: WriterRegistry::with_defaults(),
            parallel: true,
        }
    }

    /// Create a formatter from process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.output_dir())
            .with_parse_options(ParseOptions::new().with_error_mode(config.error_mode()))
            .with_parallel(config.parallel())
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Replace the writer registry.
    pub fn with_writers(mut self, writers: WriterRegistry) -> Self {
        self.writers = writers;
        self
    }

    /// Enable or disable parallel batch rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writer registry.
    pub fn writers(&self) -> &WriterRegistry {
        &self.writers
    }

    /// Format content into a document without touching the filesystem.
    pub fn format(&self, content: &str) -> Result<Document> {
        self.format_with_stats(content).map(|(doc, _)| doc)
    }

    /// Format content and collect statistics.
    pub fn format_with_stats(&self, content: &str) -> Result<(Document, FormatStats)> {
        let mut lines = Lines::new(content, self.parse_options.clone().with_blank_lines(false));
        let mut renderer = LayoutRenderer::new(self.render_options.clone().with_stats(true));
        let doc = renderer.render(lines.by_ref());

        let mut stats = renderer.into_stats();
        stats.add_blank_lines(lines.blank_count() as u32);

        if doc.is_empty() && self.parse_options.error_mode == ErrorMode::Strict {
            log::warn!("Rejecting content with no non-blank lines");
            return Err(Error::MalformedInput(
                "content is empty after cleaning".to_string(),
            ));
        }

        log::debug!(
            "Formatted {} lines into {} blocks ({} subheadings)",
            stats.line_count,
            doc.block_count(),
            stats.subheading_count
        );

        Ok((doc, stats))
    }

    /// Format content and write it to `output_dir/filename`.
    ///
    /// The writer is chosen from the filename's extension (DOCX when there is
    /// none). Returns the absolute path of the written file.
    pub fn render(&self, content: &str, filename: &str) -> Result<PathBuf> {
        self.render_with_stats(content, filename).map(|r| r.path)
    }

    /// Like [`render`](Self::render), also returning metadata and statistics.
    pub fn render_with_stats(&self, content: &str, filename: &str) -> Result<FormatResult> {
        let writer = self.writers.for_filename(filename)?;
        let (doc, stats) = self.format_with_stats(content)?;
        let path = persist(&doc, writer.as_ref(), &self.output_dir, filename)?;
        Ok(FormatResult::new(path, doc.metadata, stats))
    }

    /// Render many jobs, returning results in job order.
    ///
    /// Jobs run on the rayon pool when parallel rendering is enabled. A job
    /// whose filename repeats an earlier job's fails with
    /// [`Error::DuplicateFilename`] and writes nothing.
    pub fn render_batch(&self, jobs: &[FormatJob]) -> Vec<Result<PathBuf>> {
        let mut seen = HashSet::new();
        let duplicates: Vec<bool> = jobs
            .iter()
            .map(|job| !seen.insert(job.filename.as_str()))
            .collect();

        let run = |(job, duplicate): (&FormatJob, &bool)| {
            if *duplicate {
                log::warn!("Skipping batch job with duplicate filename {}", job.filename);
                return Err(Error::DuplicateFilename(job.filename.clone()));
            }
            self.render(&job.content, &job.filename)
        };

        #[cfg(feature = "parallel")]
        if self.parallel {
            use rayon::prelude::*;
            return jobs.par_iter().zip(duplicates.par_iter()).map(run).collect();
        }

        jobs.iter().zip(duplicates.iter()).map(run).collect()
    }
}
