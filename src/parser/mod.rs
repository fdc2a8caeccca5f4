//! Line parsing: markdown stripping and role classification.
//!
//! [`Lines`] walks a block of generated text line by line, cleans each line
//! and assigns it a [`Role`]. The "title assigned" flag is threaded through
//! the whole pass, so at most one line is ever a title.

mod classify;
mod markdown;
mod options;

pub use classify::{classify, is_outline_heading, Classifier};
pub use markdown::{strip_emphasis, strip_heading_marker, strip_markdown};
pub use options::{ErrorMode, ParseOptions};

use std::iter::Enumerate;
use std::str;

use unicode_normalization::UnicodeNormalization;

use crate::model::{ClassifiedLine, Role};

/// Clean one raw line: optional NFC normalization, markdown stripping, trim.
pub fn clean_line(raw: &str, options: &ParseOptions) -> String {
    let stripped = if options.normalize_unicode {
        let normalized: String = raw.nfc().collect();
        strip_markdown(&normalized)
    } else {
        strip_markdown(raw)
    };
    stripped.trim().to_string()
}

/// Classify every line of `text`, dropping blank lines unless the options
/// ask to keep them.
///
/// # Example
///
/// ```
/// use writedocx::model::Role;
/// use writedocx::parser::{parse, ParseOptions};
///
/// let lines = parse("## 标题\n\n1.1 引言\n正文", &ParseOptions::default());
/// let roles: Vec<Role> = lines.iter().map(|l| l.role).collect();
/// assert_eq!(roles, vec![Role::Title, Role::Subheading, Role::Paragraph]);
/// ```
pub fn parse(text: &str, options: &ParseOptions) -> Vec<ClassifiedLine> {
    Lines::new(text, options.clone()).collect()
}

/// Lazy iterator over the classified lines of a text.
pub struct Lines<'a> {
    source: Enumerate<str::Lines<'a>>,
    classifier: Classifier,
    options: ParseOptions,
    blank_count: usize,
}

impl<'a> Lines<'a> {
    /// Start a classification pass over `text`.
    pub fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            source: text.lines().enumerate(),
            classifier: Classifier::new(),
            options,
            blank_count: 0,
        }
    }

    /// Number of blank lines seen so far.
    pub fn blank_count(&self) -> usize {
        self.blank_count
    }

    /// Whether a title has been assigned so far.
    pub fn title_assigned(&self) -> bool {
        self.classifier.title_assigned()
    }
}

impl Iterator for Lines<'_> {
    type Item = ClassifiedLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.source.next()?;
            let text = clean_line(raw, &self.options);
            let role = self.classifier.classify(&text);

            if role == Role::Blank {
                self.blank_count += 1;
                if !self.options.keep_blank_lines {
                    continue;
                }
            }

            return Some(ClassifiedLine::new(role, text, index + 1));
        }
    }
}
