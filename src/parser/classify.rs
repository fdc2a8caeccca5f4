//! Line role classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Role;

/// Digit groups separated by `.`, followed by `.`, `、` or whitespace,
/// anchored at the start of the line ("1 ", "1.", "1.1 ", "2、").
static OUTLINE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)*[.、\s]").expect("outline number regex"));

/// Check whether a trimmed line opens with a numeric outline token.
pub fn is_outline_heading(text: &str) -> bool {
    OUTLINE_NUMBER.is_match(text)
}

/// Classify one trimmed line.
///
/// The order is fixed: blank, then title (when none has been assigned yet),
/// then numbered subheading, then paragraph. The caller owns the
/// `title_assigned` flag; see [`Classifier`] for a stateful wrapper.
pub fn classify(text: &str, title_assigned: bool) -> Role {
    if text.is_empty() {
        Role::Blank
    } else if !title_assigned {
        Role::Title
    } else if is_outline_heading(text) {
        Role::Subheading
    } else {
        Role::Paragraph
    }
}

/// Classifier that threads the "title assigned" flag through one pass.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    title_assigned: bool,
}

impl Classifier {
    /// Create a classifier at the start of a pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next trimmed line of the pass.
    pub fn classify(&mut self, text: &str) -> Role {
        let role = classify(text, self.title_assigned);
        if role == Role::Title {
            self.title_assigned = true;
        }
        role
    }

    /// Whether a title has been assigned in this pass.
    pub fn title_assigned(&self) -> bool {
        self.title_assigned
    }
}
