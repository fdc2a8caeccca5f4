//! Plain text rendering of formatted documents.

use crate::model::Document;

/// Convert a document to plain text, one block per line.
///
/// With `blank_separated`, blocks are separated by an empty line.
pub fn to_text(doc: &Document, blank_separated: bool) -> String {
    let separator = if blank_separated { "\n\n" } else { "\n" };
    doc.blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
