//! Document model types.
//!
//! This module defines the intermediate representation that bridges line
//! classification and document writing. Writers consume a [`Document`] and
//! never look at the source text again.

mod block;
mod document;
mod line;

pub use block::{inches, Alignment, Block, BlockStyle, POINTS_PER_INCH};
pub use document::{Document, Metadata};
pub use line::{ClassifiedLine, Role};
