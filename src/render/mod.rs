//! Rendering module: layout of classified lines and textual renderings of
//! the resulting document.

mod json;
mod layout;
mod options;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use layout::{to_document, LayoutRenderer};
pub use options::{RenderOptions, StyleSheet};
pub use result::{FormatResult, FormatStats};
pub use text::to_text;
