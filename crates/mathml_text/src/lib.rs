//! MathML Text - document-to-text-grid conversion pipeline
//!
//! This crate wraps the pure `math_grid` renderer with its external
//! collaborators:
//! - Extraction of the `<math>…</math>` substring from surrounding markup
//! - MathML XML parsing into the renderer's markup tree
//! - The end-to-end [`mathml_to_text`] entry point
//!
//! Documents without a math element pass through unchanged rather than
//! producing an error or empty output.

pub mod error;
pub mod extract;
pub mod parser;

pub use error::{ConvertError, ConvertResult};
pub use extract::{extract_mathml, mathml_to_text};
pub use parser::{parse_mathml, MathMlParser};
