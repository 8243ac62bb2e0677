//! Error types for the conversion boundary

use thiserror::Error;

/// Errors that can occur while turning document markup into a tree.
///
/// Rendering itself is total, so every failure here happens before the
/// renderer runs.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The markup was not well-formed XML
    #[error("MathML parsing error: {0}")]
    Parse(String),

    /// XML error from quick-xml
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::Parse("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "MathML parsing error: unexpected end of input");
    }
}
