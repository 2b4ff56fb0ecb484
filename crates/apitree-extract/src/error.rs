//! Error types for markup extraction

use thiserror::Error;

/// Result type alias for extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Error type for extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A configured CSS selector does not parse
    #[error("invalid {field} selector \"{selector}\": {reason}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    /// A required element is absent
    #[error("missing {element} in {context}")]
    MissingElement {
        element: &'static str,
        context: String,
    },

    /// A required element matched more than once in strict mode
    #[error("ambiguous {element} in {context}: {count} matches")]
    Ambiguous {
        element: &'static str,
        context: String,
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn ExtractError___missing_element___displays_context() {
        let err = ExtractError::MissingElement {
            element: "url",
            context: "operation #2".into(),
        };

        assert_eq!(err.to_string(), "missing url in operation #2");
    }

    #[test]
    fn ExtractError___ambiguous___displays_count() {
        let err = ExtractError::Ambiguous {
            element: "param type",
            context: "parameter #1 of /v1/key/info".into(),
            count: 3,
        };

        let msg = err.to_string();
        assert!(msg.contains("param type"));
        assert!(msg.contains("3 matches"));
    }

    #[test]
    fn ExtractError___invalid_selector___displays_field_and_selector() {
        let err = ExtractError::InvalidSelector {
            field: "param",
            selector: "..bad".into(),
            reason: "unexpected token".into(),
        };

        let msg = err.to_string();
        assert!(msg.starts_with("invalid param selector \"..bad\""));
    }
}
