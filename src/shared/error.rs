//! Shared Error Types
//!
//! Errors raised while interpreting analysis data, independent of any
//! transport.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// A label that is not one of the known lesion categories
    #[error("Unknown lesion label: {label}")]
    UnknownLabel {
        label: String,
    },
}

impl SharedError {
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_display() {
        let error = SharedError::unknown_label("xyz");
        assert_eq!(error.to_string(), "Unknown lesion label: xyz");
    }

    #[test]
    fn test_error_clone() {
        let error = SharedError::unknown_label("abc");
        assert_eq!(error.clone(), error);
    }
}
