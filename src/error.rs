//! Error types for field persistence

use std::fmt;

use thiserror::Error;

/// Which half of a field group could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Input,
    ErrorDisplay,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Input => f.write_str("input"),
            ElementKind::ErrorDisplay => f.write_str("error display"),
        }
    }
}

/// Main error type for field persistence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// A container lacks its input or error element
    #[error("field group {group} has no {element} element")]
    MissingElement {
        /// Position of the container in document order
        group: usize,
        element: ElementKind,
    },

    /// No LocalStorage on this window
    #[error("local storage is unavailable")]
    StorageUnavailable,

    /// The store rejected a write (quota, privacy mode)
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, PersistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = PersistError::MissingElement {
            group: 2,
            element: ElementKind::ErrorDisplay,
        };
        assert_eq!(err.to_string(), "field group 2 has no error display element");
    }
}
