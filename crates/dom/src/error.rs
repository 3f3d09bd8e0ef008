//! DOM error types

use thiserror::Error;

/// DOM operation result type
pub type DomResult<T> = Result<T, DomError>;

/// DOM errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Cannot merge attribute '{incoming}' into attribute '{existing}'")]
    NameMismatch { existing: String, incoming: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomError::NameMismatch {
            existing: "style".to_string(),
            incoming: "class".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Cannot merge attribute 'class' into attribute 'style'"
        );
    }
}
