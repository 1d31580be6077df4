//! Bibliography errors.

use rheo_core::RheoError;
use thiserror::Error;

/// Result type for bibliography operations.
pub type BibResult<T> = Result<T, BibError>;

/// Errors that can occur while loading or projecting the bibliography.
///
/// All are fatal: a failed load never leaves a partially populated store.
#[derive(Error, Debug)]
pub enum BibError {
    /// Bibliography file missing or unreadable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed BibTeX input.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Two entries share a citation key.
    #[error("Duplicate citation key: {key}")]
    DuplicateKey { key: String },

    /// JSON serialization failure in the tree projection.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<BibError> for RheoError {
    fn from(err: BibError) -> Self {
        match err {
            BibError::Io(io) => RheoError::InvalidArg {
                what: format!("bibliography file unreadable: {io}"),
            },
            BibError::Parse { line, message } => RheoError::InvalidArg {
                what: format!("malformed bibliography at line {line}: {message}"),
            },
            BibError::DuplicateKey { key } => RheoError::Invariant {
                what: format!("duplicate citation key '{key}' in bibliography"),
            },
            BibError::Json(json) => RheoError::Invariant {
                what: format!("bibliography projection failed: {json}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BibError::Parse {
            line: 7,
            message: "unterminated value".into(),
        };
        assert!(err.to_string().contains("line 7"));

        let err = BibError::DuplicateKey {
            key: "newton_1687".into(),
        };
        assert!(err.to_string().contains("newton_1687"));
    }

    #[test]
    fn error_to_rheo_error() {
        let err = BibError::DuplicateKey {
            key: "newton_1687".into(),
        };
        let rheo: RheoError = err.into();
        assert!(matches!(rheo, RheoError::Invariant { .. }));
    }
}
