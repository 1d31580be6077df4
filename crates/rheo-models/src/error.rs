//! Model lookup errors.

use rheo_core::RheoError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when resolving models.
///
/// Model evaluation itself never fails: numeric edge cases follow
/// floating-point special-value propagation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Citation key not present in the registry.
    #[error("Unknown citation key: {key}")]
    UnknownCitation { key: String },
}

impl From<ModelError> for RheoError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownCitation { key } => RheoError::NotFound {
                what: format!("citation key '{key}' in model registry"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::UnknownCitation {
            key: "einstein_1905".into(),
        };
        assert!(err.to_string().contains("einstein_1905"));
    }

    #[test]
    fn error_to_rheo_error() {
        let err = ModelError::UnknownCitation {
            key: "einstein_1905".into(),
        };
        let rheo: RheoError = err.into();
        assert!(matches!(rheo, RheoError::NotFound { .. }));
    }
}
