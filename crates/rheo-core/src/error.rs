use thiserror::Error;

pub type RheoResult<T> = Result<T, RheoError>;

/// Shared error type. Member-crate errors (`ModelError`, `BibError`)
/// convert into this at the workspace boundary.
#[derive(Error, Debug)]
pub enum RheoError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
