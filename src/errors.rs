use thiserror::Error;

/// Error type for failures at the persistence boundary.
///
/// Core business operations never surface these: malformed or absent stored
/// data degrades to an empty collection, and unknown-id mutations are no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Malformed user input, rejected before it reaches the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{0} must be greater than zero")]
    NonPositiveAmount(&'static str),
    #[error("warn percentage must be between 0 and 100")]
    PercentageOutOfRange,
    #[error("a family member with email `{0}` already exists")]
    DuplicateEmail(String),
    #[error("the account already has a primary member")]
    PrimaryAlreadyExists,
}
