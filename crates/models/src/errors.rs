use thiserror::Error;

/// Failures raised while constructing or validating model values, before any
/// service or storage code runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An external identifier string did not parse as a key. Carries the
    /// offending input.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    /// A payload failed field validation.
    #[error("validation error: {0}")]
    Validation(String),
}
