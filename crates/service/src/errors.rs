use thiserror::Error;

use models::ModelError;

/// Failures a service operation can propagate to its caller.
///
/// The set is closed on purpose: transport adapters classify by variant and
/// tests compare propagated errors by value, so each kind carries structured
/// context rather than an opaque wrapped message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// Malformed external identifier; carries the raw input string.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    /// Requested entity absent from storage.
    #[error("not found")]
    NotFound,
    /// Payload failed validation above the service layer.
    #[error("validation error: {0}")]
    Validation(String),
    /// Any other repository failure: connectivity, I/O, serialization,
    /// unexpected data.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidId(raw) => Self::InvalidId(raw),
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

/// Transport-agnostic status class a failure maps to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusClass {
    BadRequest,
    NotFound,
    InternalError,
}

/// Classify a propagated error. Total: anything unrecognized falls through to
/// [`StatusClass::InternalError`].
pub fn status_of(err: &ServiceError) -> StatusClass {
    match err {
        ServiceError::InvalidId(_) | ServiceError::Validation(_) => StatusClass::BadRequest,
        ServiceError::NotFound => StatusClass::NotFound,
        _ => StatusClass::InternalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_covers_every_kind() {
        assert_eq!(
            status_of(&ServiceError::InvalidId("x".into())),
            StatusClass::BadRequest
        );
        assert_eq!(
            status_of(&ServiceError::Validation("name".into())),
            StatusClass::BadRequest
        );
        assert_eq!(status_of(&ServiceError::NotFound), StatusClass::NotFound);
        assert_eq!(
            status_of(&ServiceError::Storage("io".into())),
            StatusClass::InternalError
        );
    }

    #[test]
    fn model_errors_convert_without_losing_payload() {
        let err: ServiceError = models::ModelError::InvalidId("zzz".into()).into();
        assert_eq!(err, ServiceError::InvalidId("zzz".into()));
        let err: ServiceError = models::ModelError::Validation("name".into()).into();
        assert_eq!(err, ServiceError::Validation("name".into()));
    }
}
