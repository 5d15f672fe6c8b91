use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use service::{status_of, ServiceError, StatusClass};

/// JSON error body returned to HTTP clients.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match status_of(&err) {
            StatusClass::BadRequest => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            StatusClass::NotFound => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            // Internal detail stays in the logs, not in the response body.
            StatusClass::InternalError => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_the_classifier() {
        let e = JsonApiError::from(ServiceError::InvalidId("x".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        let e = JsonApiError::from(ServiceError::Validation("name".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        let e = JsonApiError::from(ServiceError::NotFound);
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        let e = JsonApiError::from(ServiceError::Storage("boom".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        // Storage detail must not leak to clients.
        assert_eq!(e.message, "internal server error");
    }
}
