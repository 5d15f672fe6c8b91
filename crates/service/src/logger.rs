//! Logging port consumed by the service layer.

use crate::errors::ServiceError;

/// Contextual key/value pairs attached to a failure record.
pub type LogFields = Vec<(&'static str, serde_json::Value)>;

/// Leveled, structured logging sink. The service calls [`Logger::error`]
/// exactly once per failed operation; logging is best-effort and never
/// surfaces a failure back to the caller.
pub trait Logger: Send + Sync {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, err: &ServiceError, msg: &str, fields: LogFields);
}

/// Production adapter emitting through the `tracing` macros.
#[derive(Debug, Default, Clone)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, err: &ServiceError, msg: &str, fields: LogFields) {
        let fields = serde_json::Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        );
        tracing::error!(error = %err, fields = %fields, "{msg}");
    }
}
