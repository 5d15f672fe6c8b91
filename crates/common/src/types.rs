use serde::Serialize;

/// Health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
}
