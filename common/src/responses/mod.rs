use serde::{Deserialize, Serialize};

/// Body of a successful write: `{"status":"ok"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        StatusResponse {
            status: "ok".to_string(),
        }
    }
}

/// Body of every rejected request: `{"error":"<code>"}`.
///
/// Codes are stable identifiers (`forbidden`, `empty_payload`, `write_failed`, ...)
/// and never carry filesystem details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: &str) -> Self {
        ErrorResponse {
            error: code.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
}

/// Plugin metadata exposed at `/plugins/watchplanner/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
}
