//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Response types are lenient: every field the client does not strictly need
//! is optional, and unknown fields are ignored, so backend additions never
//! break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success body of `POST /api/auth/login`.
///
/// The session itself arrives as a cookie; `token` is echoed by some
/// deployments and deliberately ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Message meant for the user.
    #[serde(default)]
    pub message: Option<String>,
    /// Short error class such as `"Authentication Error"`.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// First non-blank of `message`, then `error`.
    pub fn user_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|msg| !msg.trim().is_empty())
    }
}

/// Body of `GET /api/health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub router_available: Option<bool>,
    #[serde(default)]
    pub uptime: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
