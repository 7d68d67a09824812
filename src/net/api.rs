//! REST API helpers for the public (pre-session) endpoints.
//!
//! Login and health go straight to the transport rather than through
//! `AuthFetch`: a 401 from the login endpoint means "wrong password", not
//! "session expired", and must not trigger the logout redirect.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as `FetchError`; HTTP statuses are returned
//! for the caller to interpret.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{APPLICATION_JSON, CONTENT_TYPE, Credentials, FetchError, FetchRequest, FetchResponse, RequestBody};
use super::types::{HealthResponse, LoginRequest};
use crate::config::ClientConfig;
use crate::platform::Platform;
use crate::state::ui::ConnectionStatus;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const HEALTH_ENDPOINT: &str = "/api/health";

/// `POST /api/auth/login` with credentials included so the browser stores
/// the session cookie from the response.
///
/// # Errors
///
/// Returns an error if the body cannot be encoded or the request fails.
pub async fn login(
    platform: &Platform,
    config: &ClientConfig,
    credentials: &LoginRequest,
) -> Result<FetchResponse, FetchError> {
    let request = FetchRequest::post(config.api_url(LOGIN_ENDPOINT))
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .credentials(Credentials::Include)
        .body(RequestBody::json(credentials)?);
    platform.transport.send(request).await
}

/// `GET /api/health` and reduce the answer to a connection status.
///
/// The body is read whatever the HTTP status: a degraded backend answers 503
/// with a JSON status.
pub async fn check_health(platform: &Platform, config: &ClientConfig) -> ConnectionStatus {
    match platform.transport.send(FetchRequest::get(config.api_url(HEALTH_ENDPOINT))).await {
        Ok(response) => connection_status(&response),
        Err(e) => {
            log::error!("health check failed: {e}");
            ConnectionStatus::Disconnected
        }
    }
}

fn connection_status(response: &FetchResponse) -> ConnectionStatus {
    match response.json::<HealthResponse>() {
        Ok(health) if health.is_healthy() => ConnectionStatus::Connected,
        Ok(health) => {
            log::warn!("backend reports status {:?}", health.status);
            ConnectionStatus::Disconnected
        }
        Err(e) => {
            log::warn!("unreadable health response ({}): {e}", response.status);
            ConnectionStatus::Disconnected
        }
    }
}
