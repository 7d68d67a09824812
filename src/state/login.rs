//! Login form state machine.
//!
//! DESIGN
//! ======
//! `idle → validating → submitting → {succeeded | failed}`. `LoginState` holds
//! the phase and the visible error; `LoginController` does the network call
//! and the success side effects. The page drives them in three steps
//! (`begin`, `submit`, `finish`) so the disabled state is visible while the
//! request is in flight. `Failed` is interactive: the form can be resubmitted.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::http::FetchResponse;
use crate::net::types::{ErrorBody, LoginRequest, LoginResponse};
use crate::platform::Platform;
use crate::state::session;

/// Fallback when a rejection carries no readable message.
pub const GENERIC_REJECTION: &str = "Login failed.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginFailure {
    #[error("Please enter your username.")]
    MissingUsername,
    #[error("Please enter your password.")]
    MissingPassword,
    /// Non-2xx answer; holds the server's message or [`GENERIC_REJECTION`].
    #[error("{0}")]
    Rejected(String),
    /// 2xx answer without a `username`.
    #[error("The login response format is invalid.")]
    MalformedResponse,
    #[error("Something went wrong while signing in. Please try again.")]
    Network,
}

impl LoginFailure {
    /// Field that should receive focus, for validation failures.
    pub fn field(&self) -> Option<LoginField> {
        match self {
            Self::MissingUsername => Some(LoginField::Username),
            Self::MissingPassword => Some(LoginField::Password),
            Self::Rejected(_) | Self::MalformedResponse | Self::Network => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub phase: LoginPhase,
    pub error: Option<LoginFailure>,
}

impl LoginState {
    /// Submit control is disabled while a request is in flight and after
    /// success (the page is navigating away).
    pub fn submit_enabled(&self) -> bool {
        !matches!(self.phase, LoginPhase::Submitting | LoginPhase::Succeeded)
    }

    /// Validate input and move to `Submitting`.
    ///
    /// Returns the request to send, or `None` when validation failed or a
    /// submission is already running.
    pub fn begin(&mut self, username: &str, password: &str) -> Option<LoginRequest> {
        if !self.submit_enabled() {
            return None;
        }
        self.error = None;
        self.phase = LoginPhase::Validating;
        match validate(username, password) {
            Ok(request) => {
                self.phase = LoginPhase::Submitting;
                Some(request)
            }
            Err(failure) => {
                self.fail(failure);
                None
            }
        }
    }

    /// Record the outcome of [`LoginController::submit`].
    pub fn finish(&mut self, outcome: Result<String, LoginFailure>) {
        match outcome {
            Ok(_) => {
                self.phase = LoginPhase::Succeeded;
                self.error = None;
            }
            Err(failure) => self.fail(failure),
        }
    }

    /// Hide the error, e.g. when a field gains focus.
    pub fn dismiss_error(&mut self) {
        self.error = None;
        if self.phase == LoginPhase::Failed {
            self.phase = LoginPhase::Idle;
        }
    }

    fn fail(&mut self, failure: LoginFailure) {
        self.phase = LoginPhase::Failed;
        self.error = Some(failure);
    }
}

/// Username is trimmed; the password is taken as typed.
///
/// # Errors
///
/// Returns the failure for the first empty field.
pub fn validate(username: &str, password: &str) -> Result<LoginRequest, LoginFailure> {
    let username = username.trim();
    if username.is_empty() {
        return Err(LoginFailure::MissingUsername);
    }
    if password.is_empty() {
        return Err(LoginFailure::MissingPassword);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Map a login response to the display name or a failure.
///
/// # Errors
///
/// [`LoginFailure::Rejected`] for non-2xx statuses,
/// [`LoginFailure::MalformedResponse`] for 2xx without a username.
pub fn interpret_response(response: &FetchResponse) -> Result<String, LoginFailure> {
    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.user_message().map(str::to_owned))
            .unwrap_or_else(|| GENERIC_REJECTION.to_owned());
        return Err(LoginFailure::Rejected(message));
    }
    response
        .json::<LoginResponse>()
        .ok()
        .and_then(|body| body.username)
        .filter(|name| !name.is_empty())
        .ok_or(LoginFailure::MalformedResponse)
}

#[derive(Clone, Debug)]
pub struct LoginController {
    platform: Platform,
    config: ClientConfig,
}

impl LoginController {
    pub fn new(platform: Platform, config: ClientConfig) -> Self {
        Self { platform, config }
    }

    /// Post credentials. On success the display name is cached and the
    /// browser is sent to the home page.
    ///
    /// # Errors
    ///
    /// Returns the failure to show; the caller re-enables the form.
    pub async fn submit(&self, request: LoginRequest) -> Result<String, LoginFailure> {
        let response = match api::login(&self.platform, &self.config, &request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("login request failed: {e}");
                return Err(LoginFailure::Network);
            }
        };
        log::debug!("login response status {}", response.status);

        match interpret_response(&response) {
            Ok(name) => {
                log::info!("signed in as {name}");
                session::remember_display_name(&self.platform, &name);
                self.platform.navigator.navigate(&self.config.home_path);
                Ok(name)
            }
            Err(LoginFailure::MalformedResponse) => {
                log::error!("login succeeded with status {} but no username in body", response.status);
                Err(LoginFailure::MalformedResponse)
            }
            Err(failure) => Err(failure),
        }
    }

    /// Run one full submission against `state`.
    pub async fn run(&self, state: &mut LoginState, username: &str, password: &str) {
        let Some(request) = state.begin(username, password) else {
            return;
        };
        let outcome = self.submit(request).await;
        state.finish(outcome);
    }
}
