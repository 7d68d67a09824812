use futures::executor::block_on;

use super::*;
use crate::state::session::DISPLAY_NAME_KEY;
use crate::testing::TestPlatform;
use crate::util::storage::KeyValueStore;

fn controller(t: &TestPlatform) -> LoginController {
    LoginController::new(t.platform.clone(), ClientConfig::default())
}

fn run(t: &TestPlatform, username: &str, password: &str) -> LoginState {
    let mut state = LoginState::default();
    block_on(controller(t).run(&mut state, username, password));
    state
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_username_never_sends_request() {
    let t = TestPlatform::at("/login");
    let state = run(&t, "   ", "secret");

    assert!(t.transport.sent().is_empty());
    assert_eq!(state.error, Some(LoginFailure::MissingUsername));
    assert_eq!(state.error.as_ref().unwrap().to_string(), "Please enter your username.");
    assert_eq!(state.error.as_ref().unwrap().field(), Some(LoginField::Username));
    assert!(state.submit_enabled());
}

#[test]
fn empty_password_never_sends_request() {
    let t = TestPlatform::at("/login");
    let state = run(&t, "alice", "");

    assert!(t.transport.sent().is_empty());
    assert_eq!(state.error, Some(LoginFailure::MissingPassword));
    assert_eq!(state.error.as_ref().unwrap().to_string(), "Please enter your password.");
    assert_eq!(state.error.as_ref().unwrap().field(), Some(LoginField::Password));
}

#[test]
fn validate_trims_username_but_not_password() {
    let req = validate("  alice ", " pw ").unwrap();
    assert_eq!(req.username, "alice");
    assert_eq!(req.password, " pw ");
}

// =============================================================
// Success
// =============================================================

#[test]
fn success_persists_display_name_and_navigates_home() {
    let t = TestPlatform::at("/login");
    t.transport.reply(200, r#"{"username":"alice"}"#);

    let state = run(&t, "alice", "pw");

    assert_eq!(state.phase, LoginPhase::Succeeded);
    assert_eq!(state.error, None);
    assert_eq!(t.storage.get(DISPLAY_NAME_KEY).as_deref(), Some("alice"));
    assert_eq!(t.navigator.history(), vec!["/".to_owned()]);
    assert!(!state.submit_enabled());
}

#[test]
fn success_with_extra_token_field_still_succeeds() {
    let t = TestPlatform::at("/login");
    t.transport.reply(200, r#"{"token":"eyJ...","username":"alice"}"#);
    assert_eq!(run(&t, "alice", "pw").phase, LoginPhase::Succeeded);
}

#[test]
fn success_without_username_is_format_error() {
    let t = TestPlatform::at("/login");
    t.transport.reply(200, r#"{"token":"abc"}"#);

    let state = run(&t, "alice", "pw");

    assert_eq!(state.phase, LoginPhase::Failed);
    assert_eq!(state.error, Some(LoginFailure::MalformedResponse));
    assert_eq!(state.error.as_ref().unwrap().to_string(), "The login response format is invalid.");
    assert!(t.navigator.history().is_empty());
    assert_eq!(t.storage.get(DISPLAY_NAME_KEY), None);
    assert!(state.submit_enabled());
}

#[test]
fn success_with_non_json_body_is_format_error() {
    let t = TestPlatform::at("/login");
    t.transport.reply(200, "OK");
    assert_eq!(run(&t, "alice", "pw").error, Some(LoginFailure::MalformedResponse));
}

// =============================================================
// Rejection and transport failure
// =============================================================

#[test]
fn rejection_shows_server_message_exactly_and_reenables() {
    let t = TestPlatform::at("/login");
    t.transport.reply(401, r#"{"message":"invalid credentials"}"#);

    let state = run(&t, "alice", "wrong");

    assert_eq!(state.error.as_ref().unwrap().to_string(), "invalid credentials");
    assert!(state.submit_enabled());
    assert_eq!(state.phase, LoginPhase::Failed);
    assert!(t.navigator.history().is_empty());
}

#[test]
fn rejection_falls_back_to_error_then_generic() {
    let t = TestPlatform::at("/login");
    t.transport.reply(400, r#"{"success":false,"error":"Authentication Error"}"#);
    assert_eq!(run(&t, "a", "b").error.unwrap().to_string(), "Authentication Error");

    let t = TestPlatform::at("/login");
    t.transport.reply(500, "{}");
    assert_eq!(run(&t, "a", "b").error.unwrap().to_string(), GENERIC_REJECTION);

    let t = TestPlatform::at("/login");
    t.transport.reply(502, "<html>Bad Gateway</html>");
    assert_eq!(run(&t, "a", "b").error.unwrap().to_string(), GENERIC_REJECTION);
}

#[test]
fn network_failure_shows_retry_message_and_reenables() {
    let t = TestPlatform::at("/login");
    t.transport.fail("connection refused");

    let state = run(&t, "alice", "pw");

    assert_eq!(state.error, Some(LoginFailure::Network));
    assert_eq!(
        state.error.as_ref().unwrap().to_string(),
        "Something went wrong while signing in. Please try again."
    );
    assert!(state.submit_enabled());
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn begin_moves_to_submitting_and_blocks_duplicates() {
    let mut state = LoginState::default();
    assert!(state.begin("alice", "pw").is_some());
    assert_eq!(state.phase, LoginPhase::Submitting);
    assert!(!state.submit_enabled());
    assert!(state.begin("alice", "pw").is_none());
    assert_eq!(state.phase, LoginPhase::Submitting);
}

#[test]
fn resubmit_after_failure_clears_old_error() {
    let mut state = LoginState::default();
    state.finish(Err(LoginFailure::Network));
    assert_eq!(state.phase, LoginPhase::Failed);

    assert!(state.begin("alice", "pw").is_some());
    assert_eq!(state.error, None);
}

#[test]
fn dismiss_error_returns_to_idle() {
    let mut state = LoginState::default();
    state.begin("", "pw");
    assert_eq!(state.phase, LoginPhase::Failed);
    state.dismiss_error();
    assert_eq!(state.phase, LoginPhase::Idle);
    assert_eq!(state.error, None);
}

#[test]
fn dismiss_error_keeps_in_flight_phase() {
    let mut state = LoginState::default();
    state.begin("alice", "pw");
    state.dismiss_error();
    assert_eq!(state.phase, LoginPhase::Submitting);
}
