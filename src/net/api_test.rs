use futures::executor::block_on;

use super::*;
use crate::net::http::Method;
use crate::testing::TestPlatform;

// =============================================================
// login
// =============================================================

#[test]
fn login_posts_json_with_credentials_included() {
    let t = TestPlatform::at("/login");
    t.transport.reply(200, r#"{"username":"alice"}"#);
    let creds = LoginRequest { username: "alice".to_owned(), password: "pw".to_owned() };

    let resp = block_on(login(&t.platform, &ClientConfig::default(), &creds)).unwrap();

    assert_eq!(resp.status, 200);
    let sent = t.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/api/auth/login");
    assert_eq!(sent[0].credentials, Credentials::Include);
    assert_eq!(sent[0].header_value(CONTENT_TYPE), Some(APPLICATION_JSON));
    let RequestBody::Text(body) = &sent[0].body else {
        panic!("expected text body");
    };
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value, serde_json::json!({ "username": "alice", "password": "pw" }));
}

#[test]
fn login_401_does_not_end_session() {
    let t = TestPlatform::at("/login");
    t.transport.reply(401, r#"{"message":"invalid credentials"}"#);
    let creds = LoginRequest { username: "alice".to_owned(), password: "bad".to_owned() };

    let resp = block_on(login(&t.platform, &ClientConfig::default(), &creds)).unwrap();

    assert_eq!(resp.status, 401);
    assert!(t.navigator.history().is_empty());
}

// =============================================================
// check_health
// =============================================================

#[test]
fn healthy_status_means_connected() {
    let t = TestPlatform::at("/");
    t.transport.reply(200, r#"{"status":"healthy","service":"ai-engine"}"#);
    assert_eq!(block_on(check_health(&t.platform, &ClientConfig::default())), ConnectionStatus::Connected);
    assert_eq!(t.transport.sent()[0].url, "/api/health");
}

#[test]
fn degraded_status_with_503_means_disconnected() {
    let t = TestPlatform::at("/");
    t.transport.reply(503, r#"{"status":"degraded"}"#);
    assert_eq!(block_on(check_health(&t.platform, &ClientConfig::default())), ConnectionStatus::Disconnected);
}

#[test]
fn unreadable_body_means_disconnected() {
    let t = TestPlatform::at("/");
    t.transport.reply(502, "<html>Bad Gateway</html>");
    assert_eq!(block_on(check_health(&t.platform, &ClientConfig::default())), ConnectionStatus::Disconnected);
}

#[test]
fn transport_failure_means_disconnected() {
    let t = TestPlatform::at("/");
    t.transport.fail("offline");
    assert_eq!(block_on(check_health(&t.platform, &ClientConfig::default())), ConnectionStatus::Disconnected);
}
