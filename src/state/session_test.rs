use super::*;
use crate::testing::TestPlatform;
use crate::util::cookie::MemoryCookieJar;
use crate::util::storage::KeyValueStore;

fn guard() -> SessionGuard {
    SessionGuard::new(&ClientConfig::default())
}

// =============================================================
// SessionToken
// =============================================================

#[test]
fn token_detected_when_cookie_present() {
    let jar = MemoryCookieJar::new();
    jar.insert("access_token", "opaque");
    assert!(SessionToken::detect(&jar, "access_token").is_some());
}

#[test]
fn empty_cookie_value_counts_as_absent() {
    let jar = MemoryCookieJar::new();
    jar.write("access_token=; path=/");
    assert!(SessionToken::detect(&jar, "access_token").is_none());
}

#[test]
fn token_debug_never_shows_value() {
    let jar = MemoryCookieJar::new();
    jar.insert("access_token", "super-secret");
    let token = SessionToken::detect(&jar, "access_token").unwrap();
    assert_eq!(format!("{token:?}"), "SessionToken(..)");
}

// =============================================================
// SessionGuard::check
// =============================================================

#[test]
fn allow_listed_paths_are_public() {
    let g = guard();
    assert!(g.is_public("/login"));
    assert!(g.is_public("/register"));
    assert!(g.is_public("/register/confirm"));
    assert!(!g.is_public("/"));
    assert!(!g.is_public("/loginx"));
    assert!(!g.is_public("/chat/login"));
}

#[test]
fn login_path_is_public_even_when_not_allow_listed() {
    let config = ClientConfig {
        login_path: "/signin".to_owned(),
        public_paths: vec!["/register".to_owned()],
        ..ClientConfig::default()
    };
    let g = SessionGuard::new(&config);
    assert!(g.is_public("/signin"));
    assert!(g.is_public("/signin/sso"));
    assert!(!g.is_public("/login"));
}

#[test]
fn public_path_skips_cookie_check() {
    let jar = MemoryCookieJar::new();
    assert_eq!(guard().check("/login", &jar), GuardOutcome::Public);
}

#[test]
fn missing_cookie_on_protected_path_redirects() {
    let jar = MemoryCookieJar::new();
    let outcome = guard().check("/", &jar);
    assert_eq!(outcome, GuardOutcome::RedirectToLogin);
    assert!(!outcome.may_proceed());
}

#[test]
fn present_cookie_proceeds_without_validation() {
    let jar = MemoryCookieJar::new();
    jar.insert("access_token", "not-even-a-jwt");
    let outcome = guard().check("/", &jar);
    assert!(matches!(outcome, GuardOutcome::Proceed(Some(_))));
    assert!(outcome.may_proceed());
}

#[test]
fn disabled_guard_proceeds_without_cookie() {
    let config = ClientConfig { session_guard: false, ..ClientConfig::default() };
    let jar = MemoryCookieJar::new();
    assert_eq!(SessionGuard::new(&config).check("/", &jar), GuardOutcome::Proceed(None));
}

// =============================================================
// SessionGuard::enforce
// =============================================================

#[test]
fn enforce_navigates_to_login_when_cookie_missing() {
    let t = TestPlatform::at("/");
    assert_eq!(guard().enforce(&t.platform), GuardOutcome::RedirectToLogin);
    assert_eq!(t.navigator.history(), vec!["/login".to_owned()]);
}

#[test]
fn enforce_does_not_navigate_on_login_page() {
    let t = TestPlatform::at("/login");
    assert_eq!(guard().enforce(&t.platform), GuardOutcome::Public);
    assert!(t.navigator.history().is_empty());
}

#[test]
fn enforce_does_not_navigate_with_cookie() {
    let t = TestPlatform::at("/");
    t.cookies.insert("access_token", "x");
    assert!(guard().enforce(&t.platform).may_proceed());
    assert!(t.navigator.history().is_empty());
}

// =============================================================
// Local session state
// =============================================================

#[test]
fn end_session_clears_cookie_and_name_then_navigates() {
    let t = TestPlatform::at("/");
    t.cookies.insert("access_token", "x");
    remember_display_name(&t.platform, "alice");

    end_session(&t.platform, &ClientConfig::default());

    assert!(!t.cookies.contains("access_token"));
    assert_eq!(t.storage.get(DISPLAY_NAME_KEY), None);
    assert_eq!(display_name(&t.platform), None);
    assert_eq!(t.navigator.last_navigation().as_deref(), Some("/login"));
}

#[test]
fn display_name_ignores_empty_value() {
    let t = TestPlatform::at("/");
    t.storage.set(DISPLAY_NAME_KEY, "");
    assert_eq!(display_name(&t.platform), None);
    remember_display_name(&t.platform, "bob");
    assert_eq!(display_name(&t.platform).as_deref(), Some("bob"));
}
