//! Client-side view of the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns the session. The client only sees whether the companion
//! cookie is present and reacts to 401 responses; it never inspects the
//! token. The guard below is a UX redirect, not an access control.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::ClientConfig;
use crate::platform::Platform;
use crate::util::cookie::{self, CookieJar};

/// Storage key of the cached display name.
pub const DISPLAY_NAME_KEY: &str = "username";

/// Proof that a session cookie was present when the page loaded.
///
/// Carries no value: the token is the server's business.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(());

impl SessionToken {
    /// Look for a non-empty `name` cookie.
    pub fn detect(jar: &dyn CookieJar, name: &str) -> Option<Self> {
        cookie::read_cookie(&jar.raw(), name)
            .filter(|value| !value.is_empty())
            .map(|_| Self(()))
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Path is on the allow-list; no check performed.
    Public,
    /// Cookie present, or the guard is disabled. Proceed optimistically.
    Proceed(Option<SessionToken>),
    /// No cookie on a protected path. The page must not issue protected calls.
    RedirectToLogin,
}

impl GuardOutcome {
    pub fn may_proceed(self) -> bool {
        !matches!(self, Self::RedirectToLogin)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionGuard {
    cookie_name: String,
    login_path: String,
    public_paths: Vec<String>,
    enabled: bool,
}

impl SessionGuard {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            cookie_name: config.session_cookie.clone(),
            login_path: config.login_path.clone(),
            public_paths: config.public_paths.clone(),
            enabled: config.session_guard,
        }
    }

    /// Whether `path` is the login page, an allow-listed path, or below one.
    pub fn is_public(&self, path: &str) -> bool {
        within(path, &self.login_path) || self.public_paths.iter().any(|public| within(path, public))
    }

    /// Decide without side effects.
    pub fn check(&self, path: &str, jar: &dyn CookieJar) -> GuardOutcome {
        if self.is_public(path) {
            return GuardOutcome::Public;
        }
        if !self.enabled {
            return GuardOutcome::Proceed(None);
        }
        match SessionToken::detect(jar, &self.cookie_name) {
            Some(token) => GuardOutcome::Proceed(Some(token)),
            None => GuardOutcome::RedirectToLogin,
        }
    }

    /// Check the current page and navigate to login when the cookie is missing.
    pub fn enforce(&self, platform: &Platform) -> GuardOutcome {
        let path = platform.navigator.current_path();
        let outcome = self.check(&path, platform.cookies.as_ref());
        match outcome {
            GuardOutcome::RedirectToLogin => {
                log::info!("no session cookie on {path}; redirecting to {}", self.login_path);
                platform.navigator.navigate(&self.login_path);
            }
            GuardOutcome::Proceed(None) => log::debug!("session guard disabled; proceeding on {path}"),
            GuardOutcome::Proceed(Some(_)) | GuardOutcome::Public => {}
        }
        outcome
    }
}

fn within(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// Drop the companion cookie and cached display name.
///
/// Best effort: an HttpOnly cookie cannot be cleared from script, and the
/// server remains the authority on whether the session is valid.
pub fn clear_local_session(platform: &Platform, config: &ClientConfig) {
    platform
        .cookies
        .write(&cookie::expire_directive(&config.session_cookie, "/"));
    platform.storage.remove(DISPLAY_NAME_KEY);
}

/// Clear local session state and go to the login page.
pub fn end_session(platform: &Platform, config: &ClientConfig) {
    clear_local_session(platform, config);
    platform.navigator.navigate(&config.login_path);
}

/// Cached display name, if any.
pub fn display_name(platform: &Platform) -> Option<String> {
    platform
        .storage
        .get(DISPLAY_NAME_KEY)
        .filter(|name| !name.is_empty())
}

pub fn remember_display_name(platform: &Platform, name: &str) {
    platform.storage.set(DISPLAY_NAME_KEY, name);
}
