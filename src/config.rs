//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled. Parsing goes through a lookup
//! closure so the rules stay testable on the host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Router segment of the login page. The login path is fixed at this route.
pub const LOGIN_SEGMENT: &str = "login";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_SESSION_COOKIE: &str = "access_token";
pub const DEFAULT_PUBLIC_PATHS: &[&str] = &["/login", "/register"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same origin.
    pub api_base: String,
    pub login_path: String,
    pub home_path: String,
    /// Paths the session guard never redirects away from.
    pub public_paths: Vec<String>,
    pub session_cookie: String,
    /// When `false` protected pages skip the cookie presence check and rely
    /// on 401 handling alone.
    pub session_guard: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            public_paths: DEFAULT_PUBLIC_PATHS.iter().map(|p| (*p).to_owned()).collect(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_owned(),
            session_guard: true,
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `CHAT_API_BASE`: origin or path prefix for API calls (default empty)
    /// - `CHAT_SESSION_COOKIE`: default `access_token`
    /// - `CHAT_PUBLIC_PATHS`: comma-separated, default `/login,/register`
    /// - `CHAT_SESSION_GUARD`: boolean, default `true`
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "CHAT_API_BASE" => option_env!("CHAT_API_BASE"),
            "CHAT_SESSION_COOKIE" => option_env!("CHAT_SESSION_COOKIE"),
            "CHAT_PUBLIC_PATHS" => option_env!("CHAT_PUBLIC_PATHS"),
            "CHAT_SESSION_GUARD" => option_env!("CHAT_SESSION_GUARD"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        let api_base = var("CHAT_API_BASE")
            .map(|v| v.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let session_cookie = var("CHAT_SESSION_COOKIE").map_or(defaults.session_cookie, str::to_owned);
        let public_paths = var("CHAT_PUBLIC_PATHS")
            .map(parse_path_list)
            .filter(|paths| !paths.is_empty())
            .unwrap_or(defaults.public_paths);
        let session_guard = var("CHAT_SESSION_GUARD")
            .and_then(parse_bool)
            .unwrap_or(defaults.session_guard);

        Self {
            api_base,
            login_path: defaults.login_path,
            home_path: defaults.home_path,
            public_paths,
            session_cookie,
            session_guard,
        }
    }

    /// Resolve an API path (`/api/...`) against the configured base.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}
