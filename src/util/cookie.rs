//! `document.cookie` access behind a small trait.
//!
//! Script sees cookies as a single `name=value; name2=value2` string and
//! writes them one directive at a time, so the trait models exactly that.
//! `MemoryCookieJar` emulates the browser semantics closely enough for tests
//! and non-browser builds: a `max-age` of zero or less deletes the cookie.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::sync::{Arc, Mutex, PoisonError};

pub trait CookieJar: Send + Sync {
    /// The script-visible cookie string.
    fn raw(&self) -> String;
    /// Apply one `Set-Cookie`-style directive.
    fn write(&self, directive: &str);
}

/// Find `name` in a `document.cookie` string.
///
/// Returns the raw value, which may be empty.
pub fn read_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_owned)
}

/// Directive that makes the browser drop `name` on `path`.
pub fn expire_directive(name: &str, path: &str) -> String {
    format!("{name}=; path={path}; max-age=0")
}

#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a cookie as if the server had set it.
    pub fn insert(&self, name: &str, value: &str) {
        self.write(&format!("{name}={value}; path=/"));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().iter().any(|(key, _)| key == name)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, String)>> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieJar for MemoryCookieJar {
    fn raw(&self) -> String {
        self.lock()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, directive: &str) {
        let mut parts = directive.split(';');
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let expired = parts
            .filter_map(|attr| attr.split_once('='))
            .filter(|(key, _)| key.trim().eq_ignore_ascii_case("max-age"))
            .any(|(_, age)| age.trim().parse::<i64>().is_ok_and(|age| age <= 0));

        let mut cookies = self.lock();
        cookies.retain(|(key, _)| key != name);
        if !expired {
            cookies.push((name.to_owned(), value.trim().to_owned()));
        }
    }
}

/// Cookie access through `HtmlDocument`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieJar;

#[cfg(feature = "csr")]
impl DocumentCookieJar {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }
}

#[cfg(feature = "csr")]
impl CookieJar for DocumentCookieJar {
    fn raw(&self) -> String {
        Self::document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn write(&self, directive: &str) {
        let Some(doc) = Self::document() else {
            return;
        };
        if let Err(e) = doc.set_cookie(directive) {
            log::warn!("cookie write rejected: {e:?}");
        }
    }
}
