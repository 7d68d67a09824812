//! Page navigation.
//!
//! Session redirects are full page loads (`location.href = ...`), not router
//! transitions, so the next page starts from a clean state and re-runs the
//! startup sequence.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::{Arc, Mutex, PoisonError};

pub trait Navigator: Send + Sync {
    /// Path portion of the current location, e.g. `/login`.
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Navigator that only records where it was sent.
#[derive(Clone, Debug)]
pub struct MemoryNavigator {
    inner: Arc<Mutex<NavState>>,
}

#[derive(Debug)]
struct NavState {
    current: String,
    history: Vec<String>,
}

impl MemoryNavigator {
    pub fn at(path: &str) -> Self {
        Self { inner: Arc::new(Mutex::new(NavState { current: path.to_owned(), history: Vec::new() })) }
    }

    /// Every path passed to [`Navigator::navigate`], oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.lock().history.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NavState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::at("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.lock().current.clone()
    }

    fn navigate(&self, path: &str) {
        let mut state = self.lock();
        state.current = path.to_owned();
        state.history.push(path.to_owned());
    }
}

/// `window.location`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

#[cfg(feature = "csr")]
impl Navigator for LocationNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("navigation to {path} failed: {e:?}");
        }
    }
}
