//! Bundle of browser capabilities handed to the controller.
//!
//! DESIGN
//! ======
//! Each handle is an `Arc<dyn Trait>` so the bundle is `Send + Sync` and can
//! sit in Leptos context. Browser implementations are stateless unit structs
//! that look up `web_sys::window()` per call.

use std::sync::Arc;

use crate::net::http::{OfflineTransport, Transport};
use crate::util::cookie::{CookieJar, MemoryCookieJar};
use crate::util::navigation::{MemoryNavigator, Navigator};
use crate::util::storage::{KeyValueStore, MemoryStore};

#[derive(Clone)]
pub struct Platform {
    pub cookies: Arc<dyn CookieJar>,
    pub storage: Arc<dyn KeyValueStore>,
    pub navigator: Arc<dyn Navigator>,
    pub transport: Arc<dyn Transport>,
}

impl Platform {
    /// The real browser: `document.cookie`, `localStorage`, `location`, `fetch`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        use crate::net::http::GlooTransport;
        use crate::util::cookie::DocumentCookieJar;
        use crate::util::navigation::LocationNavigator;
        use crate::util::storage::LocalStorage;

        Self {
            cookies: Arc::new(DocumentCookieJar),
            storage: Arc::new(LocalStorage),
            navigator: Arc::new(LocationNavigator),
            transport: Arc::new(GlooTransport),
        }
    }

    /// In-memory state at `/` with a transport that always fails.
    pub fn detached() -> Self {
        Self {
            cookies: Arc::new(MemoryCookieJar::new()),
            storage: Arc::new(MemoryStore::new()),
            navigator: Arc::new(MemoryNavigator::default()),
            transport: Arc::new(OfflineTransport),
        }
    }

    /// Browser platform in `csr` builds, detached otherwise.
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::detached()
        }
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("path", &self.navigator.current_path())
            .finish_non_exhaustive()
    }
}
