//! Test fixtures: an in-memory platform with handles kept for inspection.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::net::http::{FetchError, FetchRequest, FetchResponse, Transport};
use crate::platform::Platform;
use crate::util::cookie::MemoryCookieJar;
use crate::util::navigation::MemoryNavigator;
use crate::util::storage::MemoryStore;

/// Transport that replays queued results and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<FetchResponse, FetchError>>>>,
    sent: Arc<Mutex<Vec<FetchRequest>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(Ok(FetchResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(FetchError::Transport(message.to_owned())));
    }

    pub fn sent(&self) -> Vec<FetchRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted reply".to_owned())))
    }
}

pub struct TestPlatform {
    pub platform: Platform,
    pub cookies: MemoryCookieJar,
    pub storage: MemoryStore,
    pub navigator: MemoryNavigator,
    pub transport: ScriptedTransport,
}

impl TestPlatform {
    pub fn at(path: &str) -> Self {
        let cookies = MemoryCookieJar::new();
        let storage = MemoryStore::new();
        let navigator = MemoryNavigator::at(path);
        let transport = ScriptedTransport::default();
        let platform = Platform {
            cookies: Arc::new(cookies.clone()),
            storage: Arc::new(storage.clone()),
            navigator: Arc::new(navigator.clone()),
            transport: Arc::new(transport.clone()),
        };
        Self { platform, cookies, storage, navigator, transport }
    }

    /// Same storage and cookies, fresh page at `path`: what a reload sees.
    pub fn reload_at(&self, path: &str) -> Self {
        let navigator = MemoryNavigator::at(path);
        let transport = ScriptedTransport::default();
        let platform = Platform {
            cookies: Arc::new(self.cookies.clone()),
            storage: Arc::new(self.storage.clone()),
            navigator: Arc::new(navigator.clone()),
            transport: Arc::new(transport.clone()),
        };
        Self {
            platform,
            cookies: self.cookies.clone(),
            storage: self.storage.clone(),
            navigator,
            transport,
        }
    }
}
