//! User preferences persisted in local storage.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::util::storage::KeyValueStore;
use crate::util::theme::{self, Theme};

pub const CHAT_MODE_KEY: &str = "chat_mode";

/// How the backend routes a chat message through its tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatMode {
    #[default]
    Parallel,
    Simple,
    LlmIntegrated,
}

impl ChatMode {
    pub const ALL: [Self; 3] = [Self::Parallel, Self::Simple, Self::LlmIntegrated];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parallel => "parallel",
            Self::Simple => "simple",
            Self::LlmIntegrated => "llm_integrated",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Parallel => "Parallel",
            Self::Simple => "Simple",
            Self::LlmIntegrated => "LLM integrated",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub chat_mode: ChatMode,
}

impl Settings {
    /// Stored values, each falling back to its default when unset or unknown.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let chat_mode = store
            .get(CHAT_MODE_KEY)
            .and_then(|raw| ChatMode::parse(&raw))
            .unwrap_or_default();
        Self { theme: theme::read_preference(store), chat_mode }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        theme::persist(store, self.theme);
        store.set(CHAT_MODE_KEY, self.chat_mode.as_str());
    }
}
