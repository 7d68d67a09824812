//! Page chrome state: settings, modals, toast, connection indicator.
//!
//! DESIGN
//! ======
//! One plain value held in a single `RwSignal`. Mutations that need side
//! effects (storage, DOM, timers) go through `AppController::dispatch`;
//! the methods here only change the value.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::settings::Settings;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No health check has completed yet.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking...",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Unknown => "connection-status",
            Self::Connected => "connection-status connected",
            Self::Disconnected => "connection-status disconnected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalId {
    Settings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Settings currently in effect.
    pub settings: Settings,
    /// Values being edited in the settings modal.
    pub settings_draft: Settings,
    pub open_modals: Vec<ModalId>,
    pub toast: Option<Toast>,
    pub connection: ConnectionStatus,
    pub display_name: Option<String>,
}

impl UiState {
    pub fn is_open(&self, modal: ModalId) -> bool {
        self.open_modals.contains(&modal)
    }

    pub fn open_modal(&mut self, modal: ModalId) {
        if modal == ModalId::Settings {
            self.settings_draft = self.settings;
        }
        if !self.is_open(modal) {
            self.open_modals.push(modal);
        }
    }

    pub fn close_modal(&mut self, modal: ModalId) {
        self.open_modals.retain(|open| *open != modal);
    }

    pub fn close_all_modals(&mut self) {
        self.open_modals.clear();
    }

    /// Page scrolling is locked while any modal is open.
    pub fn scroll_locked(&self) -> bool {
        !self.open_modals.is_empty()
    }

    /// Replace any visible toast. Returns the new toast's id for dismissal.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toast = Some(Toast { id: id.clone(), message: message.into(), kind });
        id
    }

    /// Dismiss the toast only if it is still the one identified by `id`.
    pub fn dismiss_toast(&mut self, id: &str) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }
}
