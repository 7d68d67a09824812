//! Declarative event → action table for page chrome.
//!
//! Components report what happened (`UiEvent`); this table says what it
//! means (`UiAction`); `AppController::dispatch` carries it out.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::state::ui::ModalId;

/// Interactive elements of the page chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    ThemeToggle,
    SettingsButton,
    SettingsClose,
    SettingsCancel,
    SettingsSave,
    ModalBackdrop(ModalId),
    SignOutButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Click(Target),
    /// A document-level key press, by `KeyboardEvent.key`.
    Key(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    ToggleTheme,
    OpenModal(ModalId),
    CloseModal(ModalId),
    CloseAllModals,
    SaveSettings,
    SignOut,
}

#[derive(Clone, Copy, Debug)]
pub struct Binding {
    pub event: UiEvent,
    pub action: UiAction,
}

pub const BINDINGS: &[Binding] = &[
    Binding { event: UiEvent::Click(Target::ThemeToggle), action: UiAction::ToggleTheme },
    Binding { event: UiEvent::Click(Target::SettingsButton), action: UiAction::OpenModal(ModalId::Settings) },
    Binding { event: UiEvent::Click(Target::SettingsClose), action: UiAction::CloseModal(ModalId::Settings) },
    Binding { event: UiEvent::Click(Target::SettingsCancel), action: UiAction::CloseModal(ModalId::Settings) },
    Binding { event: UiEvent::Click(Target::SettingsSave), action: UiAction::SaveSettings },
    Binding {
        event: UiEvent::Click(Target::ModalBackdrop(ModalId::Settings)),
        action: UiAction::CloseModal(ModalId::Settings),
    },
    Binding { event: UiEvent::Click(Target::SignOutButton), action: UiAction::SignOut },
    Binding { event: UiEvent::Key("Escape"), action: UiAction::CloseAllModals },
];

/// Action bound to `event`, if any.
pub fn resolve(event: UiEvent) -> Option<UiAction> {
    BINDINGS
        .iter()
        .find(|binding| binding.event == event)
        .map(|binding| binding.action)
}

/// Resolve a key press from a `KeyboardEvent.key` string.
pub fn resolve_key(key: &str) -> Option<UiAction> {
    BINDINGS.iter().find_map(|binding| match binding.event {
        UiEvent::Key(bound) if bound == key => Some(binding.action),
        _ => None,
    })
}
