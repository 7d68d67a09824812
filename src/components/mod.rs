//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome from the shared `RwSignal<UiState>` and
//! report clicks through the `Dispatcher` in context.

pub mod settings_modal;
pub mod status_bar;
pub mod toast;
