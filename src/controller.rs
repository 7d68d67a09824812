//! Top-level owner of configuration, platform handles and startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one `AppController`, calls `start` once, keeps
//! the returned `UiState` in a signal and routes every chrome action through
//! `dispatch`. Pages get `AuthFetch` / `LoginController` from here so they
//! share the same platform and config.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::auth_fetch::AuthFetch;
use crate::platform::Platform;
use crate::state::bindings::UiAction;
use crate::state::login::LoginController;
use crate::state::session::{self, GuardOutcome, SessionGuard};
use crate::state::settings::Settings;
use crate::state::ui::{ConnectionStatus, ModalId, ToastKind, UiState};
use crate::util::{dom, theme};

pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved.";

/// Result of [`AppController::start`].
#[derive(Clone, Debug)]
pub struct Startup {
    pub guard: GuardOutcome,
    pub ui: UiState,
}

#[derive(Clone, Debug)]
pub struct AppController {
    config: ClientConfig,
    platform: Platform,
    guard: SessionGuard,
}

impl AppController {
    pub fn new(config: ClientConfig, platform: Platform) -> Self {
        let guard = SessionGuard::new(&config);
        Self { config, platform, guard }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Page-load sequence: session guard, stored settings, theme.
    pub fn start(&self) -> Startup {
        let guard = self.guard.enforce(&self.platform);

        let settings = Settings::load(self.platform.storage.as_ref());
        theme::apply(settings.theme);

        let ui = UiState {
            settings,
            settings_draft: settings,
            display_name: session::display_name(&self.platform),
            ..UiState::default()
        };
        log::info!(
            "client started on {} (guard: {guard:?}, theme: {})",
            self.platform.navigator.current_path(),
            settings.theme.as_str()
        );
        Startup { guard, ui }
    }

    /// Apply `action` to `ui` along with its side effects.
    ///
    /// Returns the id of a toast this action showed, so the caller can
    /// schedule its dismissal.
    pub fn dispatch(&self, ui: &mut UiState, action: UiAction) -> Option<String> {
        log::debug!("dispatch {action:?}");
        match action {
            UiAction::ToggleTheme => {
                let next = theme::toggle(self.platform.storage.as_ref(), ui.settings.theme);
                ui.settings.theme = next;
                ui.settings_draft.theme = next;
                None
            }
            UiAction::OpenModal(modal) => {
                ui.open_modal(modal);
                dom::set_scroll_locked(ui.scroll_locked());
                None
            }
            UiAction::CloseModal(modal) => {
                ui.close_modal(modal);
                dom::set_scroll_locked(ui.scroll_locked());
                None
            }
            UiAction::CloseAllModals => {
                ui.close_all_modals();
                dom::set_scroll_locked(false);
                None
            }
            UiAction::SaveSettings => {
                ui.settings = ui.settings_draft;
                ui.settings.save(self.platform.storage.as_ref());
                theme::apply(ui.settings.theme);
                ui.close_modal(ModalId::Settings);
                dom::set_scroll_locked(ui.scroll_locked());
                Some(ui.show_toast(SETTINGS_SAVED_MESSAGE, ToastKind::Success))
            }
            UiAction::SignOut => {
                log::info!("signing out");
                session::end_session(&self.platform, &self.config);
                ui.display_name = None;
                None
            }
        }
    }

    /// Query the health endpoint.
    pub async fn refresh_connection(&self) -> ConnectionStatus {
        let status = api::check_health(&self.platform, &self.config).await;
        log::info!("backend connection: {}", status.label());
        status
    }

    pub fn auth_fetch(&self) -> AuthFetch {
        AuthFetch::new(self.platform.clone(), self.config.clone())
    }

    pub fn login(&self) -> LoginController {
        LoginController::new(self.platform.clone(), self.config.clone())
    }
}
