//! Top bar with connection indicator, user name and chrome buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `UiState` and reports clicks as `UiEvent`s; the binding
//! table decides what each button does.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::state::bindings::{Target, UiEvent};
use crate::state::ui::UiState;

#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = expect_context::<Dispatcher>();

    let click = move |target: Target| dispatch.event(UiEvent::Click(target));

    let status_class = move || ui.with(|state| state.connection.css_class());
    let status_label = move || ui.with(|state| state.connection.label());
    let user_name = move || ui.with(|state| state.display_name.clone().unwrap_or_default());
    let theme_icon = move || ui.with(|state| state.settings.theme.toggle_icon());

    view! {
        <header class="status-bar">
            <span class="status-bar__brand">"Smart-RAG Chat"</span>
            <span id="connection-status" class=status_class>{status_label}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__user">{user_name}</span>
            <button class="status-bar__button" title="Toggle theme" on:click=move |_| click(Target::ThemeToggle)>
                {theme_icon}
            </button>
            <button class="status-bar__button" title="Settings" on:click=move |_| click(Target::SettingsButton)>
                "⚙"
            </button>
            <button class="status-bar__button" title="Sign out" on:click=move |_| click(Target::SignOutButton)>
                "Sign out"
            </button>
        </header>
    }
}
