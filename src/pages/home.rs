//! Main chat page shell.
//!
//! Chat messaging itself lives elsewhere; this page hosts the chrome around
//! it and greets the signed-in user.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::settings_modal::SettingsModal;
use crate::components::status_bar::StatusBar;
use crate::state::ui::UiState;

fn greeting(display_name: Option<&str>) -> String {
    match display_name {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="app-shell">
            <StatusBar/>
            <main class="chat-main">
                <p class="chat-main__greeting">{move || ui.with(|state| greeting(state.display_name.as_deref()))}</p>
            </main>
            <SettingsModal/>
        </div>
    }
}
