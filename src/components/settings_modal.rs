//! Settings modal editing the theme and chat mode draft.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::state::bindings::{Target, UiEvent};
use crate::state::settings::ChatMode;
use crate::state::ui::{ModalId, UiState};
use crate::util::theme::Theme;

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = expect_context::<Dispatcher>();

    let click = move |target: Target| dispatch.event(UiEvent::Click(target));

    let on_theme_change = move |ev: leptos::ev::Event| {
        if let Some(theme) = Theme::parse(&event_target_value(&ev)) {
            ui.update(|state| state.settings_draft.theme = theme);
        }
    };
    let on_mode_change = move |ev: leptos::ev::Event| {
        if let Some(mode) = ChatMode::parse(&event_target_value(&ev)) {
            ui.update(|state| state.settings_draft.chat_mode = mode);
        }
    };

    view! {
        <Show when=move || ui.with(|state| state.is_open(ModalId::Settings))>
            <div
                id="settings-modal"
                class="modal__backdrop"
                on:click=move |_| click(Target::ModalBackdrop(ModalId::Settings))
            >
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h2>"Settings"</h2>
                        <button class="modal__close" title="Close settings" on:click=move |_| click(Target::SettingsClose)>
                            "✕"
                        </button>
                    </div>
                    <div class="modal__body">
                        <label for="theme-select">"Theme"</label>
                        <select
                            id="theme-select"
                            prop:value=move || ui.with(|state| state.settings_draft.theme.as_str())
                            on:change=on_theme_change
                        >
                            <option value=Theme::Light.as_str()>"Light"</option>
                            <option value=Theme::Dark.as_str()>"Dark"</option>
                        </select>
                        <label for="chat-mode-select">"Chat mode"</label>
                        <select
                            id="chat-mode-select"
                            prop:value=move || ui.with(|state| state.settings_draft.chat_mode.as_str())
                            on:change=on_mode_change
                        >
                            {ChatMode::ALL
                                .into_iter()
                                .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="modal__footer">
                        <button class="modal__button" on:click=move |_| click(Target::SettingsCancel)>
                            "Cancel"
                        </button>
                        <button class="modal__button modal__button--primary" on:click=move |_| click(Target::SettingsSave)>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
