//! Single toast slot. Dismissal timing is handled by `Dispatcher`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.with(|state| state.toast.clone()).map(|toast| {
            view! {
                <div class=toast.kind.css_class() role="status">
                    {toast.message}
                </div>
            }
        })
    }
}
