//! Root component: builds the controller, runs startup and provides context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything below `App` reads two context values: the `RwSignal<UiState>`
//! for rendering and a `Dispatcher` for clicks and keys. The controller itself
//! is provided too so pages can get `AuthFetch` / `LoginController` from it.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::toast::ToastHost;
use crate::config::{ClientConfig, LOGIN_SEGMENT};
use crate::controller::AppController;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::platform::Platform;
use crate::state::bindings::{self, UiAction, UiEvent};
use crate::state::ui::UiState;

/// Copyable handle that routes UI events through the binding table.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    controller: StoredValue<AppController>,
    ui: RwSignal<UiState>,
}

impl Dispatcher {
    pub fn new(controller: AppController, ui: RwSignal<UiState>) -> Self {
        Self { controller: StoredValue::new(controller), ui }
    }

    /// Resolve `event` and apply the bound action, if any.
    pub fn event(self, event: UiEvent) {
        if let Some(action) = bindings::resolve(event) {
            self.action(action);
        }
    }

    pub fn key(self, key: &str) {
        if let Some(action) = bindings::resolve_key(key) {
            self.action(action);
        }
    }

    pub fn action(self, action: UiAction) {
        let shown = self
            .controller
            .with_value(|controller| self.ui.try_update(|ui| controller.dispatch(ui, action)))
            .flatten();
        if let Some(id) = shown {
            schedule_toast_dismissal(self.ui, id);
        }
    }
}

#[cfg(feature = "csr")]
fn schedule_toast_dismissal(ui: RwSignal<UiState>, id: String) {
    use crate::state::ui::TOAST_LIFETIME_MS;

    gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
        ui.update(|state| state.dismiss_toast(&id));
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_toast_dismissal(_ui: RwSignal<UiState>, _id: String) {}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = AppController::new(ClientConfig::from_build_env(), Platform::detect());
    let startup = controller.start();
    let ui = RwSignal::new(startup.ui);
    let dispatcher = Dispatcher::new(controller.clone(), ui);

    provide_context(ui);
    provide_context(dispatcher);
    provide_context(controller.clone());

    #[cfg(feature = "csr")]
    {
        if startup.guard.may_proceed() {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                let status = controller.refresh_connection().await;
                ui.update(|state| state.connection = status);
            });
        }

        // Lives as long as the page.
        let _ = window_event_listener(leptos::ev::keydown, move |ev| dispatcher.key(&ev.key()));
    }
    #[cfg(not(feature = "csr"))]
    let _ = (controller, startup.guard);

    view! {
        <Title text="Smart-RAG Chat"/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment(LOGIN_SEGMENT) view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
