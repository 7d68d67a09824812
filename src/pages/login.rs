//! Login page: username + password form driving `LoginState`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::controller::AppController;
use crate::state::login::{LoginField, LoginPhase, LoginState};

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

fn visibility_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

fn submit_label(phase: LoginPhase) -> &'static str {
    match phase {
        LoginPhase::Submitting | LoginPhase::Succeeded => "Signing in...",
        _ => "Sign in",
    }
}

/// Where Enter in `field` sends focus. `None` lets the form submit.
fn focus_after_enter(field: LoginField) -> Option<LoginField> {
    match field {
        LoginField::Username => Some(LoginField::Password),
        LoginField::Password => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = expect_context::<AppController>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let form = RwSignal::new(LoginState::default());

    let username_ref = NodeRef::<leptos::html::Input>::new();
    let password_ref = NodeRef::<leptos::html::Input>::new();

    let focus = move |field: LoginField| {
        let target = match field {
            LoginField::Username => username_ref,
            LoginField::Password => password_ref,
        };
        #[cfg(feature = "csr")]
        if let Some(input) = target.get_untracked() {
            let _ = input.focus();
        }
        #[cfg(not(feature = "csr"))]
        let _ = target;
    };

    let submit = Callback::new(move |()| {
        let request =
            form.try_update(|state| state.begin(&username.get_untracked(), &password.get_untracked())).flatten();
        let Some(request) = request else {
            let field = form.with_untracked(|state| state.error.as_ref().and_then(|e| e.field()));
            if let Some(field) = field {
                focus(field);
            }
            return;
        };

        #[cfg(feature = "csr")]
        {
            let login = controller.login();
            leptos::task::spawn_local(async move {
                let outcome = login.submit(request).await;
                form.update(|state| state.finish(outcome));
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&controller, request);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(());
    };
    let on_username_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(next) = focus_after_enter(LoginField::Username) {
                ev.prevent_default();
                focus(next);
            }
        }
    };
    let on_field_focus = move |_| form.update(LoginState::dismiss_error);

    let error_text = move || form.with(|state| state.error.as_ref().map(ToString::to_string).unwrap_or_default());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Smart-RAG Chat"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        node_ref=username_ref
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        on:keydown=on_username_keydown
                        on:focus=on_field_focus
                    />
                    <div class="login-password">
                        <input
                            node_ref=password_ref
                            id="password"
                            class="login-input"
                            type=move || password_input_type(password_visible.get())
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            on:focus=on_field_focus
                        />
                        <button
                            class="login-password__toggle"
                            type="button"
                            on:click=move |_| password_visible.update(|visible| *visible = !*visible)
                        >
                            {move || visibility_label(password_visible.get())}
                        </button>
                    </div>
                    <Show when=move || form.with(|state| state.error.is_some())>
                        <div class="login-error" role="alert">{error_text}</div>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || !form.with(LoginState::submit_enabled)
                    >
                        {move || submit_label(form.with(|state| state.phase))}
                    </button>
                </form>
            </div>
        </div>
    }
}
