//! Username + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::Credentials;
use crate::router::gate::DASHBOARD_PATH;
use crate::state::session::SessionState;

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password";
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Trimmed username plus the password as typed; both must be non-blank.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let client = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = client.login(&credentials).await;
            busy.set(false);
            match result {
                Ok(identity) => {
                    session.update(|s| s.login(identity));
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(LOGIN_FAILED)),
            }
        });
    };

    view! {
        <div class="auth-container page-container">
            <div class="auth-form-wrapper">
                <h1>"Welcome Back"</h1>
                <p class="auth-subtitle">"Log in to back campaigns and manage your startup"</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="button-primary auth-submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-switch">"Don't have an account? " <a href="/register">"Sign up"</a></p>
            </div>
        </div>
    }
}
