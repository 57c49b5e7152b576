//! Account registration page.
//!
//! A successful registration logs in with the same credentials straight
//! away, so the user lands on the dashboard without a second form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::api::ApiClient;
use crate::net::types::Registration;
use crate::router::gate::DASHBOARD_PATH;
use crate::state::session::SessionState;

pub const MIN_PASSWORD_CHARS: usize = 6;
const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub citizenship_number: String,
    pub password: String,
    pub password_confirm: String,
}

/// Check the form in display order and build the request body.
///
/// Text fields are trimmed; passwords are sent as typed.
pub fn validate_registration(form: &RegisterForm) -> Result<Registration, &'static str> {
    if form.username.trim().is_empty() {
        return Err("Username is required");
    }
    if form.email.trim().is_empty() {
        return Err("Email is required");
    }
    if form.password.is_empty() {
        return Err("Password is required");
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters");
    }
    if form.password != form.password_confirm {
        return Err("Passwords do not match");
    }
    Ok(Registration {
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        phone_number: form.phone_number.trim().to_owned(),
        citizenship_number: form.citizenship_number.trim().to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let citizenship_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone_number: phone_number.get_untracked(),
            citizenship_number: citizenship_number.get_untracked(),
            password: password.get_untracked(),
            password_confirm: password_confirm.get_untracked(),
        };
        let registration = match validate_registration(&form) {
            Ok(registration) => registration,
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
            let result = match client.register(&registration).await {
                Ok(created) => {
                    log::info!("registered account {}", created.username);
                    client.login(&registration.credentials()).await
                }
                Err(e) => Err(e),
            };
            busy.set(false);
            match result {
                Ok(identity) => {
                    session.update(|s| s.login(identity));
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(e.field_message(REGISTRATION_FAILED)),
            }
        });
    };

    view! {
        <div class="auth-container page-container">
            <div class="auth-form-wrapper">
                <h1>"Create Account"</h1>
                <p class="auth-subtitle">"Join StartEase to back campaigns or launch your own"</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        <FormField value=first_name label="First Name" kind="text"/>
                        <FormField value=last_name label="Last Name" kind="text"/>
                    </div>
                    <FormField value=username label="Username *" kind="text"/>
                    <FormField value=email label="Email *" kind="email"/>
                    <div class="form-row">
                        <FormField value=phone_number label="Phone Number" kind="tel"/>
                        <FormField value=citizenship_number label="Citizenship Number" kind="text"/>
                    </div>
                    <FormField value=password label="Password *" kind="password"/>
                    <FormField value=password_confirm label="Confirm Password *" kind="password"/>
                    <button type="submit" class="button-primary auth-submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-switch">"Already have an account? " <a href="/login">"Log in"</a></p>
            </div>
        </div>
    }
}
