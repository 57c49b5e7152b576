//! Startup registration for an existing account.
//!
//! On success the browser does a full load of the dashboard. The new page
//! load runs its single identity check and picks up the startup profile;
//! the live session is never re-resolved in place.

#[cfg(test)]
#[path = "become_startup_test.rs"]
mod become_startup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{MISSING_FIELDS, optional_text};
use crate::components::form_field::{FormField, TextAreaField};
use crate::net::api::ApiClient;
use crate::net::types::{Identity, StartupApplication};
use crate::router::gate::DASHBOARD_PATH;

const REGISTER_FAILED: &str = "Failed to register as startup";

/// `(value, label)` pairs the server accepts for `category`.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("tech", "Technology"),
    ("health", "Healthcare"),
    ("finance", "Finance"),
    ("education", "Education"),
    ("ecommerce", "E-commerce"),
    ("other", "Other"),
];

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartupInput {
    pub company_name: String,
    pub category: String,
    pub description: String,
    pub website: String,
}

impl Default for StartupInput {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            category: CATEGORIES[0].0.to_owned(),
            description: String::new(),
            website: String::new(),
        }
    }
}

/// Company name and description are required; a blank website is omitted.
pub fn validate_startup(input: &StartupInput) -> Result<StartupApplication, &'static str> {
    if input.company_name.trim().is_empty() || input.description.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(StartupApplication {
        company_name: input.company_name.trim().to_owned(),
        category: input.category.clone(),
        description: input.description.trim().to_owned(),
        website: optional_text(&input.website),
    })
}

#[component]
pub fn BecomeStartupPage(identity: Identity) -> impl IntoView {
    if let Some(startup) = identity.startup() {
        let name = startup.company_name.clone();
        return view! {
            <div class="campaign-form-page page-container">
                <div class="container narrow">
                    <h1>"You're already a startup"</h1>
                    <p>{name} " is registered. Head to your portal to manage campaigns."</p>
                    <a href="/startup-portal" class="button-primary">"Go to Startup Portal"</a>
                </div>
            </div>
        }
        .into_any();
    }

    let api = expect_context::<StoredValue<ApiClient>>();
    let navigate = use_navigate();
    let defaults = StartupInput::default();
    let company_name = RwSignal::new(defaults.company_name);
    let category = RwSignal::new(defaults.category);
    let description = RwSignal::new(defaults.description);
    let website = RwSignal::new(defaults.website);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = StartupInput {
            company_name: company_name.get_untracked(),
            category: category.get_untracked(),
            description: description.get_untracked(),
            website: website.get_untracked(),
        };
        let application = match validate_startup(&input) {
            Ok(application) => application,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let client = api.get_value();
        leptos::task::spawn_local(async move {
            let result = client.become_startup(&application).await;
            busy.set(false);
            match result {
                Ok(profile) => {
                    log::info!("registered startup {}", profile.company_name);
                    reload_at(DASHBOARD_PATH);
                }
                Err(e) => error.set(e.user_message(REGISTER_FAILED)),
            }
        });
    };

    let category_options = CATEGORIES
        .into_iter()
        .map(|(value, label)| {
            view! {
                <option value=value selected=move || category.get() == value>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="campaign-form-page page-container">
            <div class="container narrow">
                <h1>"Become a Startup"</h1>
                <p class="form-subtitle">"Register your company to launch campaigns"</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <form class="campaign-form" on:submit=on_submit>
                    <FormField value=company_name label="Company Name *" kind="text" placeholder="Your company name"/>
                    <div class="form-group">
                        <label for="category">"Industry Category *"</label>
                        <select id="category" on:change=move |ev| category.set(event_target_value(&ev))>
                            {category_options}
                        </select>
                    </div>
                    <TextAreaField value=description label="Company Description *" placeholder="What does your company do?"/>
                    <FormField value=website label="Website" kind="url" placeholder="https://example.com"/>
                    <div class="form-actions">
                        <button type="submit" class="button-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Registering..." } else { "Register Startup" }}
                        </button>
                        <button
                            type="button"
                            class="button-secondary"
                            on:click=move |_| navigate(DASHBOARD_PATH, NavigateOptions::default())
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
    .into_any()
}

/// Full browser navigation, discarding all client state.
#[cfg(feature = "csr")]
fn reload_at(path: &str) {
    if let Some(window) = web_sys::window()
        && let Err(e) = window.location().set_href(path)
    {
        log::warn!("navigation to {path} failed: {e:?}");
    }
}

#[cfg(not(feature = "csr"))]
fn reload_at(path: &str) {
    log::debug!("full navigation to {path} skipped outside the browser");
}
