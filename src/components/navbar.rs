//! Top navigation bar.
//!
//! Links depend on the session: anonymous visitors get login/sign-up,
//! signed-in users get an account menu whose entries depend on whether they
//! own a startup. The bar is not rendered while the session is resolving.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::Identity;
use crate::state::session::{SessionState, sign_out};

/// A single `(label, href)` account menu entry.
pub type MenuLink = (&'static str, &'static str);

/// Account menu entries for a signed-in user, excluding logout.
pub fn account_links(identity: &Identity) -> Vec<MenuLink> {
    let mut links = if identity.is_startup() {
        vec![("Create Campaign", "/create-campaign"), ("My Campaigns", "/startup-portal")]
    } else {
        vec![("Become a Startup", "/become-startup")]
    };
    links.push(("My Dashboard", "/my-dashboard"));
    links.push(("Settings", "/settings"));
    links
}

/// Label for the account menu toggle.
pub fn account_label(identity: &Identity) -> String {
    let username = identity.username().trim();
    if username.is_empty() { "User".to_owned() } else { username.to_owned() }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let user = move || session.with(|s| s.user().cloned());

    view! {
        <nav class="navbar">
            <div class="navbar-container container">
                <a href="/" class="navbar-logo">
                    <strong>"Start"</strong>
                    <span>"Ease"</span>
                </a>
                <ul class="nav-menu">
                    <li class="nav-item">
                        <a href="/" class="nav-link">"Home"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/dashboard" class="nav-link">"Campaigns"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/how-it-works" class="nav-link">"How it works"</a>
                    </li>
                    {move || match user() {
                        Some(identity) => view! { <AccountMenu identity=identity/> }.into_any(),
                        None => {
                            view! {
                                <li class="nav-item">
                                    <a href="/login" class="nav-link">"Login"</a>
                                </li>
                                <li class="nav-item">
                                    <a href="/register" class="nav-link nav-link-btn button-primary">"Sign Up"</a>
                                </li>
                            }
                                .into_any()
                        }
                    }}
                </ul>
            </div>
        </nav>
    }
}

#[component]
fn AccountMenu(identity: Identity) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<StoredValue<ApiClient>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            sign_out(session, &client).await;
            navigate("/", NavigateOptions::default());
        });
    };

    let links = account_links(&identity)
        .into_iter()
        .map(|(label, href)| view! { <a href=href class="dropdown-item">{label}</a> })
        .collect_view();

    view! {
        <li class="nav-item dropdown">
            <span class="nav-link dropdown-toggle">{account_label(&identity)}</span>
            <div class="dropdown-menu">
                {links}
                <button class="dropdown-item logout-btn" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </div>
        </li>
    }
}
