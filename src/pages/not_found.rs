//! Fallback view for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-container container not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="button-primary">"Back to Home"</a>
        </div>
    }
}
