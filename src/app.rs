//! Root application component with session bootstrap and routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::router::outlet::RouteOutlet;
use crate::state::session::{SessionState, bootstrap};

/// Root application component.
///
/// Provides the session and API contexts, then starts the single identity
/// check for this page load. Nothing route-specific renders until it
/// finishes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(ApiConfig::from_build_env());
    log::info!("startease client using {}", api.config().base_url);
    let session = RwSignal::new(SessionState::default());

    provide_context(session);
    provide_context(StoredValue::new(api.clone()));

    leptos::task::spawn_local(async move {
        bootstrap(session, &api).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/startease-client.css"/>
        <Title text="StartEase"/>

        <Router>
            <Show when=move || !session.with(SessionState::loading)>
                <Navbar/>
            </Show>
            <main>
                <RouteOutlet/>
            </main>
        </Router>
    }
}
