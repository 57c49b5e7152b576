//! Renders the gate's decision for the current location.
//!
//! The decision is memoised, so a session change that does not alter it
//! (logging in on a public page, for instance) leaves the mounted page alone.
//! Protected pages get the identity captured at mount time as a prop.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::gate::{Decision, LOGIN_PATH, resolve};
use super::table::Page;
use crate::net::types::Identity;
use crate::pages::become_startup::BecomeStartupPage;
use crate::pages::campaign_detail::CampaignDetailPage;
use crate::pages::create_campaign::CreateCampaignPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::how_it_works::HowItWorksPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::my_dashboard::MyDashboardPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::settings::SettingsPage;
use crate::pages::startup_portal::StartupPortalPage;
use crate::state::session::SessionState;

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let decision = Memo::new(move |_| location.pathname.with(|path| session.with(|s| resolve(s, path))));

    move || match decision.get() {
        Decision::Loading => view! { <div class="loading page-container">"Loading..."</div> }.into_any(),
        Decision::Redirect(path) => {
            log::debug!("redirecting to {path}");
            view! { <Redirect path=path/> }.into_any()
        }
        Decision::NotFound => view! { <NotFoundPage/> }.into_any(),
        Decision::Render { page, id } => {
            let identity = session.with_untracked(|s| s.user().cloned());
            render_page(page, id, identity)
        }
    }
}

fn render_page(page: Page, id: Option<String>, identity: Option<Identity>) -> AnyView {
    match (page, identity) {
        (Page::Landing, _) => view! { <LandingPage/> }.into_any(),
        (Page::HowItWorks, _) => view! { <HowItWorksPage/> }.into_any(),
        (Page::Login, _) => view! { <LoginPage/> }.into_any(),
        (Page::Register, _) => view! { <RegisterPage/> }.into_any(),
        (Page::CampaignDetail, _) => view! { <CampaignDetailPage id=id.unwrap_or_default()/> }.into_any(),
        (Page::Dashboard, Some(identity)) => view! { <DashboardPage identity=identity/> }.into_any(),
        (Page::MyDashboard, Some(identity)) => view! { <MyDashboardPage identity=identity/> }.into_any(),
        (Page::CreateCampaign, Some(identity)) => view! { <CreateCampaignPage identity=identity/> }.into_any(),
        (Page::StartupPortal, Some(identity)) => view! { <StartupPortalPage identity=identity/> }.into_any(),
        (Page::BecomeStartup, Some(identity)) => view! { <BecomeStartupPage identity=identity/> }.into_any(),
        (Page::Settings, Some(identity)) => view! { <SettingsPage identity=identity/> }.into_any(),
        // The gate only renders protected pages with an identity.
        (_, None) => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
    }
}
