//! A startup owner's own campaigns.

#[cfg(test)]
#[path = "startup_portal_test.rs"]
mod startup_portal_test;

use leptos::prelude::*;

use super::Loadable;
use crate::components::progress_bar::ProgressBar;
use crate::net::api::ApiClient;
use crate::net::types::{Campaign, Identity};
use crate::util::format::{capitalize, money};

const LOAD_FAILED: &str = "Failed to load your campaigns.";

pub fn portal_greeting(identity: &Identity) -> String {
    match identity.startup().map(|s| s.company_name.trim()).filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome back.".to_owned(),
    }
}

#[component]
pub fn StartupPortalPage(identity: Identity) -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::Loading);

    let client = api.get_value();
    leptos::task::spawn_local(async move {
        let result = client.my_campaigns().await;
        campaigns.set(Loadable::from_result(result, LOAD_FAILED));
    });

    let listing = move || match campaigns.get() {
        Loadable::Loading => view! { <div class="loading-message">"Loading your campaigns..."</div> }.into_any(),
        Loadable::Failed(message) => view! { <div class="error-message">{message}</div> }.into_any(),
        Loadable::Ready(list) if list.is_empty() => view! {
            <div class="no-campaigns">
                <p>"You haven't uploaded any campaign yet."</p>
                <a href="/create-campaign" class="button-primary">"Create your first campaign"</a>
            </div>
        }
        .into_any(),
        Loadable::Ready(list) => view! {
            <div class="startup-campaign-grid">
                {list.into_iter().map(|campaign| view! { <PortalCard campaign=campaign/> }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="startup-portal page-container">
            <div class="container">
                <div class="startup-portal-header">
                    <h1>"Startup Portal"</h1>
                    <p>{portal_greeting(&identity)} " Create campaigns and raise funds from backers."</p>
                </div>
                <div class="startup-portal-actions">
                    <a href="/create-campaign" class="button-primary">"+ Upload New Campaign"</a>
                    <a href="/dashboard" class="button-secondary">"View Public Campaign Feed"</a>
                </div>
                <div class="startup-campaigns-section">
                    <h2>"My Campaigns"</h2>
                    {listing}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PortalCard(campaign: Campaign) -> impl IntoView {
    let status = campaign.status.as_str();

    view! {
        <a href=format!("/campaign/{}", campaign.id) class="startup-campaign-card">
            <div class="startup-campaign-title">{campaign.product_name.clone()}</div>
            <div class="startup-campaign-meta">{capitalize(campaign.product_type.as_str())}</div>
            <div class="startup-campaign-funding">
                <span>{money(campaign.current_amount)}</span>
                <span>"of " {money(campaign.goal_amount)}</span>
            </div>
            <ProgressBar percent=campaign.progress()/>
            <div class="startup-campaign-status">
                <span class=format!("status-badge {status}")>{status}</span>
            </div>
        </a>
    }
}
