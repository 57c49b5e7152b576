//! Campaign browser with All / Trending / Most Funded filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The default landing route after login. Each filter maps to a different
//! list endpoint; switching filters refetches and drops any response that
//! arrives for a filter no longer selected.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use super::Loadable;
use crate::components::campaign_card::CampaignCard;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Campaign, CampaignQuery, Identity};

const LOAD_FAILED: &str = "Failed to load campaigns. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignFilter {
    /// Active campaigns only.
    #[default]
    All,
    Trending,
    MostFunded,
}

impl CampaignFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Trending, Self::MostFunded];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Campaigns",
            Self::Trending => "Trending",
            Self::MostFunded => "Most Funded",
        }
    }

    async fn fetch(self, client: &ApiClient) -> Result<Vec<Campaign>, ApiError> {
        match self {
            Self::All => client.list_campaigns(&CampaignQuery::active()).await,
            Self::Trending => client.trending_campaigns().await,
            Self::MostFunded => client.popular_campaigns().await,
        }
    }
}

/// Banner heading for startup owners; backers get none.
pub fn startup_greeting(identity: &Identity) -> Option<String> {
    identity.startup().map(|startup| {
        let name = startup.company_name.trim();
        format!("Welcome back, {}!", if name.is_empty() { "Startup" } else { name })
    })
}

#[component]
pub fn DashboardPage(identity: Identity) -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let filter = RwSignal::new(CampaignFilter::default());
    let campaigns = RwSignal::new(Loadable::<Vec<Campaign>>::Loading);

    Effect::new(move |_| {
        let requested = filter.get();
        campaigns.set(Loadable::Loading);
        let client = api.get_value();
        leptos::task::spawn_local(async move {
            let result = requested.fetch(&client).await;
            // Unmounted (None) or superseded by another filter.
            if filter.try_get_untracked() != Some(requested) {
                return;
            }
            campaigns.set(Loadable::from_result(result, LOAD_FAILED));
        });
    });

    let banner = startup_greeting(&identity).map(|greeting| {
        view! {
            <div class="startup-banner">
                <h3>{greeting}</h3>
                <a href="/create-campaign" class="button-primary">"+ Create New Campaign"</a>
            </div>
        }
    });

    let filters = CampaignFilter::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class="filter-btn"
                    class:active=move || filter.get() == option
                    on:click=move |_| filter.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    let listing = move || match campaigns.get() {
        Loadable::Loading => view! { <div class="loading-message">"Loading campaigns..."</div> }.into_any(),
        Loadable::Failed(message) => view! {
            <div class="error-message">{message}</div>
            <div class="no-campaigns">
                <p>"No campaigns found"</p>
            </div>
        }
        .into_any(),
        Loadable::Ready(list) if list.is_empty() => view! {
            <div class="no-campaigns">
                <p>"No campaigns found"</p>
            </div>
        }
        .into_any(),
        Loadable::Ready(list) => view! {
            <div class="campaigns-grid">
                {list.into_iter().map(|campaign| view! { <CampaignCard campaign=campaign/> }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="dashboard page-container">
            <div class="container">
                <div class="dashboard-header">
                    <h1>"Discover Campaigns"</h1>
                    <p>"Support innovative startups and get early access to amazing products"</p>
                </div>
                {banner}
                <div class="filter-section">{filters}</div>
                {listing}
            </div>
        </div>
    }
}
