//! Personal dashboard.
//!
//! Startup owners see their campaigns with donation and view charts; backers
//! see the campaigns they have backed and their recent transactions.
//!
//! ERROR HANDLING
//! ==============
//! Each fetch degrades to an empty list on its own. The page only shows an
//! error when nothing at all could be loaded.

#[cfg(test)]
#[path = "my_dashboard_test.rs"]
mod my_dashboard_test;

use leptos::prelude::*;

use super::settings::TransactionRow;
use crate::components::line_chart::LineChart;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Campaign, Identity, StartupProfile, Transaction};
use crate::util::chart::campaign_series;
use crate::util::format::money;

const LOAD_FAILED: &str = "Failed to load dashboard data";

/// Everything the page renders once loading has finished.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardData {
    Startup { campaigns: Vec<Campaign>, startup: Option<StartupProfile> },
    Backer { transactions: Vec<Transaction> },
}

/// One campaign a backer has supported, de-duplicated across transactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackedCampaign {
    pub campaign_id: Option<i64>,
    pub name: String,
}

/// Distinct campaigns in transaction order. Transactions without a campaign
/// id are grouped by label.
pub fn backed_campaigns(transactions: &[Transaction]) -> Vec<BackedCampaign> {
    let mut backed: Vec<BackedCampaign> = Vec::new();
    for tx in transactions {
        let entry = BackedCampaign { campaign_id: tx.campaign, name: tx.label().to_owned() };
        let seen = backed.iter().any(|existing| match (existing.campaign_id, entry.campaign_id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => existing.name == entry.name,
            _ => false,
        });
        if !seen {
            backed.push(entry);
        }
    }
    backed
}

/// Combine the startup owner's two fetches. Fails only when both failed.
pub fn merge_startup(
    campaigns: Result<Vec<Campaign>, ApiError>,
    startup: Result<Option<StartupProfile>, ApiError>,
) -> Result<DashboardData, ApiError> {
    match (campaigns, startup) {
        (Err(e), Err(_)) => Err(e),
        (campaigns, startup) => Ok(DashboardData::Startup {
            campaigns: campaigns.unwrap_or_default(),
            startup: startup.ok().flatten(),
        }),
    }
}

async fn load(client: &ApiClient, is_startup: bool) -> Result<DashboardData, ApiError> {
    if is_startup {
        let (campaigns, startup) = join(client.my_campaigns(), client.my_startup()).await;
        merge_startup(campaigns, startup)
    } else {
        let transactions = client.my_transactions().await?;
        Ok(DashboardData::Backer { transactions })
    }
}

#[cfg(feature = "csr")]
async fn join<A, B>(a: A, b: B) -> (A::Output, B::Output)
where
    A: Future,
    B: Future,
{
    futures::future::join(a, b).await
}

#[cfg(not(feature = "csr"))]
async fn join<A, B>(a: A, b: B) -> (A::Output, B::Output)
where
    A: Future,
    B: Future,
{
    (a.await, b.await)
}

#[component]
pub fn MyDashboardPage(identity: Identity) -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let data = RwSignal::new(None::<Result<DashboardData, String>>);
    let is_startup = identity.is_startup();

    let client = api.get_value();
    leptos::task::spawn_local(async move {
        let result = load(&client, is_startup).await.map_err(|e| {
            log::warn!("{LOAD_FAILED}: {e}");
            LOAD_FAILED.to_owned()
        });
        data.set(Some(result));
    });

    let body = move || match data.get() {
        None => view! { <div class="loading">"Loading dashboard..."</div> }.into_any(),
        Some(Err(message)) => view! {
            <div class="error-message">{message}</div>
        }
        .into_any(),
        Some(Ok(DashboardData::Startup { campaigns, startup })) => {
            view! { <StartupSection campaigns=campaigns startup=startup/> }.into_any()
        }
        Some(Ok(DashboardData::Backer { transactions })) => view! { <BackerSection transactions=transactions/> }.into_any(),
    };

    view! {
        <div class="my-dashboard page-container container">
            <h1>"My Dashboard"</h1>
            {body}
        </div>
    }
}

#[component]
fn StartupSection(campaigns: Vec<Campaign>, startup: Option<StartupProfile>) -> impl IntoView {
    let series = campaign_series(&campaigns);
    let raised = startup.map(|profile| {
        view! { <p class="startup-total">{format!("{} raised so far by {}", money(profile.total_raised), profile.company_name)}</p> }
    });
    let cards = if campaigns.is_empty() {
        view! { <p>"No campaigns yet."</p> }.into_any()
    } else {
        campaigns
            .into_iter()
            .map(|campaign| {
                view! {
                    <a href=format!("/campaign/{}", campaign.id) class="dashboard-card">
                        <h3>{campaign.product_name}</h3>
                        <p>{format!("Donations: {}", money(campaign.current_amount))}</p>
                        <p>{format!("Views: {}", campaign.view_count)}</p>
                    </a>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        {raised}
        <h2>"My Campaigns"</h2>
        <div class="cards-row">{cards}</div>
        <div class="chart-panel">
            <div class="chart-block">
                <h4>"Donations (per campaign)"</h4>
                <LineChart values=series.donations/>
            </div>
            <div class="chart-block">
                <h4>"Views (per campaign)"</h4>
                <LineChart values=series.views/>
            </div>
        </div>
    }
}

#[component]
fn BackerSection(transactions: Vec<Transaction>) -> impl IntoView {
    let backed = backed_campaigns(&transactions);
    let cards = if backed.is_empty() {
        view! { <p>"You haven't invested in any campaigns yet."</p> }.into_any()
    } else {
        backed
            .into_iter()
            .map(|entry| match entry.campaign_id {
                Some(id) => view! {
                    <a href=format!("/campaign/{id}") class="dashboard-card">
                        <h3>{entry.name}</h3>
                    </a>
                }
                .into_any(),
                None => view! {
                    <div class="dashboard-card">
                        <h3>{entry.name}</h3>
                    </div>
                }
                .into_any(),
            })
            .collect_view()
            .into_any()
    };

    view! {
        <h2>"Your Investments"</h2>
        <div class="cards-row">{cards}</div>
        <h3>"Recent Transactions"</h3>
        <ul class="tx-list">
            {transactions.into_iter().map(|tx| view! { <TransactionRow tx=tx/> }).collect_view()}
        </ul>
    }
}
