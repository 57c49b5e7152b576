//! Campaign detail page with the donation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route: anyone can read a campaign, only signed-in users can
//! donate. The page checks the session itself for the donate action and
//! shows "Login to Donate" with the inputs disabled for anonymous visitors.
//!
//! DESIGN
//! ======
//! Donation form signals live at page level so refreshing the campaign after
//! a donation (which re-renders the body) keeps the success message and the
//! in-flight flag.

#[cfg(test)]
#[path = "campaign_detail_test.rs"]
mod campaign_detail_test;

use leptos::prelude::*;

use super::Loadable;
use crate::components::progress_bar::ProgressBar;
use crate::net::api::ApiClient;
use crate::net::types::{Campaign, DonationReceipt, DonationRequest};
use crate::state::session::SessionState;
use crate::util::format::{capitalize, money};
use crate::util::funding::{days_left, now_ms};

pub const INVALID_AMOUNT: &str = "Please enter a valid donation amount.";
pub const QUICK_AMOUNTS: [u32; 4] = [50, 100, 250, 500];
const LOAD_FAILED: &str = "Failed to load campaign details";
const NOT_FOUND: &str = "Campaign not found";
const DONATION_FAILED: &str = "Donation failed. Please try again.";
#[cfg(feature = "csr")]
const SUCCESS_VISIBLE_MS: u32 = 3_000;

/// Route segment to campaign id. Only positive integers name a campaign.
pub fn parse_campaign_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Amount field to a positive finite number.
pub fn parse_donation_amount(raw: &str) -> Result<f64, &'static str> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or(INVALID_AMOUNT)
}

pub fn donation_success(receipt: &DonationReceipt) -> String {
    format!("✓ {} Progress: {}%", receipt.message, receipt.campaign_progress)
}

/// "Days Left" cell: a day count, or `N/A` without a usable end date.
pub fn days_left_label(end_date: Option<&str>, now_ms: i64) -> String {
    end_date
        .and_then(|date| days_left(date, now_ms))
        .map_or_else(|| "N/A".to_owned(), |days| days.to_string())
}

pub fn donate_button_label(authenticated: bool, donating: bool) -> &'static str {
    match (authenticated, donating) {
        (false, _) => "Login to Donate",
        (true, true) => "Processing...",
        (true, false) => "Donate Now",
    }
}

#[derive(Clone, Copy)]
struct DonationForm {
    amount: RwSignal<String>,
    donating: RwSignal<bool>,
    error: RwSignal<String>,
    success: RwSignal<Option<String>>,
}

impl DonationForm {
    fn new() -> Self {
        Self {
            amount: RwSignal::new(String::new()),
            donating: RwSignal::new(false),
            error: RwSignal::new(String::new()),
            success: RwSignal::new(None),
        }
    }
}

#[component]
pub fn CampaignDetailPage(id: String) -> impl IntoView {
    let Some(campaign_id) = parse_campaign_id(&id) else {
        return view! { <div class="error-message page-container">{NOT_FOUND}</div> }.into_any();
    };
    let api = expect_context::<StoredValue<ApiClient>>();
    let campaign = RwSignal::new(Loadable::<Campaign>::Loading);
    let form = DonationForm::new();

    let refresh = Callback::new(move |()| {
        let client = api.get_value();
        leptos::task::spawn_local(async move {
            let next = match client.campaign_detail(campaign_id).await {
                Ok(loaded) => Loadable::Ready(loaded),
                Err(e) if e.is_not_found() => Loadable::Failed(NOT_FOUND.to_owned()),
                Err(e) => {
                    log::warn!("campaign {campaign_id} failed to load: {e}");
                    Loadable::Failed(LOAD_FAILED.to_owned())
                }
            };
            campaign.set(next);
        });
    });
    refresh.run(());

    view! {
        <div class="campaign-detail page-container">
            <div class="container">
                <a href="/dashboard" class="back-btn">"← Back to Campaigns"</a>
                {move || match campaign.get() {
                    Loadable::Loading => view! { <div class="loading">"Loading campaign..."</div> }.into_any(),
                    Loadable::Failed(message) => view! { <div class="error-message">{message}</div> }.into_any(),
                    Loadable::Ready(loaded) => view! {
                        <div class="campaign-content">
                            <CampaignInfo campaign=loaded.clone()/>
                            <div class="campaign-sidebar">
                                <FundingCard campaign=loaded.clone()/>
                                <DonationCard campaign=loaded form=form refresh=refresh/>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn CampaignInfo(campaign: Campaign) -> impl IntoView {
    let image = match campaign.image.clone() {
        Some(src) => view! { <img src=src alt=campaign.product_name.clone()/> }.into_any(),
        None => view! { <div class="image-placeholder-large">{campaign.product_type.icon()}</div> }.into_any(),
    };
    let startup = campaign.startup.clone().map(|startup| {
        let website = startup.website.clone().map(|url| {
            view! {
                <a href=url target="_blank" rel="noopener noreferrer">"Visit Website →"</a>
            }
        });
        view! {
            <div class="startup-info">
                <h3>{startup.company_name.clone()}</h3>
                <p>{startup.description.clone()}</p>
                {website}
            </div>
            <div class="meta-item">
                <strong>"Category: "</strong>
                {capitalize(&startup.category)}
            </div>
        }
    });
    let fallback_company = campaign
        .startup
        .is_none()
        .then(|| campaign.startup_name.clone())
        .flatten()
        .map(|name| view! { <div class="startup-info"><h3>{name}</h3></div> });
    let delivery = campaign.estimated_delivery.clone().map(|date| {
        view! {
            <div class="meta-item">
                <strong>"Expected Delivery: "</strong>
                {date}
            </div>
        }
    });
    let details = campaign.detailed_description.clone().filter(|text| !text.trim().is_empty());

    view! {
        <div class="campaign-main">
            <div class="campaign-image-large">{image}</div>
            <div class="campaign-info">
                <h1>{campaign.product_name.clone()}</h1>
                {startup}
                {fallback_company}
                <div class="campaign-meta">
                    <div class="meta-item">
                        <strong>"Type: "</strong>
                        {campaign.product_type.label()}
                    </div>
                    {delivery}
                </div>
                <div class="description-section">
                    <h2>"About This Campaign"</h2>
                    <p>{campaign.description.clone()}</p>
                    {details.map(|text| view! { <p>{text}</p> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FundingCard(campaign: Campaign) -> impl IntoView {
    let progress = campaign.progress();
    let days = days_left_label(campaign.end_date.as_deref(), now_ms());

    view! {
        <div class="card funding-card">
            <div class="card-body">
                <div class="funding-goal">
                    <div class="amount-large">{money(campaign.current_amount)}</div>
                    <div class="goal-text">"raised of " {money(campaign.goal_amount)}</div>
                </div>
                <ProgressBar percent=progress/>
                <div class="funding-stats-detail">
                    <div class="stat">
                        <div class="stat-value">{format!("{progress:.1}%")}</div>
                        <div class="stat-label">"Funded"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value">{campaign.backer_count.to_string()}</div>
                        <div class="stat-label">"Backers"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value">{days}</div>
                        <div class="stat-label">"Days Left"</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DonationCard(campaign: Campaign, form: DonationForm, refresh: Callback<()>) -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let authenticated = move || session.with(SessionState::is_authenticated);
    let campaign_id = campaign.id;
    let active = campaign.status.is_active();

    let on_donate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.donating.get_untracked() || !session.with_untracked(SessionState::is_authenticated) {
            return;
        }
        let amount = match parse_donation_amount(&form.amount.get_untracked()) {
            Ok(amount) => amount,
            Err(message) => {
                form.error.set(message.to_owned());
                return;
            }
        };
        form.donating.set(true);
        form.error.set(String::new());
        form.success.set(None);

        let client = api.get_value();
        leptos::task::spawn_local(async move {
            let result = client.donate(&DonationRequest { campaign_id, amount }).await;
            form.donating.set(false);
            match result {
                Ok(receipt) => {
                    log::info!("donated {amount} to campaign {campaign_id}");
                    form.success.set(Some(donation_success(&receipt)));
                    form.amount.set(String::new());
                    // Page may be gone by now.
                    refresh.try_run(());
                    #[cfg(feature = "csr")]
                    {
                        gloo_timers::future::TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
                        form.success.set(None);
                    }
                }
                Err(e) => form.error.set(e.error_field(DONATION_FAILED)),
            }
        });
    };

    let quick_buttons = QUICK_AMOUNTS
        .into_iter()
        .map(|preset| {
            view! {
                <button
                    type="button"
                    class="quick-btn"
                    disabled=move || !authenticated()
                    on:click=move |_| form.amount.set(preset.to_string())
                >
                    {format!("${preset}")}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="card donation-card">
            <div class="card-body">
                <h3>"Support This Campaign"</h3>
                <p class="early-access">"Early access price: " {money(campaign.early_access_price)}</p>
                <Show when=move || !form.error.get().is_empty()>
                    <div class="error-message">{move || form.error.get()}</div>
                </Show>
                <Show when=move || form.success.get().is_some()>
                    <div class="success-message">{move || form.success.get().unwrap_or_default()}</div>
                </Show>
                <form class="donation-form" on:submit=on_donate>
                    <div class="form-group">
                        <label for="donation">"Donation Amount ($)"</label>
                        <input
                            id="donation"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="Enter amount"
                            prop:value=move || form.amount.get()
                            on:input=move |ev| form.amount.set(event_target_value(&ev))
                            disabled=move || !authenticated()
                        />
                    </div>
                    <button
                        type="submit"
                        class="button-primary donation-btn"
                        disabled=move || form.donating.get() || !active || !authenticated()
                    >
                        {move || donate_button_label(authenticated(), form.donating.get())}
                    </button>
                </form>
                <Show when=move || !authenticated()>
                    <p class="login-prompt">
                        <a href="/login">"Login"</a>
                        " to make a donation"
                    </p>
                </Show>
                <div class="quick-amounts">{quick_buttons}</div>
                <div class="campaign-status">
                    <span class=format!("status-badge {}", campaign.status.as_str())>
                        {campaign.status.as_str().to_uppercase()}
                    </span>
                </div>
            </div>
        </div>
    }
}
