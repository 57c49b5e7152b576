//! Account settings: profile, wallet and account tabs.
//!
//! Profile data is read-only here; the API exposes no profile or wallet
//! update endpoints.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::Loadable;
use crate::net::api::ApiClient;
use crate::net::types::{Identity, Transaction, Wallet};
use crate::state::session::{SessionState, sign_out};
use crate::util::format::money;

const WALLET_FAILED: &str = "Failed to load wallet";
const TRANSACTIONS_FAILED: &str = "Failed to load transactions";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Wallet,
    Account,
}

impl SettingsTab {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Wallet, Self::Account];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Wallet => "Wallet",
            Self::Account => "Account",
        }
    }
}

pub fn account_type(identity: &Identity) -> &'static str {
    if identity.is_startup() { "Startup" } else { "Backer" }
}

/// Calendar date of an RFC 3339 join timestamp, or `N/A`.
pub fn member_since(date_joined: Option<&str>) -> String {
    date_joined
        .and_then(|raw| OffsetDateTime::parse(raw.trim(), &Rfc3339).ok())
        .map_or_else(
            || "N/A".to_owned(),
            |joined| {
                let date = joined.date();
                format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
            },
        )
}

#[component]
pub fn SettingsPage(identity: Identity) -> impl IntoView {
    let tab = RwSignal::new(SettingsTab::default());

    let tabs = SettingsTab::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class="settings-tab"
                    class:active=move || tab.get() == option
                    on:click=move |_| tab.set(option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    let profile = view! { <ProfileTab identity=identity.clone()/> };
    let wallet = view! { <WalletTab/> };
    let account = view! { <AccountTab identity=identity/> };

    view! {
        <div class="settings-page page-container">
            <div class="container">
                <div class="settings-header">
                    <h1>"Settings"</h1>
                    <p>"Manage your account and wallet"</p>
                </div>
                <div class="settings-tabs">{tabs}</div>
                <div class="settings-content">
                    <div class="settings-section" class:hidden=move || tab.get() != SettingsTab::Profile>
                        {profile}
                    </div>
                    <div class="settings-section" class:hidden=move || tab.get() != SettingsTab::Wallet>
                        {wallet}
                    </div>
                    <div class="settings-section" class:hidden=move || tab.get() != SettingsTab::Account>
                        {account}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileTab(identity: Identity) -> impl IntoView {
    let member = identity.member().clone();
    let account = member.account.clone();
    let startup = identity.startup().cloned().map(|startup| {
        view! {
            <div class="info-row">
                <span class="info-label">"Company"</span>
                <span class="info-value">{startup.company_name}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"Verified"</span>
                <span class="info-value">{if startup.is_verified { "Yes" } else { "Pending" }}</span>
            </div>
        }
    });

    view! {
        <h2>"Profile Information"</h2>
        <div class="profile-summary">
            <h3>{account.display_name()}</h3>
            <p>{format!("@{}", account.username)}</p>
        </div>
        <div class="info-list">
            <InfoRow label="Username" value=account.username.clone()/>
            <InfoRow label="First Name" value=account.first_name.clone()/>
            <InfoRow label="Last Name" value=account.last_name.clone()/>
            <InfoRow label="Email" value=account.email.clone()/>
            <InfoRow label="Phone" value=member.phone_number.clone().unwrap_or_default()/>
            <InfoRow label="Total Donated" value=money(member.total_donated)/>
            {startup}
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "-".to_owned() } else { value };
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}

#[component]
fn WalletTab() -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let wallet = RwSignal::new(Loadable::<Wallet>::Loading);
    let transactions = RwSignal::new(Loadable::<Vec<Transaction>>::Loading);

    let client = api.get_value();
    leptos::task::spawn_local(async move {
        let result = client.my_wallet().await;
        wallet.set(Loadable::from_result(result, WALLET_FAILED));
        let result = client.my_transactions().await;
        transactions.set(Loadable::from_result(result, TRANSACTIONS_FAILED));
    });

    let balance = move || match wallet.get() {
        Loadable::Loading => "Loading...".to_owned(),
        Loadable::Ready(loaded) => money(loaded.balance),
        Loadable::Failed(message) => message,
    };

    let history = move || match transactions.get() {
        Loadable::Loading => view! { <p class="loading">"Loading transactions..."</p> }.into_any(),
        Loadable::Failed(message) => view! { <p class="error-message">{message}</p> }.into_any(),
        Loadable::Ready(list) if list.is_empty() => view! { <p>"No transactions yet."</p> }.into_any(),
        Loadable::Ready(list) => view! {
            <ul class="tx-list">
                {list.into_iter().map(|tx| view! { <TransactionRow tx=tx/> }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <h2>"Wallet Information"</h2>
        <div class="wallet-balance">
            <span class="info-label">"Current Balance"</span>
            <span class="info-value">{balance}</span>
        </div>
        <h3>"Transactions"</h3>
        {history}
    }
}

#[component]
pub fn TransactionRow(tx: Transaction) -> impl IntoView {
    let status = (!tx.status.is_empty()).then(|| format!(" ({})", tx.status));
    view! {
        <li class="tx-item">
            <strong>{money(tx.amount)}</strong>
            " - "
            {tx.label().to_owned()}
            {status}
        </li>
    }
}

#[component]
fn AccountTab(identity: Identity) -> impl IntoView {
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

    view! {
        <h2>"Account Settings"</h2>
        <div class="account-info-grid">
            <div class="info-card">
                <h3>"Account Type"</h3>
                <p class="info-value">{account_type(&identity)}</p>
            </div>
            <div class="info-card">
                <h3>"Member Since"</h3>
                <p class="info-value">{member_since(identity.account().date_joined.as_deref())}</p>
            </div>
            <div class="info-card">
                <h3>"Account Status"</h3>
                <p class="info-value active-status">"Active"</p>
            </div>
        </div>
        <div class="account-actions">
            <a href="/dashboard" class="button-secondary">"Back to Dashboard"</a>
            <button class="button-primary logout-btn" on:click=on_logout disabled=move || busy.get()>
                {move || if busy.get() { "Logging out..." } else { "Logout" }}
            </button>
        </div>
    }
}
