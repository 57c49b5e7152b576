//! Wire DTOs for the StartEase REST API.
//!
//! DESIGN
//! ======
//! The API serialises decimals as JSON strings (`"1000.00"`) and some list
//! endpoints wrap results in `{ "results": [...] }`. These types absorb both
//! shapes at the boundary so pages only ever see plain `f64`s and `Vec`s.
//!
//! The current identity is decoded straight into [`Identity`], a tagged
//! union, so the backer/startup distinction is made once here instead of at
//! every read site.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Identity
// =============================================================

/// Login account fields, nested under `user` in identity payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Server-side user id, if included.
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// ISO 8601 join timestamp, if included.
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl Account {
    /// Full name when known, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// Profile data common to every registered user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Member {
    pub account: Account,
    pub phone_number: Option<String>,
    pub total_donated: f64,
}

/// A startup's company profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartupProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub company_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Stored as `""` by the server when not given; decoded as `None`.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub website: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_raised: f64,
}

/// The authenticated user as returned by `/users/me/` and `/users/login/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "IdentityPayload")]
pub enum Identity {
    /// A plain user who can back campaigns.
    Backer { member: Member },
    /// A user who also owns a startup and can run campaigns.
    StartupOwner { member: Member, startup: StartupProfile },
}

impl Identity {
    pub fn member(&self) -> &Member {
        match self {
            Self::Backer { member } | Self::StartupOwner { member, .. } => member,
        }
    }

    pub fn account(&self) -> &Account {
        &self.member().account
    }

    pub fn username(&self) -> &str {
        &self.account().username
    }

    pub fn startup(&self) -> Option<&StartupProfile> {
        match self {
            Self::Backer { .. } => None,
            Self::StartupOwner { startup, .. } => Some(startup),
        }
    }

    pub fn is_startup(&self) -> bool {
        self.startup().is_some()
    }
}

/// Raw identity shape before the backer/startup decision.
///
/// Older endpoints expose the profile as `startup` instead of
/// `startup_profile`; both are read and anything that is not a profile
/// object (an id, `null`) is ignored.
#[derive(Deserialize)]
struct IdentityPayload {
    user: Account,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    total_donated: f64,
    #[serde(default)]
    startup_profile: Option<serde_json::Value>,
    #[serde(default)]
    startup: Option<serde_json::Value>,
}

impl From<IdentityPayload> for Identity {
    fn from(raw: IdentityPayload) -> Self {
        let member = Member { account: raw.user, phone_number: raw.phone_number, total_donated: raw.total_donated };
        let startup = raw
            .startup_profile
            .into_iter()
            .chain(raw.startup)
            .find_map(|value| serde_json::from_value::<StartupProfile>(value).ok());
        match startup {
            Some(startup) => Self::StartupOwner { member, startup },
            None => Self::Backer { member },
        }
    }
}

/// Response of `POST /users/register/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Aggregate platform numbers from `/users/startups/stats/`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct StartupStats {
    #[serde(deserialize_with = "deserialize_count")]
    pub total_startups: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_funded: f64,
}

// =============================================================
// Campaigns
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Physical,
    Digital,
    Service,
}

impl ProductType {
    pub const ALL: [Self; 3] = [Self::Physical, Self::Digital, Self::Service];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
            Self::Service => "service",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Physical => "Physical Product",
            Self::Digital => "Digital Product",
            Self::Service => "Service",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Physical => "📦",
            Self::Digital => "💻",
            Self::Service => "🎯",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
    Paused,
    #[serde(other)]
    Other,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Paused => "paused",
            Self::Other => "other",
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// A fundraising campaign, from either the list or the detail serializer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub product_name: String,
    pub product_type: ProductType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub goal_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub current_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub early_access_price: f64,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub backer_count: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub view_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub startup_name: Option<String>,
    /// Present on the detail serializer only.
    #[serde(default)]
    pub startup: Option<StartupProfile>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub progress_percentage: Option<f64>,
}

impl Campaign {
    /// Server-computed progress, or derived locally when the field is absent.
    pub fn progress(&self) -> f64 {
        self.progress_percentage
            .unwrap_or_else(|| crate::util::funding::progress_percent(self.current_amount, self.goal_amount))
    }

    /// Company name from whichever serializer produced this record.
    pub fn company_name(&self) -> Option<&str> {
        self.startup
            .as_ref()
            .map(|s| s.company_name.as_str())
            .or(self.startup_name.as_deref())
    }
}

/// Response of `PUT /campaigns/{id}/`.
///
/// The update serializer echoes the editable fields only; there is no id,
/// funding total or status in the body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CampaignFields {
    pub product_name: String,
    pub product_type: ProductType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub goal_amount: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub early_access_price: f64,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// List endpoints return either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged { results } => results,
            Self::Plain(items) => items,
        }
    }
}

/// Filters for `GET /campaigns/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignQuery {
    pub status: Option<CampaignStatus>,
}

impl CampaignQuery {
    pub fn active() -> Self {
        Self { status: Some(CampaignStatus::Active) }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        self.status
            .map(|status| vec![("status", status.as_str().to_owned())])
            .unwrap_or_default()
    }
}

/// Editable campaign fields, sent as multipart on create and JSON on update.
///
/// Amounts stay as the user typed them; the server validates decimals.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampaignDraft {
    pub product_name: String,
    pub product_type: ProductType,
    pub description: String,
    pub detailed_description: String,
    pub goal_amount: String,
    pub early_access_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl CampaignDraft {
    /// Text parts of the multipart body, in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("product_name", self.product_name.clone()),
            ("product_type", self.product_type.as_str().to_owned()),
            ("description", self.description.clone()),
            ("detailed_description", self.detailed_description.clone()),
            ("goal_amount", self.goal_amount.clone()),
            ("early_access_price", self.early_access_price.clone()),
        ];
        if let Some(date) = &self.estimated_delivery {
            fields.push(("estimated_delivery", date.clone()));
        }
        if let Some(date) = &self.end_date {
            fields.push(("end_date", date.clone()));
        }
        fields
    }
}

// =============================================================
// Requests
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub citizenship_number: String,
}

impl Registration {
    pub fn credentials(&self) -> Credentials {
        Credentials { username: self.username.clone(), password: self.password.clone() }
    }
}

/// Body of `POST /users/startup/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StartupApplication {
    pub company_name: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DonationRequest {
    pub campaign_id: i64,
    pub amount: f64,
}

// =============================================================
// Wallet
// =============================================================

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Wallet {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub balance: f64,
    #[serde(default)]
    pub user_username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Campaign id, if the transaction targeted one.
    #[serde(default)]
    pub campaign: Option<i64>,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub transaction_id: String,
}

impl Transaction {
    /// Human label: campaign name, then description, then a generic word.
    pub fn label(&self) -> &str {
        self.campaign_name
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("Transaction")
    }
}

/// Response of `POST /wallet/donate/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DonationReceipt {
    pub message: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub campaign_progress: f64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub campaign: Option<String>,
}

// =============================================================
// Number decoding
// =============================================================

fn amount_from_value(value: &serde_json::Value) -> Option<f64> {
    let amount = match value {
        serde_json::Value::Number(number) => number.as_f64()?,
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    amount_from_value(&value).ok_or_else(|| D::Error::custom(format!("expected decimal amount, got {value}")))
}

fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    amount_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected decimal amount, got {value}")))
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|text| !text.trim().is_empty()))
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
