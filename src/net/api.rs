//! REST client for the StartEase API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always sent with
//! credentials so the session cookie travels with them, plus the Django
//! `X-CSRFToken` header on unsafe methods.
//! Native builds (tests, tooling): stubs returning [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. Non-2xx responses carry the
//! decoded JSON body so pages can pull field messages out of it; nothing is
//! retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Campaign, CampaignDraft, CampaignFields, CampaignQuery, Credentials, DonationReceipt, DonationRequest, Identity,
    Listing, RegisteredUser, Registration, StartupApplication, StartupProfile, StartupStats, Transaction, Wallet,
};
use crate::config::ApiConfig;

const REGISTER_PATH: &str = "/users/register/";
const LOGIN_PATH: &str = "/users/login/";
const LOGOUT_PATH: &str = "/users/logout/";
const CURRENT_USER_PATH: &str = "/users/me/";
const BECOME_STARTUP_PATH: &str = "/users/startup/register/";
const STARTUPS_PATH: &str = "/users/startups/";
const STARTUP_STATS_PATH: &str = "/users/startups/stats/";
const MY_STARTUP_PATH: &str = "/users/startups/my_startup/";
const CAMPAIGNS_PATH: &str = "/campaigns/";
const TRENDING_PATH: &str = "/campaigns/trending/";
const POPULAR_PATH: &str = "/campaigns/popular/";
const MY_CAMPAIGNS_PATH: &str = "/campaigns/my_campaigns/";
const MY_WALLET_PATH: &str = "/wallet/wallets/my_wallet/";
const MY_TRANSACTIONS_PATH: &str = "/wallet/transactions/my_transactions/";
const DONATE_PATH: &str = "/wallet/donate/";

#[cfg(any(test, feature = "csr"))]
const CSRF_COOKIE: &str = "csrftoken";

fn campaign_path(id: i64) -> String {
    format!("/campaigns/{id}/")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[cfg(any(test, feature = "csr"))]
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }

    /// Whether Django's CSRF middleware checks this method.
    #[cfg(any(test, feature = "csr"))]
    fn needs_csrf(self) -> bool {
        !matches!(self, Self::Get)
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
enum Body {
    Empty,
    Json(serde_json::Value),
    #[cfg(feature = "csr")]
    Form(web_sys::FormData),
}

impl Body {
    fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    user: Identity,
}

/// A user-selected image attached to a campaign upload.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub name: String,
    #[cfg(feature = "csr")]
    file: web_sys::File,
}

#[cfg(feature = "csr")]
impl ImageFile {
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }
}

/// Handle to the remote API. Cheap to clone; provided through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // =============================================================
    // Auth
    // =============================================================

    /// Create an account via `POST /users/register/`.
    ///
    /// # Errors
    ///
    /// Returns the server's validation errors as [`ApiError::Status`].
    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.send(Method::Post, REGISTER_PATH, &[], Body::json(registration)?).await
    }

    /// Start a server session via `POST /users/login/` and return the identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with `401` on bad credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let body: LoginResponse = self.send(Method::Post, LOGIN_PATH, &[], Body::json(credentials)?).await?;
        Ok(body.user)
    }

    /// End the server session via `POST /users/logout/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(Method::Post, LOGOUT_PATH, Body::Empty).await
    }

    /// Fetch the identity behind the session cookie via `GET /users/me/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with `401`/`403` for anonymous visitors.
    pub async fn current_identity(&self) -> Result<Identity, ApiError> {
        self.send(Method::Get, CURRENT_USER_PATH, &[], Body::Empty).await
    }

    // =============================================================
    // Users / startups
    // =============================================================

    /// Register the current user as a startup.
    ///
    /// # Errors
    ///
    /// Returns the server's validation errors as [`ApiError::Status`].
    pub async fn become_startup(&self, application: &StartupApplication) -> Result<StartupProfile, ApiError> {
        self.send(Method::Post, BECOME_STARTUP_PATH, &[], Body::json(application)?).await
    }

    /// List verified startups.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn list_startups(&self) -> Result<Vec<StartupProfile>, ApiError> {
        let listing: Listing<StartupProfile> = self.send(Method::Get, STARTUPS_PATH, &[], Body::Empty).await?;
        Ok(listing.into_items())
    }

    /// Platform-wide startup totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn startup_stats(&self) -> Result<StartupStats, ApiError> {
        self.send(Method::Get, STARTUP_STATS_PATH, &[], Body::Empty).await
    }

    /// The current user's startup, or `None` when they have not registered one.
    ///
    /// # Errors
    ///
    /// Returns an error for failures other than `404`.
    pub async fn my_startup(&self) -> Result<Option<StartupProfile>, ApiError> {
        match self.send(Method::Get, MY_STARTUP_PATH, &[], Body::Empty).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    // =============================================================
    // Campaigns
    // =============================================================

    /// List campaigns matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn list_campaigns(&self, query: &CampaignQuery) -> Result<Vec<Campaign>, ApiError> {
        let listing: Listing<Campaign> = self.send(Method::Get, CAMPAIGNS_PATH, &query.pairs(), Body::Empty).await?;
        Ok(listing.into_items())
    }

    /// Fetch one campaign with its startup details.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with `404` for unknown ids.
    pub async fn campaign_detail(&self, id: i64) -> Result<Campaign, ApiError> {
        self.send(Method::Get, &campaign_path(id), &[], Body::Empty).await
    }

    /// Create a campaign as multipart form data, with an optional image.
    ///
    /// # Errors
    ///
    /// Returns the server's validation errors as [`ApiError::Status`].
    pub async fn create_campaign(&self, draft: &CampaignDraft, image: Option<&ImageFile>) -> Result<Campaign, ApiError> {
        #[cfg(feature = "csr")]
        {
            let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
            for (key, value) in draft.form_fields() {
                form.append_with_str(key, &value)
                    .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            }
            if let Some(image) = image {
                form.append_with_blob_and_filename("image", &image.file, &image.name)
                    .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            }
            self.send(Method::Post, CAMPAIGNS_PATH, &[], Body::Form(form)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (draft, image);
            Err(ApiError::Unavailable)
        }
    }

    /// Replace a campaign's editable fields.
    ///
    /// # Errors
    ///
    /// Returns the server's validation errors as [`ApiError::Status`].
    pub async fn update_campaign(&self, id: i64, draft: &CampaignDraft) -> Result<CampaignFields, ApiError> {
        self.send(Method::Put, &campaign_path(id), &[], Body::json(draft)?).await
    }

    /// Campaigns the server ranks as trending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn trending_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let listing: Listing<Campaign> = self.send(Method::Get, TRENDING_PATH, &[], Body::Empty).await?;
        Ok(listing.into_items())
    }

    /// Campaigns ordered by amount raised.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn popular_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let listing: Listing<Campaign> = self.send(Method::Get, POPULAR_PATH, &[], Body::Empty).await?;
        Ok(listing.into_items())
    }

    /// Campaigns owned by the current startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn my_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let listing: Listing<Campaign> = self.send(Method::Get, MY_CAMPAIGNS_PATH, &[], Body::Empty).await?;
        Ok(listing.into_items())
    }

    // =============================================================
    // Wallet
    // =============================================================

    /// The current user's wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn my_wallet(&self) -> Result<Wallet, ApiError> {
        self.send(Method::Get, MY_WALLET_PATH, &[], Body::Empty).await
    }

    /// The current user's transactions, newest first as the server orders them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn my_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let listing: Listing<Transaction> = self.send(Method::Get, MY_TRANSACTIONS_PATH, &[], Body::Empty).await?;
        Ok(listing.into_items())
    }

    /// Donate to a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with an `error` field for rejected donations.
    pub async fn donate(&self, donation: &DonationRequest) -> Result<DonationReceipt, ApiError> {
        self.send(Method::Post, DONATE_PATH, &[], Body::json(donation)?).await
    }

    // =============================================================
    // Transport
    // =============================================================

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Body,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.dispatch(method, path, query, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, query, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn send_unit(&self, method: Method, path: &str, body: Body) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            self.dispatch(method, path, &[], body).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Body,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.config.endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        let mut builder = builder
            .credentials(web_sys::RequestCredentials::Include)
            .query(query.iter().map(|(key, value)| (*key, value.as_str())));
        if method.needs_csrf()
            && let Some(token) = browser_csrf_token()
        {
            builder = builder.header("X-CSRFToken", &token);
        }
        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            log::warn!("{} {path} unreachable: {e}", method.as_str());
            ApiError::Network(e.to_string())
        })?;
        if resp.ok() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = resp.json::<serde_json::Value>().await.unwrap_or(serde_json::Value::Null);
        if status == 401 || status == 403 {
            log::debug!("{} {path} rejected: {status}", method.as_str());
        } else {
            log::warn!("{} {path} failed: {status} {body}", method.as_str());
        }
        Err(ApiError::Status { status, body })
    }
}

#[cfg(feature = "csr")]
fn browser_csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast as _;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    csrf_token_from_cookies(&cookies)
}

/// Find Django's CSRF token in a `document.cookie` string.
#[cfg(any(test, feature = "csr"))]
fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}
