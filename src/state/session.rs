//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<SessionState>` is provided at the app root. The route
//! outlet reads it on every navigation; only [`SessionState::initialize`],
//! [`SessionState::login`] and [`SessionState::logout`] change it.
//!
//! DESIGN
//! ======
//! The session is one of three phases. "Authenticated implies an identity"
//! and "loading implies anonymous" hold by construction because the identity
//! only exists inside the `Authenticated` phase.
//!
//! ```text
//! Resolving --check ok--> Authenticated
//! Resolving --check err-> Anonymous
//! Anonymous --login-----> Authenticated
//! Authenticated --logout-> Anonymous   (whatever the server says)
//! ```
//!
//! Nothing returns to `Resolving`; the identity check runs once per page load.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Identity;

/// The two API calls the session depends on.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn current_identity(&self) -> Result<Identity, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

impl AuthBackend for ApiClient {
    async fn current_identity(&self) -> Result<Identity, ApiError> {
        ApiClient::current_identity(self).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthPhase {
    /// Page-load identity check still in flight.
    #[default]
    Resolving,
    Anonymous,
    Authenticated(Identity),
}

/// Client-held belief about who is using the app.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    phase: AuthPhase,
}

impl SessionState {
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated(_))
    }

    pub fn user(&self) -> Option<&Identity> {
        match &self.phase {
            AuthPhase::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Run the page-load identity check.
    ///
    /// Any failure (401, network, bad body) means "anonymous" and is not
    /// reported to the user. Loading is cleared on every path. Once the
    /// session has left `Resolving` this is a no-op and makes no request.
    pub async fn initialize<A: AuthBackend>(&mut self, api: &A) {
        if !self.loading() {
            log::debug!("session already resolved; skipping identity check");
            return;
        }
        let identity = match api.current_identity().await {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::debug!("no active session: {e}");
                None
            }
        };
        self.resolve(identity);
    }

    /// Record the outcome of the identity check. Ignored after resolution.
    pub fn resolve(&mut self, identity: Option<Identity>) {
        if !self.loading() {
            return;
        }
        self.phase = match identity {
            Some(identity) => {
                log::debug!("session resolved as {}", identity.username());
                AuthPhase::Authenticated(identity)
            }
            None => AuthPhase::Anonymous,
        };
    }

    /// Adopt the identity returned by a successful login call.
    pub fn login(&mut self, identity: Identity) {
        log::debug!("logged in as {}", identity.username());
        self.phase = AuthPhase::Authenticated(identity);
    }

    /// End the session. The local identity is dropped even when the server
    /// call fails; a stale server session is preferable to a client that
    /// still believes it is logged in.
    pub async fn logout<A: AuthBackend>(&mut self, api: &A) {
        if let Err(e) = api.logout().await {
            log::warn!("server logout failed, clearing local session anyway: {e}");
        }
        self.phase = AuthPhase::Anonymous;
    }
}

/// Run the identity check and publish the resolved session.
pub async fn bootstrap<A: AuthBackend>(session: RwSignal<SessionState>, api: &A) {
    let mut next = SessionState::default();
    next.initialize(api).await;
    session.update(|current| {
        if current.loading() {
            *current = next;
        }
    });
}

/// Log out and publish the anonymous session.
pub async fn sign_out<A: AuthBackend>(session: RwSignal<SessionState>, api: &A) {
    let mut next = session.get_untracked();
    next.logout(api).await;
    session.set(next);
}
