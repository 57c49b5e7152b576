use super::*;
use crate::router::table::ROUTES;
use crate::test_support::{backer, startup_owner};

fn resolving() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    let mut session = SessionState::default();
    session.resolve(None);
    session
}

fn signed_in() -> SessionState {
    let mut session = SessionState::default();
    session.resolve(Some(backer("ada")));
    session
}

/// A concrete path for every entry, filling `:id` with a number.
fn concrete_paths() -> Vec<(Access, String)> {
    ROUTES
        .iter()
        .map(|entry| (entry.access, entry.pattern.replace(":id", "7")))
        .collect()
}

// =============================================================
// Loading
// =============================================================

#[test]
fn resolving_session_shows_placeholder_for_every_path() {
    let session = resolving();
    for (_, path) in concrete_paths() {
        assert_eq!(resolve(&session, &path), Decision::Loading, "{path}");
    }
    assert_eq!(resolve(&session, "/does-not-exist"), Decision::Loading);
}

// =============================================================
// Access rules
// =============================================================

#[test]
fn required_paths_redirect_anonymous_to_login() {
    let session = anonymous();
    for (access, path) in concrete_paths() {
        if access == Access::Required {
            assert_eq!(resolve(&session, &path), Decision::Redirect(LOGIN_PATH), "{path}");
        }
    }
}

#[test]
fn anonymous_only_paths_redirect_signed_in_to_dashboard() {
    let session = signed_in();
    for (access, path) in concrete_paths() {
        if access == Access::AnonymousOnly {
            assert_eq!(resolve(&session, &path), Decision::Redirect(DASHBOARD_PATH), "{path}");
        }
    }
}

#[test]
fn public_paths_render_for_everyone() {
    for session in [anonymous(), signed_in()] {
        for (access, path) in concrete_paths() {
            if access == Access::Public {
                assert!(matches!(resolve(&session, &path), Decision::Render { .. }), "{path}");
            }
        }
    }
}

#[test]
fn campaign_detail_renders_for_anonymous_with_id() {
    assert_eq!(
        resolve(&anonymous(), "/campaign/12"),
        Decision::Render { page: Page::CampaignDetail, id: Some("12".to_owned()) }
    );
}

#[test]
fn unmatched_path_is_not_found_once_resolved() {
    assert_eq!(resolve(&anonymous(), "/admin"), Decision::NotFound);
    assert_eq!(resolve(&signed_in(), "/admin"), Decision::NotFound);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn unauthenticated_load_shows_landing() {
    let mut session = resolving();
    session.resolve(None);
    assert_eq!(resolve(&session, "/"), Decision::Render { page: Page::Landing, id: None });
}

#[test]
fn login_unlocks_dashboard_and_locks_login_page() {
    let mut session = anonymous();
    assert_eq!(resolve(&session, "/dashboard"), Decision::Redirect(LOGIN_PATH));

    session.login(backer("ada"));
    assert_eq!(resolve(&session, "/dashboard"), Decision::Render { page: Page::Dashboard, id: None });
    assert_eq!(resolve(&session, "/login"), Decision::Redirect(DASHBOARD_PATH));
}

#[test]
fn backer_reaches_create_campaign_page() {
    let session = signed_in();
    assert_eq!(
        resolve(&session, "/create-campaign"),
        Decision::Render { page: Page::CreateCampaign, id: None }
    );
}

#[test]
fn startup_owner_reaches_startup_portal() {
    let mut session = anonymous();
    session.login(startup_owner("grace", "Compilers Inc"));
    assert_eq!(
        resolve(&session, "/startup-portal/"),
        Decision::Render { page: Page::StartupPortal, id: None }
    );
}

struct OfflineBackend;

impl crate::state::session::AuthBackend for OfflineBackend {
    async fn current_identity(&self) -> Result<crate::net::types::Identity, crate::net::error::ApiError> {
        Err(crate::net::error::ApiError::Network("offline".to_owned()))
    }

    async fn logout(&self) -> Result<(), crate::net::error::ApiError> {
        Err(crate::net::error::ApiError::Network("offline".to_owned()))
    }
}

#[tokio::test]
async fn failed_logout_still_locks_protected_pages() {
    let mut session = signed_in();
    session.logout(&OfflineBackend).await;

    assert!(!session.is_authenticated());
    assert_eq!(resolve(&session, "/dashboard"), Decision::Redirect(LOGIN_PATH));
    assert_eq!(resolve(&session, "/login"), Decision::Render { page: Page::Login, id: None });
}
