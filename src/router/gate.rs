//! Access decision for a path under a given session.
//!
//! The rules, in order:
//! 1. While the session is resolving nothing is mounted.
//! 2. Unmatched paths show the not-found view.
//! 3. `Required` routes need an identity, `AnonymousOnly` routes need its
//!    absence; failing either redirects instead of rendering.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::table::{Access, Page, RouteMatch, match_path};
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Identity check still running; show the placeholder.
    Loading,
    /// Mount the page. `id` is the captured `:id` segment.
    Render { page: Page, id: Option<String> },
    Redirect(&'static str),
    NotFound,
}

pub fn resolve(session: &SessionState, path: &str) -> Decision {
    if session.loading() {
        return Decision::Loading;
    }
    let Some(RouteMatch { entry, id }) = match_path(path) else {
        return Decision::NotFound;
    };
    match (entry.access, session.is_authenticated()) {
        (Access::Required, false) => Decision::Redirect(LOGIN_PATH),
        (Access::AnonymousOnly, true) => Decision::Redirect(DASHBOARD_PATH),
        _ => Decision::Render { page: entry.page, id },
    }
}
