//! Ordered route table.
//!
//! Entries are matched top to bottom and the first match wins. Patterns are
//! unique, so at most one entry can match a concrete path anyway; the order
//! only matters for readability.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Authenticated users only; anonymous visitors go to the login page.
    Required,
    /// Anonymous visitors only; signed-in users go to the dashboard.
    AnonymousOnly,
}

/// Every page the app can render from a URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    HowItWorks,
    Login,
    Register,
    Dashboard,
    MyDashboard,
    CreateCampaign,
    StartupPortal,
    BecomeStartup,
    Settings,
    CampaignDetail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub access: Access,
    pub page: Page,
}

const fn entry(pattern: &'static str, access: Access, page: Page) -> RouteEntry {
    RouteEntry { pattern, access, page }
}

pub const ROUTES: &[RouteEntry] = &[
    entry("/", Access::Public, Page::Landing),
    entry("/how-it-works", Access::Public, Page::HowItWorks),
    entry("/login", Access::AnonymousOnly, Page::Login),
    entry("/register", Access::AnonymousOnly, Page::Register),
    entry("/dashboard", Access::Required, Page::Dashboard),
    entry("/my-dashboard", Access::Required, Page::MyDashboard),
    entry("/create-campaign", Access::Required, Page::CreateCampaign),
    entry("/startup-portal", Access::Required, Page::StartupPortal),
    entry("/become-startup", Access::Required, Page::BecomeStartup),
    entry("/settings", Access::Required, Page::Settings),
    entry("/campaign/:id", Access::Public, Page::CampaignDetail),
];

/// A matched route together with the captured `:id` segment, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: RouteEntry,
    pub id: Option<String>,
}

/// Find the entry for `path`.
///
/// A single trailing slash is ignored (`/login/` matches `/login`). Query
/// strings and fragments must already be stripped.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = normalize(path);
    ROUTES.iter().find_map(|entry| {
        match_pattern(entry.pattern, path).map(|id| RouteMatch { entry: *entry, id })
    })
}

fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

/// `Some(captured)` when `path` fits `pattern`. The capture is `None` for
/// patterns without a parameter.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    let mut pattern_parts = pattern.split('/');
    let mut path_parts = path.split('/');
    let mut captured = None;
    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (None, None) => return Some(captured),
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    captured = Some(actual.to_owned());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}
