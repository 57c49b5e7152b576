use std::collections::HashSet;

use super::*;

#[test]
fn patterns_are_unique() {
    let patterns: HashSet<_> = ROUTES.iter().map(|entry| entry.pattern).collect();
    assert_eq!(patterns.len(), ROUTES.len());
}

#[test]
fn every_page_has_exactly_one_route() {
    let pages: HashSet<_> = ROUTES.iter().map(|entry| format!("{:?}", entry.page)).collect();
    assert_eq!(pages.len(), ROUTES.len());
}

#[test]
fn root_matches_landing() {
    let matched = match_path("/").unwrap();
    assert_eq!(matched.entry.page, Page::Landing);
    assert_eq!(matched.id, None);
}

#[test]
fn static_paths_match_their_entries() {
    for entry in ROUTES.iter().filter(|entry| !entry.pattern.contains(':')) {
        assert_eq!(match_path(entry.pattern).map(|m| m.entry), Some(*entry), "{}", entry.pattern);
    }
}

#[test]
fn trailing_slash_is_ignored_once() {
    assert_eq!(match_path("/login/").map(|m| m.entry.page), Some(Page::Login));
    assert_eq!(match_path("/login//"), None);
}

#[test]
fn campaign_detail_captures_id() {
    let matched = match_path("/campaign/42").unwrap();
    assert_eq!(matched.entry.page, Page::CampaignDetail);
    assert_eq!(matched.entry.access, Access::Public);
    assert_eq!(matched.id.as_deref(), Some("42"));

    assert_eq!(match_path("/campaign/42/").and_then(|m| m.id).as_deref(), Some("42"));
}

#[test]
fn campaign_detail_requires_single_nonempty_segment() {
    assert_eq!(match_path("/campaign"), None);
    assert_eq!(match_path("/campaign/"), None);
    assert_eq!(match_path("/campaign/1/edit"), None);
}

#[test]
fn unknown_paths_do_not_match() {
    assert_eq!(match_path("/nope"), None);
    assert_eq!(match_path("/dashboard/extra"), None);
    assert_eq!(match_path(""), None);
}

#[test]
fn protected_routes_are_the_account_pages() {
    let required: Vec<_> = ROUTES
        .iter()
        .filter(|entry| entry.access == Access::Required)
        .map(|entry| entry.pattern)
        .collect();
    assert_eq!(
        required,
        vec!["/dashboard", "/my-dashboard", "/create-campaign", "/startup-portal", "/become-startup", "/settings"]
    );
}
