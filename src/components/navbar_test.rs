use super::*;
use crate::test_support::{backer, startup_owner};

#[test]
fn backer_menu_offers_startup_registration() {
    let links = account_links(&backer("ada"));
    assert_eq!(
        links,
        vec![("Become a Startup", "/become-startup"), ("My Dashboard", "/my-dashboard"), ("Settings", "/settings")]
    );
}

#[test]
fn startup_menu_offers_campaign_management() {
    let labels: Vec<_> = account_links(&startup_owner("grace", "Compilers Inc"))
        .into_iter()
        .map(|(label, _)| label)
        .collect();
    assert_eq!(labels, vec!["Create Campaign", "My Campaigns", "My Dashboard", "Settings"]);
}

#[test]
fn account_label_falls_back_to_generic_user() {
    assert_eq!(account_label(&backer("ada")), "ada");
    assert_eq!(account_label(&backer("  ")), "User");
}
