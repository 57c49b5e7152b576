use super::*;
use crate::test_support::{backer, startup_owner};

#[test]
fn tabs_start_on_profile() {
    assert_eq!(SettingsTab::default(), SettingsTab::Profile);
    let labels: Vec<_> = SettingsTab::ALL.into_iter().map(SettingsTab::label).collect();
    assert_eq!(labels, vec!["Profile", "Wallet", "Account"]);
}

#[test]
fn account_type_follows_identity_variant() {
    assert_eq!(account_type(&backer("ada")), "Backer");
    assert_eq!(account_type(&startup_owner("grace", "Compilers Inc")), "Startup");
}

#[test]
fn member_since_shows_calendar_date() {
    assert_eq!(member_since(Some("2024-03-05T10:20:30.123456Z")), "2024-03-05");
    assert_eq!(member_since(Some("2024-12-31T23:00:00-05:00")), "2024-12-31");
}

#[test]
fn member_since_without_usable_date_is_na() {
    assert_eq!(member_since(None), "N/A");
    assert_eq!(member_since(Some("yesterday")), "N/A");
}
