use super::*;

// 2025-01-01T00:00:00Z
const NEW_YEAR_MS: i64 = 1_735_689_600_000;

#[test]
fn campaign_id_must_be_positive_integer() {
    assert_eq!(parse_campaign_id("42"), Some(42));
    assert_eq!(parse_campaign_id("0"), None);
    assert_eq!(parse_campaign_id("-3"), None);
    assert_eq!(parse_campaign_id("abc"), None);
    assert_eq!(parse_campaign_id(""), None);
}

#[test]
fn donation_amount_rejects_zero_before_any_request() {
    assert_eq!(parse_donation_amount("0"), Err(INVALID_AMOUNT));
    assert_eq!(INVALID_AMOUNT, "Please enter a valid donation amount.");
}

#[test]
fn donation_amount_rejects_blank_negative_and_garbage() {
    for raw in ["", "   ", "-5", "ten", "NaN", "inf"] {
        assert_eq!(parse_donation_amount(raw), Err(INVALID_AMOUNT), "{raw:?}");
    }
}

#[test]
fn donation_amount_accepts_positive_decimals() {
    assert_eq!(parse_donation_amount(" 25.50 "), Ok(25.5));
    assert_eq!(parse_donation_amount("100"), Ok(100.0));
}

#[test]
fn quick_amounts_are_valid_donations() {
    for preset in QUICK_AMOUNTS {
        assert!(parse_donation_amount(&preset.to_string()).is_ok());
    }
}

#[test]
fn success_message_includes_progress() {
    let receipt = DonationReceipt {
        message: "Donation successful".to_owned(),
        campaign_progress: 30.5,
        transaction_id: None,
        amount: Some(50.0),
        campaign: None,
    };
    assert_eq!(donation_success(&receipt), "✓ Donation successful Progress: 30.5%");
}

#[test]
fn days_left_label_falls_back_to_na() {
    assert_eq!(days_left_label(None, NEW_YEAR_MS), "N/A");
    assert_eq!(days_left_label(Some("whenever"), NEW_YEAR_MS), "N/A");
    assert_eq!(days_left_label(Some("2025-01-11T00:00:00Z"), NEW_YEAR_MS), "10");
}

#[test]
fn button_label_follows_session_and_progress() {
    assert_eq!(donate_button_label(false, false), "Login to Donate");
    assert_eq!(donate_button_label(false, true), "Login to Donate");
    assert_eq!(donate_button_label(true, true), "Processing...");
    assert_eq!(donate_button_label(true, false), "Donate Now");
}
