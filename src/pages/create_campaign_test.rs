use super::*;

fn filled() -> CampaignInput {
    CampaignInput {
        product_name: " Solar Lamp ".to_owned(),
        product_type: ProductType::Physical,
        description: "A lamp".to_owned(),
        goal_amount: "1000".to_owned(),
        early_access_price: "49.99".to_owned(),
        ..CampaignInput::default()
    }
}

#[test]
fn valid_input_builds_trimmed_draft() {
    let draft = validate_campaign(&filled()).unwrap();
    assert_eq!(draft.product_name, "Solar Lamp");
    assert_eq!(draft.goal_amount, "1000");
    assert_eq!(draft.estimated_delivery, None);
    assert_eq!(draft.end_date, None);
}

#[test]
fn each_required_field_is_checked() {
    let blanks: [fn(&mut CampaignInput); 3] = [
        |input| input.product_name.clear(),
        |input| input.goal_amount = "  ".to_owned(),
        |input| input.early_access_price.clear(),
    ];
    for blank in blanks {
        let mut input = filled();
        blank(&mut input);
        assert_eq!(validate_campaign(&input), Err(MISSING_FIELDS));
    }
}

#[test]
fn description_is_not_enforced_client_side() {
    let mut input = filled();
    input.description.clear();
    assert!(validate_campaign(&input).is_ok());
}

#[test]
fn filled_dates_are_kept() {
    let mut input = filled();
    input.estimated_delivery = "2026-03-01".to_owned();
    input.end_date = "2026-02-01T12:00".to_owned();
    let draft = validate_campaign(&input).unwrap();
    assert_eq!(draft.estimated_delivery.as_deref(), Some("2026-03-01"));
    assert_eq!(draft.end_date.as_deref(), Some("2026-02-01T12:00"));
}
