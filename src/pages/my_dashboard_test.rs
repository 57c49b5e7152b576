use serde_json::json;

use super::*;

fn tx(id: i64, campaign: Option<i64>, name: Option<&str>, description: &str) -> Transaction {
    serde_json::from_value(json!({
        "id": id,
        "amount": "10.00",
        "transaction_type": "donation",
        "campaign": campaign,
        "campaign_name": name,
        "description": description
    }))
    .unwrap()
}

fn campaign(id: i64) -> Campaign {
    serde_json::from_value(json!({
        "id": id,
        "product_name": "Lamp",
        "product_type": "physical",
        "goal_amount": "100.00"
    }))
    .unwrap()
}

#[test]
fn backed_campaigns_are_distinct_in_order() {
    let backed = backed_campaigns(&[
        tx(1, Some(3), Some("Solar Lamp"), "Donation"),
        tx(2, Some(5), Some("Robot Kit"), "Donation"),
        tx(3, Some(3), Some("Solar Lamp"), "Donation"),
    ]);
    assert_eq!(
        backed,
        vec![
            BackedCampaign { campaign_id: Some(3), name: "Solar Lamp".to_owned() },
            BackedCampaign { campaign_id: Some(5), name: "Robot Kit".to_owned() },
        ]
    );
}

#[test]
fn backed_campaigns_without_id_group_by_label() {
    let backed = backed_campaigns(&[
        tx(1, None, None, "Top-up"),
        tx(2, None, None, "Top-up"),
        tx(3, None, None, "Refund"),
    ]);
    let names: Vec<_> = backed.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Top-up", "Refund"]);
}

#[test]
fn merge_startup_tolerates_one_failure() {
    let offline = || ApiError::Network("offline".to_owned());

    let data = merge_startup(Ok(vec![campaign(1)]), Err(offline())).unwrap();
    assert_eq!(data, DashboardData::Startup { campaigns: vec![campaign(1)], startup: None });

    let data = merge_startup(Err(offline()), Ok(None)).unwrap();
    assert_eq!(data, DashboardData::Startup { campaigns: Vec::new(), startup: None });
}

#[test]
fn merge_startup_fails_when_everything_failed() {
    let result = merge_startup(Err(ApiError::Network("offline".to_owned())), Err(ApiError::Unavailable));
    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn backer_load_outside_browser_fails() {
    let client = ApiClient::new(crate::config::ApiConfig::default());
    assert_eq!(load(&client, false).await, Err(ApiError::Unavailable));
}
