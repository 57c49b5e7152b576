use super::*;

#[test]
fn campaign_path_formats_id() {
    assert_eq!(campaign_path(42), "/campaigns/42/");
}

#[test]
fn only_get_skips_csrf() {
    assert!(!Method::Get.needs_csrf());
    assert!(Method::Post.needs_csrf());
    assert!(Method::Put.needs_csrf());
    assert_eq!(Method::Put.as_str(), "PUT");
}

#[test]
fn csrf_token_found_among_cookies() {
    let cookies = "sessionid=abc; csrftoken=Tok3n; theme=dark";
    assert_eq!(csrf_token_from_cookies(cookies).as_deref(), Some("Tok3n"));
}

#[test]
fn csrf_token_missing_or_empty() {
    assert_eq!(csrf_token_from_cookies(""), None);
    assert_eq!(csrf_token_from_cookies("sessionid=abc"), None);
    assert_eq!(csrf_token_from_cookies("csrftoken="), None);
    assert_eq!(csrf_token_from_cookies("xcsrftoken=nope"), None);
}

#[test]
fn body_json_serializes_request() {
    let body = Body::json(&DonationRequest { campaign_id: 3, amount: 50.0 }).unwrap();
    let Body::Json(value) = body else {
        panic!("expected json body");
    };
    assert_eq!(value, serde_json::json!({ "campaign_id": 3, "amount": 50.0 }));
}

#[test]
fn client_exposes_config() {
    let client = ApiClient::new(ApiConfig::default());
    assert_eq!(client.config().endpoint(CURRENT_USER_PATH), "http://localhost:8000/api/users/me/");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_reports_unavailable() {
    let client = ApiClient::new(ApiConfig::default());
    assert_eq!(client.current_identity().await, Err(ApiError::Unavailable));
    assert_eq!(client.logout().await, Err(ApiError::Unavailable));
    assert_eq!(client.my_startup().await, Err(ApiError::Unavailable));
    assert_eq!(client.list_startups().await, Err(ApiError::Unavailable));
    assert_eq!(client.update_campaign(3, &CampaignDraft::default()).await, Err(ApiError::Unavailable));
}
