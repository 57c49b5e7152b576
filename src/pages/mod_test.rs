use serde_json::json;

use super::*;
use crate::net::error::ApiError;

#[test]
fn optional_text_blank_is_none() {
    assert_eq!(optional_text("   "), None);
    assert_eq!(optional_text(" https://x.dev "), Some("https://x.dev".to_owned()));
}

#[test]
fn loadable_from_ok_is_ready() {
    assert_eq!(Loadable::from_result(Ok(3), "Failed"), Loadable::Ready(3));
}

#[test]
fn loadable_from_error_ignores_server_message() {
    let err = ApiError::Status { status: 500, body: json!({ "detail": "Traceback..." }) };
    assert_eq!(Loadable::<()>::from_result(Err(err), "Failed"), Loadable::Failed("Failed".to_owned()));
}

#[test]
fn loadable_from_network_error_uses_fallback() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(
        Loadable::<()>::from_result(Err(err), "Failed to load your campaigns."),
        Loadable::Failed("Failed to load your campaigns.".to_owned())
    );
}
