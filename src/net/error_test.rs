use super::*;
use serde_json::json;

fn status(body: Value) -> ApiError {
    ApiError::Status { status: 400, body }
}

#[test]
fn message_field_wins_over_everything() {
    let body = json!({ "username": ["taken"], "error": "bad", "message": "Invalid credentials" });
    assert_eq!(extract_message(&body).as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_field_used_when_message_missing() {
    let body = json!({ "error": "Campaign is not active" });
    assert_eq!(extract_message(&body).as_deref(), Some("Campaign is not active"));
}

#[test]
fn detail_field_used_after_error() {
    let body = json!({ "detail": "Authentication credentials were not provided." });
    assert_eq!(
        extract_message(&body).as_deref(),
        Some("Authentication credentials were not provided.")
    );
}

#[test]
fn first_field_error_used_last() {
    let body = json!({ "website": ["Enter a valid URL."], "company_name": ["Already exists."] });
    assert_eq!(extract_message(&body).as_deref(), Some("Enter a valid URL."));
}

#[test]
fn non_field_errors_array_is_read() {
    let body = json!({ "non_field_errors": ["Campaign not found"] });
    assert_eq!(extract_message(&body).as_deref(), Some("Campaign not found"));
}

#[test]
fn empty_or_non_object_bodies_yield_none() {
    assert_eq!(extract_message(&json!({})), None);
    assert_eq!(extract_message(&json!({ "amount": [] })), None);
    assert_eq!(extract_message(&Value::Null), None);
    assert_eq!(extract_message(&json!(["x"])), None);
}

#[test]
fn user_message_falls_back_for_network_errors() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("Failed to create campaign"), "Failed to create campaign");
    assert_eq!(ApiError::Unavailable.user_message("Failed"), "Failed");
}

#[test]
fn user_message_uses_body_for_status_errors() {
    let err = status(json!({ "goal_amount": ["A valid number is required."] }));
    assert_eq!(err.user_message("Failed to create campaign"), "A valid number is required.");
}

#[test]
fn error_field_ignores_other_keys() {
    let err = status(json!({ "message": "not this", "amount": ["nor this"] }));
    assert_eq!(err.error_field("Donation failed. Please try again."), "Donation failed. Please try again.");
    let err = status(json!({ "error": "Insufficient balance" }));
    assert_eq!(err.error_field("fallback"), "Insufficient balance");
}

#[test]
fn status_accessors() {
    let err = ApiError::Status { status: 404, body: Value::Null };
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

// =============================================================
// Field-labelled messages
// =============================================================

#[test]
fn field_message_names_the_failing_field() {
    let err = status(json!({ "username": ["A user with that username already exists."] }));
    assert_eq!(
        err.field_message("Registration failed. Please try again."),
        "username: A user with that username already exists."
    );
}

#[test]
fn field_message_prefers_detail_then_message() {
    let body = json!({ "email": ["Enter a valid email address."], "message": "Bad input", "detail": "Throttled" });
    assert_eq!(extract_field_message(&body).as_deref(), Some("Throttled"));
    let body = json!({ "email": ["Enter a valid email address."], "message": "Bad input" });
    assert_eq!(extract_field_message(&body).as_deref(), Some("Bad input"));
}

#[test]
fn field_message_skips_empty_field_errors() {
    let body = json!({ "phone_number": [], "email": "Enter a valid email address." });
    assert_eq!(extract_field_message(&body).as_deref(), Some("email: Enter a valid email address."));
}

#[test]
fn field_message_falls_back_without_body() {
    assert_eq!(ApiError::Network("offline".to_owned()).field_message("Registration failed"), "Registration failed");
    assert_eq!(status(json!({})).field_message("Registration failed"), "Registration failed");
}
