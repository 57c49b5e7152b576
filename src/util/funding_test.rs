use super::*;

// 2025-01-01T00:00:00Z
const NEW_YEAR_MS: i64 = 1_735_689_600_000;

#[test]
fn progress_percent_is_ratio_times_hundred() {
    assert!((progress_percent(250.0, 1000.0) - 25.0).abs() < f64::EPSILON);
}

#[test]
fn progress_percent_caps_at_hundred() {
    assert!((progress_percent(1500.0, 1000.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn progress_percent_zero_goal_is_zero() {
    assert!(progress_percent(10.0, 0.0).abs() < f64::EPSILON);
    assert!(progress_percent(10.0, -5.0).abs() < f64::EPSILON);
}

#[test]
fn bar_width_clamps() {
    assert!((bar_width(150.0) - 100.0).abs() < f64::EPSILON);
    assert!(bar_width(-3.0).abs() < f64::EPSILON);
    assert!((bar_width(42.5) - 42.5).abs() < f64::EPSILON);
    assert!(bar_width(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn days_left_rounds_partial_days_up() {
    assert_eq!(days_left("2025-01-02T00:00:00Z", NEW_YEAR_MS), Some(1));
    assert_eq!(days_left("2025-01-02T00:00:01Z", NEW_YEAR_MS), Some(2));
    assert_eq!(days_left("2025-01-01T06:00:00Z", NEW_YEAR_MS), Some(1));
}

#[test]
fn days_left_respects_offsets() {
    assert_eq!(days_left("2025-01-03T02:00:00+02:00", NEW_YEAR_MS), Some(2));
}

#[test]
fn days_left_past_deadline_is_not_positive() {
    assert_eq!(days_left("2024-12-31T12:00:00Z", NEW_YEAR_MS), Some(0));
    assert_eq!(days_left("2024-12-30T00:00:00Z", NEW_YEAR_MS), Some(-2));
}

#[test]
fn days_left_rejects_garbage() {
    assert_eq!(days_left("soon", NEW_YEAR_MS), None);
    assert_eq!(days_left("", NEW_YEAR_MS), None);
}
