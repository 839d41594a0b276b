use linear_drive_model::{DriveLimits, LimitsError};
use rstest::rstest;

#[test]
fn limits_load_from_json() {
    let json = r#"{ "acceleration": 1200.5, "deceleration": -800.0, "max_velocity": 1500.0 }"#;
    let limits: DriveLimits = serde_json::from_str(json).unwrap();

    assert_eq!(limits, DriveLimits::new(1200.5, -800.0, 1500.0).unwrap());
    assert_eq!(limits.plan(100).acceleration, 1200);
}

#[test]
fn limits_round_trip_through_json() {
    let limits = DriveLimits::fast_rotation();
    let json = serde_json::to_string(&limits).unwrap();
    let back: DriveLimits = serde_json::from_str(&json).unwrap();
    assert_eq!(back, limits);
}

#[rstest]
#[case(r#"{ "acceleration": 0.0, "deceleration": -1.0, "max_velocity": 1.0 }"#, "acceleration must be positive")]
#[case(r#"{ "acceleration": 1.0, "deceleration": 2.0, "max_velocity": 1.0 }"#, "deceleration must be negative")]
#[case(r#"{ "acceleration": 1.0, "deceleration": -1.0, "max_velocity": 0.0 }"#, "velocity ceiling must be positive")]
fn invalid_limits_are_rejected(#[case] json: &str, #[case] message: &str) {
    let err = serde_json::from_str::<DriveLimits>(json).unwrap_err();
    assert!(err.to_string().contains(message), "unexpected error: {err}");
}

#[test]
fn limits_error_messages() {
    assert_eq!(
        LimitsError::NonNegativeDeceleration(3.0).to_string(),
        "deceleration must be negative, got 3"
    );
    assert_eq!(LimitsError::NotFinite.to_string(), "drive limits must be finite");
}
