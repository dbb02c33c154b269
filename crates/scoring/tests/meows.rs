//! End-to-end six-factor scoring tests.

use rust_decimal::Decimal;
use wardscore_scoring::{calculate_meows, IntervalConfig, MeowsRequest, ScoreError};

fn intervals() -> IntervalConfig {
    IntervalConfig {
        zero_severity_interval_hours: Some(12),
        low_severity_interval_hours: Some(6),
        low_medium_severity_interval_hours: Some(4),
        medium_severity_interval_hours: Some(1),
        high_severity_interval_hours: Some(0),
    }
}

fn normal_obs() -> MeowsRequest {
    MeowsRequest {
        time: Some("2024-06-01T10:00:00Z".to_string()),
        respiratory_rate: Some(Decimal::from(15)),
        heart_rate: Some(Decimal::from(80)),
        oxygen_saturation: Some(Decimal::from(98)),
        systolic_blood_pressure: Some(Decimal::from(120)),
        diastolic_blood_pressure: Some(Decimal::from(70)),
        consciousness_acvpu: Some("alert".to_string()),
        temperature: Some(Decimal::new(368, 1)),
        nurse_concern: None,
        config: intervals(),
    }
}

#[test]
fn all_normal_scores_zero_low_severity() {
    let response = calculate_meows(&normal_obs()).unwrap();

    assert_eq!(response.overall_score, 0);
    assert_eq!(response.overall_severity.as_deref(), Some("low"));
    assert_eq!(response.overall_score_display, "0");
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("routine_monitoring")
    );
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T22:00:00Z")
    );
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("N"));
    assert_eq!(response.obx_reference_range.as_deref(), Some("0"));
    assert!(response.ranking.starts_with("000000,"));
}

#[test]
fn single_amber_component_is_low_medium() {
    let response = calculate_meows(&MeowsRequest {
        heart_rate: Some(Decimal::from(110)),
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.heart_rate_score, 2);
    assert_eq!(response.overall_score, 2);
    assert_eq!(response.overall_severity.as_deref(), Some("low-medium"));
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("low_medium_monitoring")
    );
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("HIGH"));
}

#[test]
fn two_amber_components_are_medium() {
    let response = calculate_meows(&MeowsRequest {
        heart_rate: Some(Decimal::from(110)),          // 2
        systolic_blood_pressure: Some(Decimal::from(155)), // 2
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.overall_score, 4);
    assert_eq!(response.overall_severity.as_deref(), Some("medium"));
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T11:00:00Z")
    );
}

#[test]
fn red_component_alone_is_high() {
    let response = calculate_meows(&MeowsRequest {
        respiratory_rate: Some(Decimal::from(35)),
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.respiratory_rate_score, 8);
    assert_eq!(response.overall_score, 8);
    assert_eq!(response.overall_severity.as_deref(), Some("high"));
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("EXTHIGH"));
    assert!(response.ranking.starts_with("040800,"));
}

#[test]
fn diastolic_pressure_scores_independently() {
    let response = calculate_meows(&MeowsRequest {
        diastolic_blood_pressure: Some(Decimal::from(115)),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(response.diastolic_blood_pressure_score, 8);
    assert_eq!(response.systolic_blood_pressure_score, 0);
}

#[test]
fn confusion_scores_two_deeper_obtundation_eight() {
    let confused = calculate_meows(&MeowsRequest {
        consciousness_acvpu: Some("c".to_string()),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(confused.consciousness_score, 2);

    let unresponsive = calculate_meows(&MeowsRequest {
        consciousness_acvpu: Some("U".to_string()),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(unresponsive.consciousness_score, 8);
}

#[test]
fn nurse_concern_forces_high_severity() {
    let response = calculate_meows(&MeowsRequest {
        nurse_concern: Some("looks unwell".to_string()),
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.overall_severity.as_deref(), Some("high"));
    assert_eq!(response.overall_score_display, "0C");
    assert!(response.ranking.starts_with("140000,"));
}

#[test]
fn refused_set_is_empty_low_severity() {
    let response = calculate_meows(&MeowsRequest {
        time: Some("2024-06-01T10:00:00Z".to_string()),
        config: intervals(),
        ..MeowsRequest::default()
    })
    .unwrap();

    assert_eq!(response.empty_set, Some(true));
    assert!(response.partial_set);
    assert_eq!(response.overall_score, 0);
    assert_eq!(response.overall_score_display, "--");
    assert_eq!(response.overall_severity.as_deref(), Some("low"));
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("routine_monitoring")
    );
    assert!(response.ranking.starts_with("000001,"));
}

#[test]
fn boundary_temperatures_follow_the_cut_points() {
    let cases = [("35.4", 2), ("35.5", 0), ("37.5", 0), ("37.6", 2), ("38.1", 8)];
    for (temp, expected) in cases {
        let response = calculate_meows(&MeowsRequest {
            temperature: Some(temp.parse().unwrap()),
            ..normal_obs()
        })
        .unwrap();
        assert_eq!(response.temperature_score, expected, "temp {}", temp);
    }
}

#[test]
fn earlier_recording_outranks_later_at_equal_priority() {
    let earlier = calculate_meows(&normal_obs()).unwrap();
    let later = calculate_meows(&MeowsRequest {
        time: Some("2024-06-01T11:00:00Z".to_string()),
        ..normal_obs()
    })
    .unwrap();
    // Descending sort puts the larger key -- the staler set -- first.
    assert!(earlier.ranking > later.ranking);
}

#[test]
fn missing_timestamp_is_a_validation_pair() {
    let err = calculate_meows(&MeowsRequest {
        time: None,
        ..normal_obs()
    })
    .unwrap_err();
    assert!(matches!(err, ScoreError::Validation(_)));
}
