//! End-to-end seven-factor scoring tests.

use rust_decimal::Decimal;
use wardscore_scoring::{calculate_news2, IntervalConfig, News2Request, ScoreError};

fn intervals() -> IntervalConfig {
    IntervalConfig {
        zero_severity_interval_hours: Some(12),
        low_severity_interval_hours: Some(6),
        low_medium_severity_interval_hours: Some(4),
        medium_severity_interval_hours: Some(1),
        high_severity_interval_hours: Some(0),
    }
}

/// A fully supplied, entirely unremarkable observation set.
fn normal_obs() -> News2Request {
    News2Request {
        time: Some("2024-06-01T10:00:00Z".to_string()),
        respiratory_rate: Some(Decimal::from(15)),
        heart_rate: Some(Decimal::from(70)),
        oxygen_saturation: Some(Decimal::from(97)),
        spo2_scale: Some(Decimal::from(1)),
        o2_therapy: Some(Decimal::ZERO),
        o2_therapy_mask: None,
        systolic_blood_pressure: Some(Decimal::from(120)),
        consciousness_acvpu: Some("A".to_string()),
        temperature: Some(Decimal::new(370, 1)),
        nurse_concern: None,
        config: intervals(),
    }
}

#[test]
fn all_normal_scores_zero_low_severity() {
    let response = calculate_news2(&normal_obs()).unwrap();

    assert_eq!(response.overall_score, 0);
    assert_eq!(response.respiratory_rate_score, 0);
    assert_eq!(response.oxygen_saturation_score, 0);
    assert_eq!(response.o2_therapy_score, 0);
    assert_eq!(response.blood_pressure_score, 0);
    assert_eq!(response.heart_rate_score, 0);
    assert_eq!(response.consciousness_score, 0);
    assert_eq!(response.temperature_score, 0);

    assert_eq!(response.overall_severity.as_deref(), Some("low"));
    assert_eq!(response.overall_score_display, "0");
    assert!(!response.partial_set);
    assert_eq!(response.empty_set, None);
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("routine_monitoring")
    );
    // Zero severity: next set due 12 hours after recording.
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T22:00:00Z")
    );
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("N"));
    assert_eq!(response.obx_reference_range.as_deref(), Some("0-4"));
    assert!(response.ranking.starts_with("000000,"));
}

#[test]
fn single_mild_abnormality_is_low_severity_with_low_interval() {
    let response = calculate_news2(&News2Request {
        heart_rate: Some(Decimal::from(45)),
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.heart_rate_score, 1);
    assert_eq!(response.overall_score, 1);
    assert_eq!(response.overall_severity.as_deref(), Some("low"));
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("low_monitoring")
    );
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T16:00:00Z")
    );
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("N"));
    assert!(response.ranking.starts_with("010100,"));
}

#[test]
fn component_at_three_escalates_to_low_medium() {
    let response = calculate_news2(&News2Request {
        respiratory_rate: Some(Decimal::from(25)),
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.respiratory_rate_score, 3);
    assert_eq!(response.overall_score, 3);
    assert_eq!(response.overall_severity.as_deref(), Some("low-medium"));
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("low_medium_monitoring")
    );
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T14:00:00Z")
    );
    // A single red component flags HIGH even below the medium band.
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("HIGH"));
}

#[test]
fn mid_band_total_is_medium_severity() {
    let response = calculate_news2(&News2Request {
        respiratory_rate: Some(Decimal::from(22)), // 2
        heart_rate: Some(Decimal::from(115)),      // 2
        temperature: Some(Decimal::new(385, 1)),   // 1
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.overall_score, 5);
    assert_eq!(response.overall_severity.as_deref(), Some("medium"));
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("medium_monitoring")
    );
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T11:00:00Z")
    );
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("HIGH"));
}

#[test]
fn high_total_is_high_severity_exthigh() {
    let response = calculate_news2(&News2Request {
        respiratory_rate: Some(Decimal::from(25)),        // 3
        heart_rate: Some(Decimal::from(135)),             // 3
        systolic_blood_pressure: Some(Decimal::from(85)), // 3
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.overall_score, 9);
    assert_eq!(response.overall_severity.as_deref(), Some("high"));
    assert_eq!(
        response.monitoring_instruction.as_deref(),
        Some("high_monitoring")
    );
    // High interval is configured as 0 hours: due immediately.
    assert_eq!(
        response.time_next_obs_set_due.as_deref(),
        Some("2024-06-01T10:00:00Z")
    );
    assert_eq!(response.obx_abnormal_flags.as_deref(), Some("EXTHIGH"));
    assert!(response.ranking.starts_with("040900,"));
}

#[test]
fn nurse_concern_forces_high_severity_and_display_suffix() {
    let response = calculate_news2(&News2Request {
        nurse_concern: Some("pallor".to_string()),
        ..normal_obs()
    })
    .unwrap();

    assert_eq!(response.overall_score, 0);
    assert_eq!(response.overall_severity.as_deref(), Some("high"));
    assert_eq!(response.overall_score_display, "0C");
    assert!(response.ranking.starts_with("140000,"));
}

#[test]
fn oxygen_scale_two_interacts_with_o2_therapy() {
    // On scale 2, a saturation of 95 only scores when on supplemental O2.
    let on_air = calculate_news2(&News2Request {
        oxygen_saturation: Some(Decimal::from(93)),
        spo2_scale: Some(Decimal::from(2)),
        o2_therapy: Some(Decimal::ZERO),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(on_air.oxygen_saturation_score, 0);

    let on_o2 = calculate_news2(&News2Request {
        oxygen_saturation: Some(Decimal::from(95)),
        spo2_scale: Some(Decimal::from(2)),
        o2_therapy: Some(Decimal::from(2)),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(on_o2.oxygen_saturation_score, 2);
    assert_eq!(on_o2.o2_therapy_score, 2);
}

#[test]
fn boundary_heart_rates_land_on_opposite_sides() {
    let at_forty = calculate_news2(&News2Request {
        heart_rate: Some(Decimal::from(40)),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(at_forty.heart_rate_score, 3);

    let at_forty_one = calculate_news2(&News2Request {
        heart_rate: Some(Decimal::from(41)),
        ..normal_obs()
    })
    .unwrap();
    assert_eq!(at_forty_one.heart_rate_score, 1);
}

#[test]
fn missing_observations_mark_the_set_partial() {
    let response = calculate_news2(&News2Request {
        temperature: None,
        ..normal_obs()
    })
    .unwrap();

    assert!(response.partial_set);
    assert_eq!(response.empty_set, None);
    // The unsupplied reading takes the zero branch.
    assert_eq!(response.temperature_score, 0);
    assert!(response.ranking.starts_with("000010,"));
}

#[test]
fn refused_set_is_empty_and_displays_dashes() {
    let response = calculate_news2(&News2Request {
        time: Some("2024-06-01T10:00:00Z".to_string()),
        config: intervals(),
        ..News2Request::default()
    })
    .unwrap();

    assert_eq!(response.empty_set, Some(true));
    assert!(response.partial_set);
    assert_eq!(response.overall_score, 0);
    assert_eq!(response.overall_score_display, "--");
    // The unsupplied consciousness reading satisfies the not-alert branch,
    // so its first-published score fact is 3 and severity lands in
    // low-medium even though the reported component score is 0.
    assert_eq!(response.consciousness_score, 0);
    assert_eq!(response.overall_severity.as_deref(), Some("low-medium"));
    assert!(response.ranking.starts_with("020001,"));
}

#[test]
fn missing_timestamp_is_a_validation_pair() {
    let err = calculate_news2(&News2Request {
        time: None,
        ..normal_obs()
    })
    .unwrap_err();

    match err {
        ScoreError::Validation(pair) => {
            assert_eq!(pair.log_message, "Missing or invalid timestamp");
            assert_eq!(
                pair.user_message,
                "Must include a valid ISO8601 timestamp \"time\" in the body"
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn missing_interval_config_is_a_validation_pair() {
    let err = calculate_news2(&News2Request {
        config: IntervalConfig::default(),
        ..normal_obs()
    })
    .unwrap_err();

    match err {
        ScoreError::Validation(pair) => {
            assert_eq!(pair.log_message, "Missing config values in body");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn invalid_acvpu_is_a_validation_pair() {
    let err = calculate_news2(&News2Request {
        consciousness_acvpu: Some("asleep".to_string()),
        ..normal_obs()
    })
    .unwrap_err();

    match err {
        ScoreError::Validation(pair) => {
            assert_eq!(pair.log_message, "Invalid ACVPU passed in: 'asleep'");
            assert_eq!(pair.user_message, "ACVPU was invalid");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn saturation_without_scale_is_a_rule_table_gap() {
    // A supplied saturation with no scale matches no saturation rule; the
    // aggregate then demands a score fact nothing published.
    let err = calculate_news2(&News2Request {
        spo2_scale: None,
        ..normal_obs()
    })
    .unwrap_err();
    assert!(matches!(err, ScoreError::Engine(_)));
}

#[test]
fn response_serializes_without_absent_fields() {
    let response = calculate_news2(&normal_obs()).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("empty_set").is_none());
    assert_eq!(json["overall_score"], 0);
    assert_eq!(json["overall_severity"], "low");
    assert_eq!(json["partial_set"], false);
}
