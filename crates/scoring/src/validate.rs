//! Request validation.
//!
//! Rejections are reported as a (technical log message, user-facing
//! message) pair; no partial response is ever produced past this point.

use crate::inputs::IntervalConfig;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use wardscore_engine::ValidationError;

/// Validated interval durations, one per severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Intervals {
    pub zero_severity_hours: i64,
    pub low_severity_hours: i64,
    pub low_medium_severity_hours: i64,
    pub medium_severity_hours: i64,
    pub high_severity_hours: i64,
}

/// Context the response fold needs beyond the fired events.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObsContext {
    pub recorded: OffsetDateTime,
    pub intervals: Intervals,
}

/// Parse and require the recorded-at timestamp.
pub(crate) fn validate_timestamp(time: Option<&str>) -> Result<OffsetDateTime, ValidationError> {
    time.and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
        .ok_or_else(|| {
            ValidationError::new(
                "Missing or invalid timestamp",
                "Must include a valid ISO8601 timestamp \"time\" in the body",
            )
        })
}

/// Require all five severity interval durations.
pub(crate) fn validate_intervals(config: &IntervalConfig) -> Result<Intervals, ValidationError> {
    match (
        config.zero_severity_interval_hours,
        config.low_severity_interval_hours,
        config.low_medium_severity_interval_hours,
        config.medium_severity_interval_hours,
        config.high_severity_interval_hours,
    ) {
        (Some(zero), Some(low), Some(low_medium), Some(medium), Some(high)) => Ok(Intervals {
            zero_severity_hours: zero,
            low_severity_hours: low,
            low_medium_severity_hours: low_medium,
            medium_severity_hours: medium,
            high_severity_hours: high,
        }),
        _ => Err(ValidationError::new(
            "Missing config values in body",
            "Must include expected config values in body",
        )),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rfc3339_timestamps() {
        let ts = validate_timestamp(Some("2024-06-01T10:30:00Z")).unwrap();
        assert_eq!(ts.year(), 2024);
        let ts = validate_timestamp(Some("2024-06-01T10:30:00+01:00")).unwrap();
        assert_eq!(ts.offset().whole_hours(), 1);
    }

    #[test]
    fn rejects_missing_or_garbage_timestamps() {
        for bad in [None, Some("not a date"), Some("2024-06-01")] {
            let err = validate_timestamp(bad).unwrap_err();
            assert_eq!(err.log_message, "Missing or invalid timestamp");
            assert!(err.user_message.contains("ISO8601"));
        }
    }

    #[test]
    fn rejects_any_missing_interval() {
        let full = IntervalConfig {
            zero_severity_interval_hours: Some(12),
            low_severity_interval_hours: Some(6),
            low_medium_severity_interval_hours: Some(4),
            medium_severity_interval_hours: Some(1),
            high_severity_interval_hours: Some(0),
        };
        assert!(validate_intervals(&full).is_ok());

        let mut missing_one = full.clone();
        missing_one.medium_severity_interval_hours = None;
        let err = validate_intervals(&missing_one).unwrap_err();
        assert_eq!(err.log_message, "Missing config values in body");
    }
}
