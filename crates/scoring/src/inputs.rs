//! Request wire types and input-to-fact defaulting.
//!
//! Requests use snake_case wire names. A missing (or empty-string) field
//! becomes the explicit unsupplied sentinel before the rules run -- the rule
//! tables pattern-match on absence, so absence must be a value.

use rust_decimal::Decimal;
use serde::Deserialize;
use wardscore_engine::Value;

/// Next-observation interval durations, one per severity band, in whole
/// hours. All five are required; validation rejects a request missing any.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntervalConfig {
    pub zero_severity_interval_hours: Option<i64>,
    pub low_severity_interval_hours: Option<i64>,
    pub low_medium_severity_interval_hours: Option<i64>,
    pub medium_severity_interval_hours: Option<i64>,
    pub high_severity_interval_hours: Option<i64>,
}

/// Seven-factor scoring request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct News2Request {
    pub time: Option<String>,
    pub respiratory_rate: Option<Decimal>,
    pub heart_rate: Option<Decimal>,
    pub oxygen_saturation: Option<Decimal>,
    pub spo2_scale: Option<Decimal>,
    pub o2_therapy: Option<Decimal>,
    pub o2_therapy_mask: Option<String>,
    pub systolic_blood_pressure: Option<Decimal>,
    pub consciousness_acvpu: Option<String>,
    pub temperature: Option<Decimal>,
    pub nurse_concern: Option<String>,
    #[serde(default)]
    pub config: IntervalConfig,
}

/// Six-factor scoring request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeowsRequest {
    pub time: Option<String>,
    pub respiratory_rate: Option<Decimal>,
    pub heart_rate: Option<Decimal>,
    pub oxygen_saturation: Option<Decimal>,
    pub systolic_blood_pressure: Option<Decimal>,
    pub diastolic_blood_pressure: Option<Decimal>,
    pub consciousness_acvpu: Option<String>,
    pub temperature: Option<Decimal>,
    pub nurse_concern: Option<String>,
    #[serde(default)]
    pub config: IntervalConfig,
}

/// A numeric input, or the sentinel when absent.
pub(crate) fn num_or_undefined(value: Option<Decimal>) -> Value {
    match value {
        Some(d) => Value::Num(d),
        None => Value::Undefined,
    }
}

/// A string input, or the sentinel when absent or empty.
pub(crate) fn str_or_undefined(value: Option<&str>) -> Value {
    match value {
        Some("") | None => Value::Undefined,
        Some(s) => Value::Str(s.to_string()),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
