//! ACVPU consciousness-level normalisation.
//!
//! Accepts the single-letter and full-word spellings in any case and maps
//! them onto the canonical lowercase words the rule tables compare against.
//! The unsupplied sentinel passes through untouched.

use wardscore_engine::{ValidationError, Value};

/// Normalise a raw ACVPU input value.
pub fn normalise_acvpu(value: &Value) -> Result<Value, ValidationError> {
    let raw = match value {
        Value::Undefined => return Ok(Value::Undefined),
        Value::Str(s) => s,
        Value::Num(_) => return Err(invalid(&value.to_string())),
    };

    let canonical = match raw.to_lowercase().as_str() {
        "a" | "alert" => "alert",
        "c" | "confusion" => "confusion",
        "v" | "voice" => "voice",
        "p" | "pain" => "pain",
        "u" | "unresponsive" => "unresponsive",
        _ => return Err(invalid(raw)),
    };
    Ok(Value::Str(canonical.to_string()))
}

fn invalid(raw: &str) -> ValidationError {
    ValidationError::new(
        format!("Invalid ACVPU passed in: '{}'", raw),
        "ACVPU was invalid",
    )
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
