//! wardscore-banding: blood-glucose reading banding.
//!
//! Classifies a single glucose reading into LOW/NORMAL/HIGH by compiling
//! the caller's sparse per-category threshold configuration into three
//! engine rules (one per band) and evaluating them against the reading's
//! value and prandial tag.
//!
//! The compiled bands partition the number line for every tag, so exactly
//! one rule fires per reading.

pub mod compile;
pub mod thresholds;

use compile::{compile_thresholds_to_rules, BANDING_EVENT, TAG_FACT, VALUE_FACT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thresholds::{ThresholdConfig, Thresholds};
use wardscore_engine::{Almanac, Engine, EngineError, ValidationError, Value};

/// Banding request: the reading plus the tenant's threshold configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BandingRequest {
    pub blood_glucose_value: Option<Decimal>,
    pub prandial_tag_id: Option<String>,
    pub blood_glucose_thresholds_mmoll: Option<ThresholdConfig>,
}

/// Banding result: the band label the reading fell into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banding_id: Option<String>,
}

/// Errors surfaced by [`band_reading`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BandingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A compiled rule emitted an event type the result fold does not
    /// recognize -- a defect in the compiler, not in the input.
    #[error("unexpected rule event type '{0}'")]
    UnexpectedEventType(String),

    /// A banding event without its level parameter.
    #[error("banding event is missing its 'level' parameter")]
    MissingLevel,
}

/// Band a single glucose reading against a threshold configuration.
pub fn band_reading(request: &BandingRequest) -> Result<BandingResult, BandingError> {
    let (value, tag, thresholds) = validated_inputs(request)?;

    let engine = Engine::new(compile_thresholds_to_rules(&thresholds));
    let mut almanac = Almanac::new(HashMap::from([
        (VALUE_FACT.to_string(), Value::Num(value)),
        (TAG_FACT.to_string(), Value::Str(tag)),
    ]));
    let events = engine.run(&mut almanac)?;

    let mut banding_id = None;
    for event in events {
        if event.kind == BANDING_EVENT {
            let level = event
                .param("level")
                .and_then(|v| v.as_str())
                .ok_or(BandingError::MissingLevel)?;
            banding_id = Some(level.to_string());
        } else {
            return Err(BandingError::UnexpectedEventType(event.kind));
        }
    }
    Ok(BandingResult { banding_id })
}

fn validated_inputs(
    request: &BandingRequest,
) -> Result<(Decimal, String, Thresholds), BandingError> {
    let Some(config) = &request.blood_glucose_thresholds_mmoll else {
        return Err(ValidationError::new(
            "Must have blood glucose threshold configuration",
            "Must include blood glucose threshold configuration in the body",
        )
        .into());
    };

    let tag = request.prandial_tag_id.as_deref().unwrap_or("");
    match (request.blood_glucose_value, tag) {
        (Some(value), tag) if !tag.is_empty() => {
            Ok((value, tag.to_string(), Thresholds::from_config(config)))
        }
        _ => Err(ValidationError::new(
            "Must have a blood glucose value and prandial tag",
            "Must include a valid blood glucose value and prandial tag in the body",
        )
        .into()),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
