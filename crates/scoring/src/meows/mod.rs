//! Six-factor (MEOWS) scoring pipeline: default, validate, normalise,
//! evaluate, fold.

mod rules;

use crate::acvpu::normalise_acvpu;
use crate::error::ScoreError;
use crate::inputs::{num_or_undefined, str_or_undefined, MeowsRequest};
use crate::response::{param_i64, CommonEvents, MeowsResponse};
use crate::rules_shared::register_overall_score;
use crate::validate::{validate_intervals, validate_timestamp, ObsContext};
use std::collections::HashMap;
use wardscore_engine::{Almanac, Engine, Event, Value};

/// Score a six-factor observation set.
pub fn calculate_meows(request: &MeowsRequest) -> Result<MeowsResponse, ScoreError> {
    let recorded = validate_timestamp(request.time.as_deref())?;
    let intervals = validate_intervals(&request.config)?;
    let ctx = ObsContext {
        recorded,
        intervals,
    };

    let mut almanac = Almanac::new(facts(request)?);
    register_overall_score(&mut almanac, &rules::SCORING_ELEMENTS);

    let engine = Engine::new(rules::rules());
    let events = engine.run(&mut almanac)?;
    fold_events(&events, &ctx)
}

fn facts(request: &MeowsRequest) -> Result<HashMap<String, Value>, ScoreError> {
    let consciousness = normalise_acvpu(&str_or_undefined(
        request.consciousness_acvpu.as_deref(),
    ))?;

    Ok(HashMap::from([
        (
            "respiratoryRate".to_string(),
            num_or_undefined(request.respiratory_rate),
        ),
        ("heartRate".to_string(), num_or_undefined(request.heart_rate)),
        (
            "oxygenSaturation".to_string(),
            num_or_undefined(request.oxygen_saturation),
        ),
        (
            "systolicBloodPressure".to_string(),
            num_or_undefined(request.systolic_blood_pressure),
        ),
        (
            "diastolicBloodPressure".to_string(),
            num_or_undefined(request.diastolic_blood_pressure),
        ),
        ("consciousnessAcvpu".to_string(), consciousness),
        (
            "temperature".to_string(),
            num_or_undefined(request.temperature),
        ),
        (
            "nurseConcern".to_string(),
            str_or_undefined(request.nurse_concern.as_deref()),
        ),
    ]))
}

fn fold_events(events: &[Event], ctx: &ObsContext) -> Result<MeowsResponse, ScoreError> {
    let mut common = CommonEvents::new();
    let mut respiratory_rate_score = 0;
    let mut oxygen_saturation_score = 0;
    let mut systolic_blood_pressure_score = 0;
    let mut diastolic_blood_pressure_score = 0;
    let mut heart_rate_score = 0;
    let mut consciousness_score = 0;
    let mut temperature_score = 0;

    for event in events {
        match event.kind.as_str() {
            "respiratoryRateScore" => respiratory_rate_score = param_i64(event, "value")?,
            "oxygenSaturationScore" => oxygen_saturation_score = param_i64(event, "value")?,
            "systolicBloodPressureScore" => {
                systolic_blood_pressure_score = param_i64(event, "value")?;
            }
            "diastolicBloodPressureScore" => {
                diastolic_blood_pressure_score = param_i64(event, "value")?;
            }
            "heartRateScore" => heart_rate_score = param_i64(event, "value")?,
            "consciousnessScore" => consciousness_score = param_i64(event, "value")?,
            "temperatureScore" => temperature_score = param_i64(event, "value")?,
            _ => {
                if !common.apply(event, ctx)? {
                    return Err(ScoreError::UnexpectedEventType(event.kind.clone()));
                }
            }
        }
    }

    let overall_score = respiratory_rate_score
        + oxygen_saturation_score
        + systolic_blood_pressure_score
        + diastolic_blood_pressure_score
        + heart_rate_score
        + consciousness_score
        + temperature_score;

    Ok(MeowsResponse {
        partial_set: common.partial_set,
        empty_set: common.empty_set_flag(),
        overall_score,
        respiratory_rate_score,
        oxygen_saturation_score,
        systolic_blood_pressure_score,
        diastolic_blood_pressure_score,
        heart_rate_score,
        consciousness_score,
        temperature_score,
        overall_score_display: common.score_display(overall_score),
        ranking: common.ranking(overall_score, ctx.recorded),
        overall_severity: common.overall_severity,
        time_next_obs_set_due: common.time_next_obs_set_due,
        obx_reference_range: common.obx_reference_range,
        obx_abnormal_flags: common.obx_abnormal_flags,
        monitoring_instruction: common.monitoring_instruction,
    })
}
