//! The complete MEOWS rule table.

mod consciousness;
mod diastolic_blood_pressure;
mod heart_rate;
mod overall_obx;
mod overall_severity;
mod oxygen_saturation;
mod respiratory_rate;
mod systolic_blood_pressure;
mod temperature;

use crate::rules_shared::{
    empty_set_rules, interval_rules, monitoring_instruction_rules, nurse_concern_rules,
    partial_set_rules,
};
use wardscore_engine::Rule;

/// The component-score facts summed into `overallScore`.
pub(crate) const SCORING_ELEMENTS: [&str; 7] = [
    "respiratoryRateScore",
    "oxygenSaturationScore",
    "systolicBloodPressureScore",
    "diastolicBloodPressureScore",
    "heartRateScore",
    "consciousnessScore",
    "temperatureScore",
];

/// Observations whose collective absence makes the set empty.
const EMPTY_SET_FACTS: [&str; 8] = [
    "respiratoryRate",
    "heartRate",
    "oxygenSaturation",
    "systolicBloodPressure",
    "diastolicBloodPressure",
    "consciousnessAcvpu",
    "temperature",
    "nurseConcern",
];

/// Scored observations; any one missing makes the set partial.
const PARTIAL_SET_FACTS: [&str; 7] = [
    "respiratoryRate",
    "oxygenSaturation",
    "systolicBloodPressure",
    "diastolicBloodPressure",
    "heartRate",
    "consciousnessAcvpu",
    "temperature",
];

/// Build the full rule table, fresh per request.
pub(crate) fn rules() -> Vec<Rule> {
    [
        respiratory_rate::rules(),
        oxygen_saturation::rules(),
        diastolic_blood_pressure::rules(),
        systolic_blood_pressure::rules(),
        heart_rate::rules(),
        consciousness::rules(),
        temperature::rules(),
        nurse_concern_rules(),
        partial_set_rules(&PARTIAL_SET_FACTS),
        empty_set_rules(&EMPTY_SET_FACTS),
        overall_severity::rules(),
        interval_rules(),
        monitoring_instruction_rules(),
        overall_obx::rules(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
