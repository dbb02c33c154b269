//! The complete NEWS2 rule table.

mod blood_pressure;
mod consciousness;
mod heart_rate;
mod o2_therapy;
mod overall_obx;
mod overall_severity;
mod oxygen_saturation;
mod respiratory_rate;
mod temperature;

use crate::rules_shared::{
    empty_set_rules, interval_rules, monitoring_instruction_rules, nurse_concern_rules,
    partial_set_rules,
};
use wardscore_engine::Rule;

/// The component-score facts summed into `overallScore`.
pub(crate) const SCORING_ELEMENTS: [&str; 7] = [
    "oxygenSaturationScore",
    "respiratoryRateScore",
    "o2TherapyScore",
    "bloodPressureScore",
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
    "o2Therapy",
    "consciousnessAcvpu",
    "temperature",
    "nurseConcern",
];

/// Scored observations; any one missing makes the set partial.
const PARTIAL_SET_FACTS: [&str; 7] = [
    "respiratoryRate",
    "oxygenSaturation",
    "o2Therapy",
    "systolicBloodPressure",
    "heartRate",
    "consciousnessAcvpu",
    "temperature",
];

/// Build the full rule table, fresh per request.
pub(crate) fn rules() -> Vec<Rule> {
    [
        respiratory_rate::rules(),
        oxygen_saturation::rules(),
        o2_therapy::rules(),
        blood_pressure::rules(),
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
