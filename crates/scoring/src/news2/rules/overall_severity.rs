//! NEWS2 severity from the component scores.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! low: score 0-4 AND no individual score of 3 AND no nurse concern
//! low-medium: score 0-4 AND an individual score of 3 AND no nurse concern
//! medium: score 5-6 AND no nurse concern
//! high: score >= 7 OR any nurse concern

use crate::rules_shared::{num, severity_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

const COMPONENT_SCORES: [&str; 7] = [
    "bloodPressureScore",
    "consciousnessScore",
    "heartRateScore",
    "o2TherapyScore",
    "oxygenSaturationScore",
    "respiratoryRateScore",
    "temperatureScore",
];

fn no_nurse_concern() -> Condition {
    Condition::cmp("nurseConcern", Operator::Equal, Value::Undefined)
}

fn every_component_below_three() -> Vec<Condition> {
    COMPONENT_SCORES
        .iter()
        .map(|fact| Condition::cmp(*fact, Operator::LessThan, 3i64))
        .collect()
}

fn any_component_at_three() -> Condition {
    Condition::any(
        COMPONENT_SCORES
            .iter()
            .map(|fact| Condition::cmp(*fact, Operator::GreaterThanInclusive, 3i64))
            .collect(),
    )
}

pub(super) fn rules() -> Vec<Rule> {
    let mut low_conditions = vec![
        no_nurse_concern(),
        Condition::cmp("overallScore", Operator::LessThan, num(45, 1)),
    ];
    low_conditions.extend(every_component_below_three());

    vec![
        severity_rule("low", Condition::all(low_conditions)),
        severity_rule(
            "low-medium",
            Condition::all(vec![
                no_nurse_concern(),
                Condition::cmp("overallScore", Operator::LessThan, num(45, 1)),
                any_component_at_three(),
            ]),
        ),
        severity_rule(
            "medium",
            Condition::all(vec![
                no_nurse_concern(),
                Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(45, 1)),
                Condition::cmp("overallScore", Operator::LessThan, num(65, 1)),
            ]),
        ),
        severity_rule(
            "high",
            Condition::any(vec![
                Condition::cmp("nurseConcern", Operator::NotEqual, Value::Undefined),
                Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(65, 1)),
            ]),
        ),
    ]
}
