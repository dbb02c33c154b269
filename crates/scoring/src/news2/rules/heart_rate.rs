//! NEWS2 scoring for heart rate.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! 3: HR <= 40 bpm
//! 1: HR 41-50 bpm
//! 0: HR 51-90 bpm
//! 1: HR 91-110 bpm
//! 2: HR 111-130 bpm
//! 3: HR >= 131 bpm

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "heartRateScore",
            3,
            Condition::any(vec![
                Condition::cmp("heartRate", Operator::LessThan, num(405, 1)),
                Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(1305, 1)),
            ]),
        ),
        score_rule(
            "heartRateScore",
            2,
            Condition::all(vec![
                Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(1105, 1)),
                Condition::cmp("heartRate", Operator::LessThan, num(1305, 1)),
            ]),
        ),
        score_rule(
            "heartRateScore",
            1,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(405, 1)),
                    Condition::cmp("heartRate", Operator::LessThan, num(505, 1)),
                ]),
                Condition::all(vec![
                    Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(905, 1)),
                    Condition::cmp("heartRate", Operator::LessThan, num(1105, 1)),
                ]),
            ]),
        ),
        score_rule(
            "heartRateScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(505, 1)),
                    Condition::cmp("heartRate", Operator::LessThan, num(905, 1)),
                ]),
                Condition::cmp("heartRate", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
