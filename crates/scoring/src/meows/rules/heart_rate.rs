//! MEOWS scoring for heart rate.
//!
//! 8: HR <= 40 bpm
//! 2: HR 41-60 bpm
//! 0: HR 61-100 bpm
//! 2: HR 101-120 bpm
//! 8: HR > 120 bpm

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "heartRateScore",
            8,
            Condition::any(vec![
                Condition::cmp("heartRate", Operator::LessThan, num(405, 1)),
                Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(1205, 1)),
            ]),
        ),
        score_rule(
            "heartRateScore",
            0,
            Condition::any(vec![
                Condition::cmp("heartRate", Operator::Equal, Value::Undefined),
                Condition::all(vec![
                    Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(605, 1)),
                    Condition::cmp("heartRate", Operator::LessThan, num(1005, 1)),
                ]),
            ]),
        ),
        score_rule(
            "heartRateScore",
            2,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(405, 1)),
                    Condition::cmp("heartRate", Operator::LessThan, num(605, 1)),
                ]),
                Condition::all(vec![
                    Condition::cmp("heartRate", Operator::GreaterThanInclusive, num(1005, 1)),
                    Condition::cmp("heartRate", Operator::LessThan, num(1205, 1)),
                ]),
            ]),
        ),
    ]
}
