//! MEOWS scoring for respiratory rate.
//!
//! 8: RR <= 10 per min
//! 0: RR 11-20 per min
//! 2: RR 21-30 per min
//! 8: RR >= 31 per min

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "respiratoryRateScore",
            8,
            Condition::any(vec![
                Condition::cmp("respiratoryRate", Operator::LessThan, num(105, 1)),
                Condition::cmp("respiratoryRate", Operator::GreaterThanInclusive, num(305, 1)),
            ]),
        ),
        score_rule(
            "respiratoryRateScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("respiratoryRate", Operator::GreaterThanInclusive, num(105, 1)),
                    Condition::cmp("respiratoryRate", Operator::LessThan, num(205, 1)),
                ]),
                Condition::cmp("respiratoryRate", Operator::Equal, Value::Undefined),
            ]),
        ),
        score_rule(
            "respiratoryRateScore",
            2,
            Condition::all(vec![
                Condition::cmp("respiratoryRate", Operator::GreaterThanInclusive, num(205, 1)),
                Condition::cmp("respiratoryRate", Operator::LessThan, num(305, 1)),
            ]),
        ),
    ]
}
