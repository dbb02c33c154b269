//! NEWS2 scoring for respiratory rate.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! 3: RR <= 8 per min
//! 1: RR 9-11 per min
//! 0: RR 12-20 per min
//! 2: RR 21-24 per min
//! 3: RR >= 25 per min

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "respiratoryRateScore",
            3,
            Condition::any(vec![
                Condition::cmp("respiratoryRate", Operator::LessThan, num(85, 1)),
                Condition::cmp("respiratoryRate", Operator::GreaterThanInclusive, num(245, 1)),
            ]),
        ),
        score_rule(
            "respiratoryRateScore",
            2,
            Condition::all(vec![
                Condition::cmp("respiratoryRate", Operator::GreaterThanInclusive, num(205, 1)),
                Condition::cmp("respiratoryRate", Operator::LessThan, num(245, 1)),
            ]),
        ),
        score_rule(
            "respiratoryRateScore",
            1,
            Condition::all(vec![
                Condition::cmp("respiratoryRate", Operator::GreaterThan, num(85, 1)),
                Condition::cmp("respiratoryRate", Operator::LessThanInclusive, num(115, 1)),
            ]),
        ),
        score_rule(
            "respiratoryRateScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("respiratoryRate", Operator::GreaterThan, num(115, 1)),
                    Condition::cmp("respiratoryRate", Operator::LessThanInclusive, num(205, 1)),
                ]),
                Condition::cmp("respiratoryRate", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
