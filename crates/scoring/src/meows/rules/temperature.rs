//! MEOWS scoring for temperature.
//!
//! 2: temp < 35.5 deg C
//! 0: temp 35.5-37.5 deg C
//! 2: temp 37.6-38.0 deg C
//! 8: temp >= 38.1 deg C

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "temperatureScore",
            2,
            Condition::any(vec![
                Condition::cmp("temperature", Operator::LessThan, num(3545, 2)),
                Condition::all(vec![
                    Condition::cmp("temperature", Operator::GreaterThanInclusive, num(3755, 2)),
                    Condition::cmp("temperature", Operator::LessThan, num(3805, 2)),
                ]),
            ]),
        ),
        score_rule(
            "temperatureScore",
            8,
            Condition::all(vec![Condition::cmp(
                "temperature",
                Operator::GreaterThanInclusive,
                num(3805, 2),
            )]),
        ),
        score_rule(
            "temperatureScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("temperature", Operator::GreaterThanInclusive, num(3545, 2)),
                    Condition::cmp("temperature", Operator::LessThan, num(3755, 2)),
                ]),
                Condition::cmp("temperature", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
