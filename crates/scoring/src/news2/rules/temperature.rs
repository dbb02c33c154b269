//! NEWS2 scoring for temperature.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! 3: temp <= 35.0 deg C
//! 1: temp 35.1-36.0 deg C
//! 0: temp 36.1-38.0 deg C
//! 1: temp 38.1-39.0 deg C
//! 2: temp >= 39.1 deg C

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "temperatureScore",
            3,
            Condition::any(vec![Condition::cmp(
                "temperature",
                Operator::LessThan,
                num(3505, 2),
            )]),
        ),
        score_rule(
            "temperatureScore",
            2,
            Condition::all(vec![Condition::cmp(
                "temperature",
                Operator::GreaterThanInclusive,
                num(3905, 2),
            )]),
        ),
        score_rule(
            "temperatureScore",
            1,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("temperature", Operator::GreaterThanInclusive, num(3505, 2)),
                    Condition::cmp("temperature", Operator::LessThan, num(3605, 2)),
                ]),
                Condition::all(vec![
                    Condition::cmp("temperature", Operator::GreaterThanInclusive, num(3805, 2)),
                    Condition::cmp("temperature", Operator::LessThan, num(3905, 2)),
                ]),
            ]),
        ),
        score_rule(
            "temperatureScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("temperature", Operator::GreaterThanInclusive, num(3605, 2)),
                    Condition::cmp("temperature", Operator::LessThan, num(3805, 2)),
                ]),
                Condition::cmp("temperature", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
