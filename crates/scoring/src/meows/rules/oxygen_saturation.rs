//! MEOWS scoring for SpO2 saturation.
//!
//! 8: SpO2 <= 91 %
//! 2: SpO2 92-95 %
//! 0: SpO2 >= 96 %

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "oxygenSaturationScore",
            8,
            Condition::all(vec![Condition::cmp(
                "oxygenSaturation",
                Operator::LessThan,
                num(915, 1),
            )]),
        ),
        score_rule(
            "oxygenSaturationScore",
            2,
            Condition::all(vec![
                Condition::cmp(
                    "oxygenSaturation",
                    Operator::GreaterThanInclusive,
                    num(915, 1),
                ),
                Condition::cmp("oxygenSaturation", Operator::LessThan, num(955, 1)),
            ]),
        ),
        score_rule(
            "oxygenSaturationScore",
            0,
            Condition::any(vec![
                Condition::cmp(
                    "oxygenSaturation",
                    Operator::GreaterThanInclusive,
                    num(955, 1),
                ),
                Condition::cmp("oxygenSaturation", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
