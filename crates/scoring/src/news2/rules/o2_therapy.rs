//! NEWS2 scoring for supplemental O2 therapy.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! 0: O2 flow rate 0 L/min
//! 2: O2 flow rate > 0 L/min

use crate::rules_shared::score_rule;
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "o2TherapyScore",
            2,
            Condition::any(vec![Condition::cmp(
                "o2Therapy",
                Operator::GreaterThan,
                0i64,
            )]),
        ),
        score_rule(
            "o2TherapyScore",
            0,
            Condition::any(vec![
                Condition::cmp("o2Therapy", Operator::Equal, 0i64),
                Condition::cmp("o2Therapy", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
