//! NEWS2 scoring for consciousness.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! 0: ACVPU of A
//! 3: ACVPU of C/V/P/U

use crate::rules_shared::score_rule;
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "consciousnessScore",
            3,
            Condition::any(vec![Condition::cmp(
                "consciousnessAcvpu",
                Operator::NotEqual,
                "alert",
            )]),
        ),
        score_rule(
            "consciousnessScore",
            0,
            Condition::any(vec![
                Condition::cmp("consciousnessAcvpu", Operator::Equal, "alert"),
                Condition::cmp("consciousnessAcvpu", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
