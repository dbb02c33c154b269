//! MEOWS scoring for consciousness.
//!
//! 0: ACVPU of A
//! 2: ACVPU of C
//! 8: ACVPU of V/P/U

use crate::rules_shared::score_rule;
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "consciousnessScore",
            0,
            Condition::any(vec![
                Condition::cmp("consciousnessAcvpu", Operator::Equal, "alert"),
                Condition::cmp("consciousnessAcvpu", Operator::Equal, Value::Undefined),
            ]),
        ),
        score_rule(
            "consciousnessScore",
            2,
            Condition::any(vec![Condition::cmp(
                "consciousnessAcvpu",
                Operator::Equal,
                "confusion",
            )]),
        ),
        score_rule(
            "consciousnessScore",
            8,
            Condition::any(vec![
                Condition::cmp("consciousnessAcvpu", Operator::Equal, "voice"),
                Condition::cmp("consciousnessAcvpu", Operator::Equal, "pain"),
                Condition::cmp("consciousnessAcvpu", Operator::Equal, "unresponsive"),
            ]),
        ),
    ]
}
