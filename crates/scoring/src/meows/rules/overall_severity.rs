//! MEOWS severity from the aggregate score.
//!
//! low: score 0 AND no nurse concern
//! low-medium: score 2 AND no nurse concern
//! medium: score 4-6 AND no nurse concern
//! high: score >= 7 OR any nurse concern

use crate::rules_shared::{num, severity_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

fn no_nurse_concern() -> Condition {
    Condition::cmp("nurseConcern", Operator::Equal, Value::Undefined)
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        severity_rule(
            "low",
            Condition::all(vec![
                no_nurse_concern(),
                Condition::cmp("overallScore", Operator::LessThan, num(15, 1)),
            ]),
        ),
        severity_rule(
            "low-medium",
            Condition::all(vec![
                no_nurse_concern(),
                Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(15, 1)),
                Condition::cmp("overallScore", Operator::LessThan, num(35, 1)),
            ]),
        ),
        severity_rule(
            "medium",
            Condition::all(vec![
                no_nurse_concern(),
                Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(35, 1)),
                Condition::cmp("overallScore", Operator::LessThan, num(65, 1)),
            ]),
        ),
        severity_rule(
            "high",
            Condition::any(vec![
                Condition::cmp("nurseConcern", Operator::NotEqual, Value::Undefined),
                Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(65, 1)),
            ]),
        ),
    ]
}
