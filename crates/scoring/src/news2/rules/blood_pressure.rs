//! NEWS2 scoring for systolic blood pressure.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! 3: SBP <= 90 mmHg
//! 2: SBP 91-100 mmHg
//! 1: SBP 101-110 mmHg
//! 0: SBP 111-219 mmHg
//! 3: SBP >= 220 mmHg

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "bloodPressureScore",
            3,
            Condition::any(vec![
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(905, 1)),
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(2195, 1),
                ),
            ]),
        ),
        score_rule(
            "bloodPressureScore",
            2,
            Condition::all(vec![
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(905, 1),
                ),
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(1005, 1)),
            ]),
        ),
        score_rule(
            "bloodPressureScore",
            1,
            Condition::all(vec![
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(1005, 1),
                ),
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(1105, 1)),
            ]),
        ),
        score_rule(
            "bloodPressureScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp(
                        "systolicBloodPressure",
                        Operator::GreaterThanInclusive,
                        num(1105, 1),
                    ),
                    Condition::cmp("systolicBloodPressure", Operator::LessThan, num(2195, 1)),
                ]),
                Condition::cmp("systolicBloodPressure", Operator::Equal, Value::Undefined),
            ]),
        ),
    ]
}
