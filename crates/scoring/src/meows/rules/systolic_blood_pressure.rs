//! MEOWS scoring for systolic blood pressure.
//!
//! 8: SBP < 90 mmHg
//! 2: SBP 90-100 mmHg
//! 0: SBP 101-150 mmHg
//! 2: SBP 151-160 mmHg
//! 8: SBP > 160 mmHg

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "systolicBloodPressureScore",
            8,
            Condition::any(vec![
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(895, 1)),
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(1605, 1),
                ),
            ]),
        ),
        score_rule(
            "systolicBloodPressureScore",
            2,
            Condition::all(vec![
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(895, 1),
                ),
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(1005, 1)),
            ]),
        ),
        score_rule(
            "systolicBloodPressureScore",
            0,
            Condition::all(vec![
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(1005, 1),
                ),
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(1505, 1)),
            ]),
        ),
        score_rule(
            "systolicBloodPressureScore",
            0,
            Condition::any(vec![Condition::cmp(
                "systolicBloodPressure",
                Operator::Equal,
                Value::Undefined,
            )]),
        ),
        score_rule(
            "systolicBloodPressureScore",
            2,
            Condition::all(vec![
                Condition::cmp(
                    "systolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(1505, 1),
                ),
                Condition::cmp("systolicBloodPressure", Operator::LessThan, num(1605, 1)),
            ]),
        ),
    ]
}
