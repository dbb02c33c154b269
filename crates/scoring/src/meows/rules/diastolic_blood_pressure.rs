//! MEOWS scoring for diastolic blood pressure.
//!
//! 2: DBP < 40 mmHg
//! 0: DBP 40-100 mmHg
//! 2: DBP 101-110 mmHg
//! 8: DBP > 110 mmHg

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "diastolicBloodPressureScore",
            2,
            Condition::any(vec![Condition::cmp(
                "diastolicBloodPressure",
                Operator::LessThan,
                num(395, 1),
            )]),
        ),
        score_rule(
            "diastolicBloodPressureScore",
            8,
            Condition::all(vec![Condition::cmp(
                "diastolicBloodPressure",
                Operator::GreaterThanInclusive,
                num(1105, 1),
            )]),
        ),
        score_rule(
            "diastolicBloodPressureScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp(
                        "diastolicBloodPressure",
                        Operator::GreaterThanInclusive,
                        num(395, 1),
                    ),
                    Condition::cmp("diastolicBloodPressure", Operator::LessThan, num(1005, 1)),
                ]),
                Condition::cmp("diastolicBloodPressure", Operator::Equal, Value::Undefined),
            ]),
        ),
        score_rule(
            "diastolicBloodPressureScore",
            2,
            Condition::all(vec![
                Condition::cmp(
                    "diastolicBloodPressure",
                    Operator::GreaterThanInclusive,
                    num(1005, 1),
                ),
                Condition::cmp("diastolicBloodPressure", Operator::LessThan, num(1105, 1)),
            ]),
        ),
    ]
}
