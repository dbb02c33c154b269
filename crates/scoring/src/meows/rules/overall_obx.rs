//! OBX segment parameters for HL7 ORU messages built from this set.
//!
//! Abnormal-flags code:
//! N: score 0
//! HIGH: score 2-6
//! EXTHIGH: score >= 7

use crate::rules_shared::{num, PRIORITY_DERIVED};
use wardscore_engine::{Condition, Event, Operator, Rule};

const REFERENCE_RANGE: &str = "0";

fn obx_event(abnormal_flags: &str) -> Event {
    Event::new("obxParameters")
        .with_param("abnormalFlags", abnormal_flags)
        .with_param("referenceRange", REFERENCE_RANGE)
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "overallScore",
                Operator::LessThan,
                num(15, 1),
            )]),
            obx_event("N"),
        )
        .with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::any(vec![Condition::all(vec![
                Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(15, 1)),
                Condition::cmp("overallScore", Operator::LessThan, num(65, 1)),
            ])]),
            obx_event("HIGH"),
        )
        .with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::any(vec![Condition::cmp(
                "overallScore",
                Operator::GreaterThanInclusive,
                num(65, 1),
            )]),
            obx_event("EXTHIGH"),
        )
        .with_priority(PRIORITY_DERIVED),
    ]
}
