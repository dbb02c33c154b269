//! OBX segment parameters for HL7 ORU messages built from this set.
//!
//! Abnormal-flags code:
//! N: score 0-4 AND no individual score of 3
//! HIGH: score 5-6 OR an individual score of 3
//! EXTHIGH: score >= 7

use crate::rules_shared::{num, PRIORITY_DERIVED};
use wardscore_engine::{Condition, Event, Operator, Rule};

const COMPONENT_SCORES: [&str; 7] = [
    "bloodPressureScore",
    "consciousnessScore",
    "heartRateScore",
    "o2TherapyScore",
    "oxygenSaturationScore",
    "respiratoryRateScore",
    "temperatureScore",
];

const REFERENCE_RANGE: &str = "0-4";

fn obx_event(abnormal_flags: &str) -> Event {
    Event::new("obxParameters")
        .with_param("abnormalFlags", abnormal_flags)
        .with_param("referenceRange", REFERENCE_RANGE)
}

pub(super) fn rules() -> Vec<Rule> {
    let mut normal_conditions = vec![Condition::cmp("overallScore", Operator::LessThan, num(45, 1))];
    normal_conditions.extend(
        COMPONENT_SCORES
            .iter()
            .map(|fact| Condition::cmp(*fact, Operator::LessThan, 3i64)),
    );

    vec![
        Rule::new(Condition::all(normal_conditions), obx_event("N")).with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("overallScore", Operator::GreaterThanInclusive, num(45, 1)),
                    Condition::cmp("overallScore", Operator::LessThan, num(65, 1)),
                ]),
                Condition::all(vec![
                    Condition::cmp("overallScore", Operator::LessThan, num(45, 1)),
                    Condition::any(
                        COMPONENT_SCORES
                            .iter()
                            .map(|fact| {
                                Condition::cmp(*fact, Operator::GreaterThanInclusive, 3i64)
                            })
                            .collect(),
                    ),
                ]),
            ]),
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
