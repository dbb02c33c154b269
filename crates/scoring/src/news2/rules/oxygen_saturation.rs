//! NEWS2 scoring for SpO2 saturation.
//!
//! <https://www.rcplondon.ac.uk/projects/outputs/national-early-warning-score-news-2>
//!
//! SpO2 scale 1:
//! 3: SpO2 <= 91 %
//! 2: SpO2 92-93 %
//! 1: SpO2 94-95 %
//! 0: SpO2 >= 96 %
//!
//! SpO2 scale 2 (hypercapnic respiratory failure):
//! 3: SpO2 <= 83 %
//! 2: SpO2 84-85 %
//! 1: SpO2 86-87 %
//! 0: SpO2 88-92 % (and also >= 93 % if on air)
//! 1: SpO2 93-94 % AND on O2 therapy
//! 2: SpO2 95-96 % AND on O2 therapy
//! 3: SpO2 >= 97 % AND on O2 therapy

use crate::rules_shared::{num, score_rule};
use wardscore_engine::{Condition, Operator, Rule, Value};

fn on_scale(scale: i64) -> Condition {
    Condition::cmp("spo2Scale", Operator::Equal, scale)
}

fn on_o2_therapy() -> Condition {
    Condition::cmp("o2Therapy", Operator::GreaterThan, 0i64)
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "oxygenSaturationScore",
            3,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(915, 1)),
                    on_scale(1),
                ]),
                Condition::all(vec![
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(835, 1)),
                    on_scale(2),
                ]),
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(965, 1),
                    ),
                    on_scale(2),
                    on_o2_therapy(),
                ]),
            ]),
        ),
        score_rule(
            "oxygenSaturationScore",
            2,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(915, 1),
                    ),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(935, 1)),
                    on_scale(1),
                ]),
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(835, 1),
                    ),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(855, 1)),
                    on_scale(2),
                ]),
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(945, 1),
                    ),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(965, 1)),
                    on_scale(2),
                    on_o2_therapy(),
                ]),
            ]),
        ),
        score_rule(
            "oxygenSaturationScore",
            1,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(935, 1),
                    ),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(955, 1)),
                    on_scale(1),
                ]),
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(855, 1),
                    ),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(875, 1)),
                    on_scale(2),
                ]),
                Condition::all(vec![
                    Condition::cmp("oxygenSaturation", Operator::GreaterThan, num(925, 1)),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(945, 1)),
                    on_scale(2),
                    on_o2_therapy(),
                ]),
            ]),
        ),
        score_rule(
            "oxygenSaturationScore",
            0,
            Condition::any(vec![
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(955, 1),
                    ),
                    on_scale(1),
                ]),
                Condition::all(vec![
                    Condition::cmp(
                        "oxygenSaturation",
                        Operator::GreaterThanInclusive,
                        num(875, 1),
                    ),
                    Condition::cmp("oxygenSaturation", Operator::LessThan, num(925, 1)),
                    on_scale(2),
                ]),
                Condition::any(vec![
                    Condition::all(vec![
                        Condition::cmp(
                            "oxygenSaturation",
                            Operator::GreaterThanInclusive,
                            num(925, 1),
                        ),
                        on_scale(2),
                        Condition::any(vec![
                            Condition::cmp("o2Therapy", Operator::Equal, 0i64),
                            Condition::cmp("o2Therapy", Operator::Equal, Value::Undefined),
                        ]),
                    ]),
                    Condition::cmp("oxygenSaturation", Operator::Equal, Value::Undefined),
                ]),
            ]),
        ),
    ]
}
