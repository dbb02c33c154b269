//! Tiered-evaluation integration test: component rules publish score facts,
//! an aggregate derivation sums them on demand, and lower-priority rules
//! dispatch on the aggregate.

use rust_decimal::Decimal;
use std::collections::HashMap;
use wardscore_engine::{Almanac, Condition, Engine, Event, Operator, Rule, Value};

fn num(i: i64) -> Value {
    Value::Num(Decimal::from(i))
}

fn score_rule(kind: &str, score: i64, conditions: Condition) -> Rule {
    Rule::new(conditions, Event::new(kind).with_param("value", score))
        .with_priority(100)
        .publish("value")
}

/// Two components score a reading each; an alarm rule reads their derived
/// sum; a label rule reads the alarm's published level.
fn rules() -> Vec<Rule> {
    vec![
        score_rule(
            "pressureScore",
            2,
            Condition::any(vec![Condition::cmp(
                "pressure",
                Operator::GreaterThanInclusive,
                Value::Num(Decimal::new(1805, 1)),
            )]),
        ),
        score_rule(
            "pressureScore",
            0,
            Condition::any(vec![
                Condition::cmp("pressure", Operator::LessThan, Value::Num(Decimal::new(1805, 1))),
                Condition::cmp("pressure", Operator::Equal, Value::Undefined),
            ]),
        ),
        score_rule(
            "rateScore",
            1,
            Condition::any(vec![Condition::cmp(
                "rate",
                Operator::GreaterThan,
                100i64,
            )]),
        ),
        score_rule(
            "rateScore",
            0,
            Condition::any(vec![
                Condition::cmp("rate", Operator::LessThanInclusive, 100i64),
                Condition::cmp("rate", Operator::Equal, Value::Undefined),
            ]),
        ),
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "totalScore",
                Operator::GreaterThanInclusive,
                3i64,
            )]),
            Event::new("alarmLevel").with_param("value", "urgent"),
        )
        .with_priority(10)
        .publish("value"),
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "totalScore",
                Operator::LessThan,
                3i64,
            )]),
            Event::new("alarmLevel").with_param("value", "routine"),
        )
        .with_priority(10)
        .publish("value"),
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "alarmLevel",
                Operator::Equal,
                "urgent",
            )]),
            Event::new("escalate"),
        ),
    ]
}

fn almanac(facts: &[(&str, Value)]) -> Almanac {
    let mut almanac = Almanac::new(
        facts
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<HashMap<_, _>>(),
    );
    almanac.add_derivation("totalScore", |alm| {
        let mut sum = Decimal::ZERO;
        for name in ["pressureScore", "rateScore"] {
            sum += alm.value_of(name)?.as_num().unwrap_or_default();
        }
        Ok(Value::Num(sum))
    });
    almanac
}

#[test]
fn abnormal_readings_escalate() {
    let engine = Engine::new(rules());
    let mut almanac = almanac(&[("pressure", num(190)), ("rate", num(120))]);

    let events = engine.run(&mut almanac).unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["pressureScore", "rateScore", "alarmLevel", "escalate"]);
    assert_eq!(
        events[2].param("value").and_then(|v| v.as_str()),
        Some("urgent")
    );
}

#[test]
fn normal_readings_stay_routine() {
    let engine = Engine::new(rules());
    let mut almanac = almanac(&[("pressure", num(120)), ("rate", num(70))]);

    let events = engine.run(&mut almanac).unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["pressureScore", "rateScore", "alarmLevel"]);
}

#[test]
fn unsupplied_readings_take_their_sentinel_branch() {
    let engine = Engine::new(rules());
    let mut almanac = almanac(&[
        ("pressure", Value::Undefined),
        ("rate", Value::Undefined),
    ]);

    let events = engine.run(&mut almanac).unwrap();
    assert!(events.iter().all(|e| e.kind != "escalate"));
    assert_eq!(almanac.value_of("totalScore").unwrap(), num(0));
}

#[test]
fn independent_almanacs_are_isolated() {
    // The same engine instance serves unrelated runs; nothing leaks.
    let engine = Engine::new(rules());

    let mut first = almanac(&[("pressure", num(190)), ("rate", num(120))]);
    engine.run(&mut first).unwrap();

    let mut second = almanac(&[("pressure", num(120)), ("rate", num(70))]);
    let events = engine.run(&mut second).unwrap();
    assert_eq!(second.value_of("alarmLevel").unwrap(), Value::from("routine"));
    assert!(events.iter().all(|e| e.kind != "escalate"));
}
