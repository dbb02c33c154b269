//! Rule builders shared by both scoring variants.
//!
//! Three priority tiers run the pipeline: component scores at 100 (each
//! publishes its score as a runtime fact), the severity aggregate at 10,
//! and the derived-instruction rules (interval, monitoring, completeness,
//! OBX) at 1.

use rust_decimal::Decimal;
use wardscore_engine::{Condition, Event, Operator, Rule, Value};

pub(crate) const PRIORITY_COMPONENT: i32 = 100;
pub(crate) const PRIORITY_AGGREGATE: i32 = 10;
pub(crate) const PRIORITY_DERIVED: i32 = 1;

/// Exact decimal literal: `num(405, 1)` is 40.5.
pub(crate) fn num(mantissa: i64, scale: u32) -> Value {
    Value::Num(Decimal::new(mantissa, scale))
}

/// A component scoring rule: fires at component priority and publishes its
/// score value so the aggregate tier can read it.
pub(crate) fn score_rule(kind: &str, score: i64, conditions: Condition) -> Rule {
    Rule::new(conditions, Event::new(kind).with_param("value", score))
        .with_priority(PRIORITY_COMPONENT)
        .publish("value")
}

/// A severity rule: fires at aggregate priority and publishes its band
/// label so the interval/monitoring tier can read it.
pub(crate) fn severity_rule(level: &str, conditions: Condition) -> Rule {
    Rule::new(
        conditions,
        Event::new("overallSeverity").with_param("value", level),
    )
    .with_priority(PRIORITY_AGGREGATE)
    .publish("value")
}

/// Nurse concern does not feed the score; its event flips the displayed
/// score (e.g. `1` to `1C`) and forces high severity.
pub(crate) fn nurse_concern_rules() -> Vec<Rule> {
    vec![Rule::new(
        Condition::any(vec![Condition::cmp(
            "nurseConcern",
            Operator::NotEqual,
            Value::Undefined,
        )]),
        Event::new("applyNurseConcern"),
    )
    .with_priority(PRIORITY_COMPONENT)]
}

/// A set with every listed observation unsupplied is empty -- displayed as
/// `--` rather than a score of 0.
pub(crate) fn empty_set_rules(observation_facts: &[&str]) -> Vec<Rule> {
    let all_undefined = observation_facts
        .iter()
        .map(|fact| Condition::cmp(*fact, Operator::Equal, Value::Undefined))
        .collect();

    vec![
        Rule::new(Condition::all(all_undefined), Event::new("applyEmptySet"))
            .with_priority(PRIORITY_DERIVED),
    ]
}

/// A set with any scored observation unsupplied is partial.
pub(crate) fn partial_set_rules(observation_facts: &[&str]) -> Vec<Rule> {
    let any_undefined = observation_facts
        .iter()
        .map(|fact| Condition::cmp(*fact, Operator::Equal, Value::Undefined))
        .collect();

    vec![
        Rule::new(Condition::any(any_undefined), Event::new("applyPartialSet"))
            .with_priority(PRIORITY_DERIVED),
    ]
}

/// Select the interval used to compute when the next observation set is
/// due. Low severity splits on score 0 vs above.
pub(crate) fn interval_rules() -> Vec<Rule> {
    severity_dispatch_rules([
        "applyZeroSeverityInterval",
        "applyLowSeverityInterval",
        "applyLowMediumSeverityInterval",
        "applyMediumSeverityInterval",
        "applyHighSeverityInterval",
    ])
}

/// Select the monitoring instruction shown alongside the score.
pub(crate) fn monitoring_instruction_rules() -> Vec<Rule> {
    severity_dispatch_rules([
        "applyZeroMonitoringInstruction",
        "applyLowMonitoringInstruction",
        "applyLowMediumMonitoringInstruction",
        "applyMediumMonitoringInstruction",
        "applyHighMonitoringInstruction",
    ])
}

fn severity_dispatch_rules([zero, low, low_medium, medium, high]: [&str; 5]) -> Vec<Rule> {
    vec![
        Rule::new(
            Condition::all(vec![
                Condition::cmp("overallSeverity", Operator::Equal, "low"),
                Condition::cmp("overallScore", Operator::Equal, 0i64),
            ]),
            Event::new(zero),
        )
        .with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::all(vec![
                Condition::cmp("overallSeverity", Operator::Equal, "low"),
                Condition::cmp("overallScore", Operator::GreaterThan, 0i64),
            ]),
            Event::new(low),
        )
        .with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "overallSeverity",
                Operator::Equal,
                "low-medium",
            )]),
            Event::new(low_medium),
        )
        .with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "overallSeverity",
                Operator::Equal,
                "medium",
            )]),
            Event::new(medium),
        )
        .with_priority(PRIORITY_DERIVED),
        Rule::new(
            Condition::all(vec![Condition::cmp(
                "overallSeverity",
                Operator::Equal,
                "high",
            )]),
            Event::new(high),
        )
        .with_priority(PRIORITY_DERIVED),
    ]
}

/// Register the aggregate-score derivation: the sum of the named component
/// score facts. Every summand must have been published by a component rule
/// -- a missing one is an unknown fact, which aborts the run.
pub(crate) fn register_overall_score(
    almanac: &mut wardscore_engine::Almanac,
    components: &'static [&'static str],
) {
    almanac.add_derivation("overallScore", move |alm| {
        let mut sum = Decimal::ZERO;
        for name in components {
            sum += alm.value_of(name)?.as_num().unwrap_or_default();
        }
        Ok(Value::Num(sum))
    });
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
