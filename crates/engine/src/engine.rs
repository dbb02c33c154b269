//! Rule evaluation orchestration.
//!
//! Rules are attempted in descending priority order (stable within a tier),
//! so rule sets partitioned into tiers -- component scores before aggregates
//! before derived instructions -- see their dependencies already published by
//! the time they run. A rule whose condition demands a fact that is neither
//! supplied nor yet published triggers that fact's derivation chain through
//! the almanac instead.

use crate::almanac::Almanac;
use crate::condition::Condition;
use crate::error::EngineError;
use crate::rule::{Event, OnSuccess, Rule};

/// An immutable rule table. Build one per request (they are cheap) or share
/// one across requests -- evaluation never mutates the engine, only the
/// per-run almanac.
pub struct Engine {
    rules: Vec<Rule>,
}

impl Engine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Engine { rules }
    }

    /// Evaluate every rule against the almanac, returning the events of the
    /// rules that fired, in firing order.
    ///
    /// Success handlers run synchronously after their rule fires, so a
    /// published runtime fact is visible to every later rule in the same
    /// run.
    pub fn run(&self, almanac: &mut Almanac) -> Result<Vec<Event>, EngineError> {
        // Stable sort: rules within a priority tier keep definition order.
        let mut ordered: Vec<&Rule> = self.rules.iter().collect();
        ordered.sort_by_key(|r| std::cmp::Reverse(r.priority));

        let mut events = Vec::new();
        for rule in ordered {
            if evaluate(&rule.conditions, almanac)? {
                tracing::debug!(event = %rule.event.kind, priority = rule.priority, "rule fired");
                apply_success(rule, almanac)?;
                events.push(rule.event.clone());
            }
        }
        Ok(events)
    }
}

/// Evaluate a condition tree. `All` short-circuits on the first false child
/// and is vacuously true when empty; `Any` short-circuits on the first true
/// child and is vacuously false when empty.
pub fn evaluate(condition: &Condition, almanac: &mut Almanac) -> Result<bool, EngineError> {
    match condition {
        Condition::Comparison(cmp) => {
            let fact_value = almanac.value_of(&cmp.fact)?;
            Ok(cmp.matches(&fact_value))
        }
        Condition::All { all } => {
            for child in all {
                if !evaluate(child, almanac)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Condition::Any { any } => {
            for child in any {
                if evaluate(child, almanac)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

fn apply_success(rule: &Rule, almanac: &mut Almanac) -> Result<(), EngineError> {
    match &rule.on_success {
        None => Ok(()),
        Some(OnSuccess::PublishParam(param)) => {
            let value =
                rule.event
                    .param(param)
                    .cloned()
                    .ok_or_else(|| EngineError::MissingEventParam {
                        event: rule.event.kind.clone(),
                        param: (*param).to_string(),
                    })?;
            almanac.set_fact(rule.event.kind.clone(), value);
            Ok(())
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
