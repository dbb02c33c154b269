//! Rule and event definitions.

use crate::condition::Condition;
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Emitted when a rule's condition tree evaluates true.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Event type name, matched by the response-building layer.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Event {
            kind: kind.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

/// Side effect applied after a rule fires.
#[derive(Debug, Clone, PartialEq)]
pub enum OnSuccess {
    /// Copy the named event parameter into the almanac under the event's
    /// type name, making it readable by later rules as a runtime fact.
    PublishParam(&'static str),
}

/// A rule: condition tree, emitted event, firing priority, optional success
/// handler. Rules are independent -- nothing prevents two rules from firing
/// over the same facts.
#[derive(Debug, Clone)]
pub struct Rule {
    pub conditions: Condition,
    pub event: Event,
    pub priority: i32,
    pub on_success: Option<OnSuccess>,
}

impl Rule {
    pub fn new(conditions: Condition, event: Event) -> Self {
        Rule {
            conditions,
            event,
            priority: 1,
            on_success: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Publish the named event parameter as a runtime fact on success.
    pub fn publish(mut self, param: &'static str) -> Self {
        self.on_success = Some(OnSuccess::PublishParam(param));
        self
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, Operator};
    use serde_json::json;

    #[test]
    fn event_serializes_with_type_key() {
        let event = Event::new("heartRateScore").with_param("value", 3i64);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "heartRateScore", "params": {"value": 3}})
        );
    }

    #[test]
    fn paramless_event_omits_params() {
        let event = Event::new("applyNurseConcern");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"type": "applyNurseConcern"})
        );
    }

    #[test]
    fn rule_defaults_to_priority_one() {
        let rule = Rule::new(
            Condition::any(vec![Condition::cmp("x", Operator::Equal, 1i64)]),
            Event::new("noop"),
        );
        assert_eq!(rule.priority, 1);
        assert!(rule.on_success.is_none());
    }
}
