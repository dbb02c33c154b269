//! Boolean condition trees.
//!
//! A condition is either a comparison leaf (fact name, operator, literal
//! operand) or a conjunction/disjunction over child conditions. The tree is
//! a tagged variant with an explicit evaluator dispatch in
//! [`crate::engine`]; polymorphism through trait objects or inheritance-like
//! indirection is deliberately avoided.
//!
//! Conditions serialize to the classic rules-engine JSON shape --
//! `{"fact", "operator", "value"}` leaves inside `{"all": [..]}` /
//! `{"any": [..]}` groups -- so compiled rule sets can be compared
//! structurally against reference output.

use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Comparison operator for a condition leaf.
///
/// `lessThan`/`greaterThanInclusive` pairs partition the number line without
/// an equality band when cut points are pre-shifted half-integers (e.g.
/// `40.5`), which is how every scoring table here is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    LessThanInclusive,
    GreaterThan,
    GreaterThanInclusive,
    In,
    NotIn,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::LessThan => "lessThan",
            Self::LessThanInclusive => "lessThanInclusive",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanInclusive => "greaterThanInclusive",
            Self::In => "in",
            Self::NotIn => "notIn",
        };
        write!(f, "{}", s)
    }
}

/// Right-hand side of a comparison: a scalar literal, or a list literal for
/// the set-membership operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    One(Value),
    Many(Vec<Value>),
}

/// A comparison leaf: resolve `fact` and compare it against `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub fact: String,
    pub operator: Operator,
    pub value: Operand,
}

impl Comparison {
    /// Apply the operator to a resolved fact value.
    ///
    /// The unsupplied sentinel only matches through `equal`/`notEqual`
    /// against the sentinel literal itself; every ordering comparison
    /// against it is false, so a rule set must carry an explicit sentinel
    /// branch wherever absence is meant to match.
    pub fn matches(&self, fact_value: &Value) -> bool {
        match (&self.operator, &self.value) {
            (Operator::Equal, Operand::One(lit)) => fact_value == lit,
            (Operator::NotEqual, Operand::One(lit)) => fact_value != lit,
            (Operator::LessThan, Operand::One(lit)) => ordered(fact_value, lit, |a, b| a < b),
            (Operator::LessThanInclusive, Operand::One(lit)) => {
                ordered(fact_value, lit, |a, b| a <= b)
            }
            (Operator::GreaterThan, Operand::One(lit)) => ordered(fact_value, lit, |a, b| a > b),
            (Operator::GreaterThanInclusive, Operand::One(lit)) => {
                ordered(fact_value, lit, |a, b| a >= b)
            }
            (Operator::In, Operand::Many(list)) => list.contains(fact_value),
            (Operator::NotIn, Operand::Many(list)) => !list.contains(fact_value),
            // A list operand on a scalar operator (or vice versa) is a
            // malformed rule; it matches nothing rather than panicking.
            _ => false,
        }
    }
}

fn ordered(
    fact: &Value,
    lit: &Value,
    cmp: fn(rust_decimal::Decimal, rust_decimal::Decimal) -> bool,
) -> bool {
    match (fact.as_num(), lit.as_num()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// A node in the condition tree.
///
/// Empty `All` is vacuously true; empty `Any` is vacuously false. A rule's
/// root is expected to be a group node -- single leaves are wrapped by the
/// layer that builds the rule set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Condition {
    All { all: Vec<Condition> },
    Any { any: Vec<Condition> },
    Comparison(Comparison),
}

impl Condition {
    pub fn all(children: Vec<Condition>) -> Self {
        Condition::All { all: children }
    }

    pub fn any(children: Vec<Condition>) -> Self {
        Condition::Any { any: children }
    }

    /// A comparison leaf with a scalar operand.
    pub fn cmp(fact: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Condition::Comparison(Comparison {
            fact: fact.into(),
            operator,
            value: Operand::One(value.into()),
        })
    }

    /// A set-membership leaf (`in` / `notIn`) with a list operand.
    pub fn membership(
        fact: impl Into<String>,
        operator: Operator,
        values: Vec<Value>,
    ) -> Self {
        Condition::Comparison(Comparison {
            fact: fact.into(),
            operator,
            value: Operand::Many(values),
        })
    }

    /// True for `All`/`Any` group nodes.
    pub fn is_group(&self) -> bool {
        !matches!(self, Condition::Comparison(_))
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
