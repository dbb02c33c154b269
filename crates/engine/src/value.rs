//! Runtime fact values.
//!
//! A fact is a number, a string, or the explicit "not supplied" sentinel.
//! The sentinel is a first-class value: rule sets pattern-match on absence
//! (e.g. a scoring rule's zero branch accepting an unsupplied reading), so
//! absence must be representable and comparable rather than modeled as a
//! missing map entry.
//!
//! All numerics are `rust_decimal::Decimal` -- never `f64` -- so threshold
//! boundary literals like `40.5` survive exactly.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// A runtime fact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Num(Decimal),
    Str(String),
    /// The "not supplied" sentinel. Equal only to itself; never matches a
    /// numeric bound or a set-membership list.
    Undefined,
}

impl Value {
    /// True unless this is the unsupplied sentinel.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undefined)
    }

    /// Numeric view, if this is a number.
    pub fn as_num(&self) -> Option<Decimal> {
        match self {
            Value::Num(d) => Some(*d),
            _ => None,
        }
    }

    /// String view, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(d) => write!(f, "{}", d),
            Value::Str(s) => write!(f, "{}", s),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}

// Serializes to the classic rules-engine JSON shape: numbers as JSON
// numbers, the sentinel as the literal string "undefined".
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use rust_decimal::prelude::ToPrimitive;
        match self {
            Value::Num(d) => match d.to_i64() {
                Some(i) if d.is_integer() => serializer.serialize_i64(i),
                _ => serializer.serialize_f64(d.to_f64().unwrap_or(f64::NAN)),
            },
            Value::Str(s) => serializer.serialize_str(s),
            Value::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Num(d)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Num(Decimal::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
