//! wardscore-engine: condition-tree rule engine.
//!
//! Evaluates declarative boolean condition trees over a set of named facts.
//! Facts are either supplied by the caller or derived on demand through a
//! registered deriving function; derived values are memoized for the rest of
//! the run. Rules fire in descending priority order and may publish one of
//! their event parameters back into the fact table, making it visible to
//! lower-priority rules.
//!
//! The engine performs no I/O and holds no state across runs -- callers build
//! a fresh [`Almanac`] per evaluation and may share an [`Engine`] (or build
//! one per request) freely across threads.
//!
//! # Public API
//!
//! - [`Engine::run`] -- evaluate a rule set against an almanac
//! - [`Almanac`] -- fact resolution and memoization context for one run
//! - [`Condition`], [`Comparison`], [`Operator`] -- the condition tree
//! - [`Rule`], [`Event`], [`OnSuccess`] -- rule definitions
//! - [`Value`] -- runtime fact values
//! - [`EngineError`], [`ValidationError`] -- error types

pub mod almanac;
pub mod condition;
pub mod engine;
pub mod error;
pub mod rule;
pub mod value;

pub use almanac::Almanac;
pub use condition::{Comparison, Condition, Operand, Operator};
pub use engine::Engine;
pub use error::{EngineError, ValidationError};
pub use rule::{Event, OnSuccess, Rule};
pub use value::Value;
