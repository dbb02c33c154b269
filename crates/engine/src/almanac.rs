//! Fact resolution and memoization for one evaluation run.
//!
//! The almanac holds the caller-supplied input facts plus any runtime facts
//! produced while rules fire. A fact that is neither supplied nor already
//! computed is resolved through its registered deriving function, which may
//! itself demand other facts recursively; the result is memoized so that a
//! fact shared by several rules (an aggregate score, typically) is computed
//! exactly once and reads consistently for the rest of the run.
//!
//! Derivation cycles are detected with an explicit visiting set rather than
//! left to exhaust the call stack.

use crate::error::EngineError;
use crate::value::Value;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// A deriving function: computes a fact on demand, possibly demanding other
/// facts through the almanac it is handed.
pub type DeriveFn = Rc<dyn Fn(&mut Almanac) -> Result<Value, EngineError>>;

/// Fact table for a single evaluation run. Discarded afterwards -- nothing
/// persists across runs.
pub struct Almanac {
    facts: HashMap<String, Value>,
    derivations: HashMap<String, DeriveFn>,
    visiting: HashSet<String>,
}

impl Almanac {
    /// Build an almanac over the caller-supplied input facts.
    pub fn new(facts: HashMap<String, Value>) -> Self {
        Almanac {
            facts,
            derivations: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    /// Register a deriving function for a fact name. The function runs at
    /// most once, on first demand, unless the fact was already supplied or
    /// published by then (in which case it never runs).
    pub fn add_derivation(
        &mut self,
        name: impl Into<String>,
        derive: impl Fn(&mut Almanac) -> Result<Value, EngineError> + 'static,
    ) {
        self.derivations.insert(name.into(), Rc::new(derive));
    }

    /// Resolve a fact by name.
    ///
    /// Lookup order: supplied/previously-computed value, then registered
    /// derivation. A name with neither fails with
    /// [`EngineError::UnknownFact`]; a derivation that (transitively)
    /// demands itself fails with [`EngineError::CyclicFact`].
    pub fn value_of(&mut self, name: &str) -> Result<Value, EngineError> {
        if let Some(v) = self.facts.get(name) {
            return Ok(v.clone());
        }

        let Some(derive) = self.derivations.get(name).cloned() else {
            return Err(EngineError::UnknownFact {
                name: name.to_string(),
            });
        };

        if !self.visiting.insert(name.to_string()) {
            return Err(EngineError::CyclicFact {
                name: name.to_string(),
            });
        }
        let result = derive(self);
        self.visiting.remove(name);
        let value = result?;

        tracing::debug!(fact = name, value = %value, "derived runtime fact");
        // First writer wins: if the derivation itself published this name,
        // keep what it published.
        Ok(self
            .facts
            .entry(name.to_string())
            .or_insert(value)
            .clone())
    }

    /// Record a runtime fact. The first write for a name wins; later writes
    /// within the same run are ignored, so independently firing rules cannot
    /// overwrite each other's published values.
    pub fn set_fact(&mut self, name: impl Into<String>, value: Value) {
        self.facts.entry(name.into()).or_insert(value);
    }

    /// Whether a fact is currently present (supplied or already computed).
    pub fn has_fact(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
