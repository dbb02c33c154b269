//! Scoring error type.

use wardscore_engine::{EngineError, ValidationError};

/// Errors surfaced by the scoring entry points.
///
/// `Validation` is the only recoverable kind -- it carries the
/// (log message, user message) pair for the caller boundary. The rest
/// indicate defects in the rule tables or the response fold and must
/// propagate, never be swallowed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A fired rule emitted an event type the response fold does not
    /// recognize. Adding a rule without extending the fold must fail
    /// loudly, not silently drop data.
    #[error("unexpected rule event type '{0}'")]
    UnexpectedEventType(String),

    /// A recognized event was missing or mistyped a required parameter.
    #[error("event '{kind}' has a missing or mistyped parameter '{param}'")]
    MalformedEvent { kind: String, param: String },
}
