//! Error types shared across the workspace.

/// Internal-consistency failures in a rule/fact graph. These indicate a
/// defect in the rule definitions, not a problem with caller input -- they
/// are not recoverable at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A condition or derivation referenced a fact that was never supplied,
    /// published, or registered for derivation.
    #[error("unknown fact: {name}")]
    UnknownFact { name: String },

    /// A fact derivation demanded itself, directly or transitively.
    #[error("cyclic derivation for fact: {name}")]
    CyclicFact { name: String },

    /// A rule asked to publish an event parameter that its event does not
    /// carry.
    #[error("event '{event}' has no parameter '{param}' to publish")]
    MissingEventParam { event: String, param: String },
}

/// Rejection of caller input, reported as a pair: a technical message for
/// the log and a sanitized message for the end user. Classification either
/// fully succeeds or the caller receives one of these -- never a partial
/// result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{log_message}")]
pub struct ValidationError {
    pub log_message: String,
    pub user_message: String,
}

impl ValidationError {
    pub fn new(log_message: impl Into<String>, user_message: impl Into<String>) -> Self {
        ValidationError {
            log_message: log_message.into(),
            user_message: user_message.into(),
        }
    }
}
