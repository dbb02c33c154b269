//! wardscore-scoring: early-warning scoring of vital-signs observation sets.
//!
//! Two scoring variants over the same engine and response pipeline:
//!
//! - [`news2`] -- the seven-factor adult score (respiratory rate, oxygen
//!   saturation on two scales, supplemental O2, systolic blood pressure,
//!   heart rate, consciousness, temperature)
//! - [`meows`] -- the six-factor obstetric score (no O2-therapy factor,
//!   diastolic blood pressure added)
//!
//! Each variant builds its rule table fresh per request, runs it against an
//! almanac holding the observation facts, and folds the fired events into a
//! response: per-component scores, aggregate score and display string,
//! severity band, monitoring instruction, next-observation-due time, set
//! completeness flags, OBX message codes, and a sortable ranking key.
//!
//! Unsupplied observations travel as an explicit sentinel (not omission):
//! every component's zero-score rule carries a sentinel branch, and the
//! empty/partial set rules pattern-match on it directly.

pub mod acvpu;
pub mod inputs;
pub mod meows;
pub mod news2;
pub mod response;

mod error;
mod ranking;
mod rules_shared;
mod validate;

pub use error::ScoreError;
pub use inputs::{IntervalConfig, MeowsRequest, News2Request};
pub use meows::calculate_meows;
pub use news2::calculate_news2;
pub use response::{MeowsResponse, News2Response};
pub use wardscore_engine::ValidationError;
