//! Response types and the shared part of the event fold.
//!
//! Each variant folds its fired events into a response: component-score
//! events are handled by the variant itself, everything else (severity,
//! intervals, monitoring, completeness, concern, OBX) by
//! [`CommonEvents::apply`]. An event neither side recognizes is the fatal
//! [`ScoreError::UnexpectedEventType`] -- a new rule added without response
//! handling must fail loudly.

use crate::error::ScoreError;
use crate::ranking::{ranking_key, RankingInputs};
use crate::validate::ObsContext;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, UtcOffset};
use wardscore_engine::Event;

/// Seven-factor scoring response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct News2Response {
    pub partial_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_set: Option<bool>,
    pub overall_score: i64,

    pub respiratory_rate_score: i64,
    pub oxygen_saturation_score: i64,
    pub o2_therapy_score: i64,
    pub blood_pressure_score: i64,
    pub heart_rate_score: i64,
    pub consciousness_score: i64,
    pub temperature_score: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_severity: Option<String>,
    pub overall_score_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_next_obs_set_due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obx_reference_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obx_abnormal_flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_instruction: Option<String>,
    pub ranking: String,
}

/// Six-factor scoring response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeowsResponse {
    pub partial_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_set: Option<bool>,
    pub overall_score: i64,

    pub respiratory_rate_score: i64,
    pub oxygen_saturation_score: i64,
    pub systolic_blood_pressure_score: i64,
    pub diastolic_blood_pressure_score: i64,
    pub heart_rate_score: i64,
    pub consciousness_score: i64,
    pub temperature_score: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_severity: Option<String>,
    pub overall_score_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_next_obs_set_due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obx_reference_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obx_abnormal_flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_instruction: Option<String>,
    pub ranking: String,
}

/// Accumulator for the events both variants share.
pub(crate) struct CommonEvents {
    pub partial_set: bool,
    pub empty_set: bool,
    pub overall_severity: Option<String>,
    pub monitoring_instruction: Option<String>,
    pub time_next_obs_set_due: Option<String>,
    pub obx_reference_range: Option<String>,
    pub obx_abnormal_flags: Option<String>,
    pub has_nurse_concern: bool,
    pub severity_ranking: u8,
}

impl CommonEvents {
    pub fn new() -> Self {
        CommonEvents {
            partial_set: false,
            empty_set: false,
            overall_severity: None,
            monitoring_instruction: None,
            time_next_obs_set_due: None,
            obx_reference_range: None,
            obx_abnormal_flags: None,
            has_nurse_concern: false,
            severity_ranking: 0,
        }
    }

    /// Apply one event. Returns false if the event type is not one of the
    /// shared kinds (the variant fold then decides whether it is a
    /// component score or an error).
    pub fn apply(&mut self, event: &Event, ctx: &ObsContext) -> Result<bool, ScoreError> {
        match event.kind.as_str() {
            "applyPartialSet" => self.partial_set = true,
            "applyEmptySet" => self.empty_set = true,
            "applyNurseConcern" => self.has_nurse_concern = true,
            "overallSeverity" => self.overall_severity = Some(param_str(event, "value")?),
            "obxParameters" => {
                self.obx_reference_range = Some(param_str(event, "referenceRange")?);
                self.obx_abnormal_flags = Some(param_str(event, "abnormalFlags")?);
            }
            "applyZeroSeverityInterval" => self.schedule(ctx, ctx.intervals.zero_severity_hours, 0),
            "applyLowSeverityInterval" => self.schedule(ctx, ctx.intervals.low_severity_hours, 1),
            "applyLowMediumSeverityInterval" => {
                self.schedule(ctx, ctx.intervals.low_medium_severity_hours, 2);
            }
            "applyMediumSeverityInterval" => {
                self.schedule(ctx, ctx.intervals.medium_severity_hours, 3);
            }
            "applyHighSeverityInterval" => self.schedule(ctx, ctx.intervals.high_severity_hours, 4),
            "applyZeroMonitoringInstruction" => self.instruct("routine_monitoring"),
            "applyLowMonitoringInstruction" => self.instruct("low_monitoring"),
            "applyLowMediumMonitoringInstruction" => self.instruct("low_medium_monitoring"),
            "applyMediumMonitoringInstruction" => self.instruct("medium_monitoring"),
            "applyHighMonitoringInstruction" => self.instruct("high_monitoring"),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn schedule(&mut self, ctx: &ObsContext, interval_hours: i64, ranking: u8) {
        self.time_next_obs_set_due = Some(next_due(ctx.recorded, interval_hours));
        self.severity_ranking = ranking;
    }

    fn instruct(&mut self, instruction: &str) {
        self.monitoring_instruction = Some(instruction.to_string());
    }

    /// Display string for the aggregate score: the plain number, with a `C`
    /// suffix under nurse concern, or `--` for an empty set.
    pub fn score_display(&self, overall_score: i64) -> String {
        if self.has_nurse_concern {
            format!("{}C", overall_score)
        } else if self.empty_set {
            "--".to_string()
        } else {
            overall_score.to_string()
        }
    }

    pub fn ranking(&self, overall_score: i64, recorded: OffsetDateTime) -> String {
        ranking_key(
            &RankingInputs {
                overall_score,
                partial_set: self.partial_set,
                empty_set: self.empty_set,
                has_nurse_concern: self.has_nurse_concern,
                severity_ranking: self.severity_ranking,
            },
            recorded,
        )
    }

    /// The wire shape carries `empty_set` only when the set was empty.
    pub fn empty_set_flag(&self) -> Option<bool> {
        self.empty_set.then_some(true)
    }
}

/// Next-observation-due timestamp: recorded time plus the selected
/// interval, normalised to UTC.
fn next_due(recorded: OffsetDateTime, interval_hours: i64) -> String {
    let due = (recorded + Duration::hours(interval_hours)).to_offset(UtcOffset::UTC);
    // Rfc3339 formatting of an in-range OffsetDateTime cannot fail.
    due.format(&Rfc3339).unwrap_or_default()
}

/// Integer event parameter, e.g. a component score.
pub(crate) fn param_i64(event: &Event, name: &str) -> Result<i64, ScoreError> {
    use rust_decimal::prelude::ToPrimitive;
    event
        .param(name)
        .and_then(|v| v.as_num())
        .and_then(|d| d.to_i64())
        .ok_or_else(|| ScoreError::MalformedEvent {
            kind: event.kind.clone(),
            param: name.to_string(),
        })
}

/// String event parameter, e.g. a severity label.
pub(crate) fn param_str(event: &Event, name: &str) -> Result<String, ScoreError> {
    event
        .param(name)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ScoreError::MalformedEvent {
            kind: event.kind.clone(),
            param: name.to_string(),
        })
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Intervals;

    fn ctx() -> ObsContext {
        ObsContext {
            recorded: OffsetDateTime::parse("2024-06-01T10:00:00Z", &Rfc3339).unwrap(),
            intervals: Intervals {
                zero_severity_hours: 12,
                low_severity_hours: 6,
                low_medium_severity_hours: 4,
                medium_severity_hours: 1,
                high_severity_hours: 0,
            },
        }
    }

    #[test]
    fn interval_event_sets_due_time_and_ranking() {
        let mut common = CommonEvents::new();
        let handled = common
            .apply(&Event::new("applyMediumSeverityInterval"), &ctx())
            .unwrap();
        assert!(handled);
        assert_eq!(
            common.time_next_obs_set_due.as_deref(),
            Some("2024-06-01T11:00:00Z")
        );
        assert_eq!(common.severity_ranking, 3);
    }

    #[test]
    fn due_time_is_normalised_to_utc() {
        let mut common = CommonEvents::new();
        let local = ObsContext {
            recorded: OffsetDateTime::parse("2024-06-01T10:00:00+02:00", &Rfc3339).unwrap(),
            ..ctx()
        };
        common
            .apply(&Event::new("applyZeroSeverityInterval"), &local)
            .unwrap();
        assert_eq!(
            common.time_next_obs_set_due.as_deref(),
            Some("2024-06-01T20:00:00Z")
        );
    }

    #[test]
    fn unshared_event_is_reported_unhandled() {
        let mut common = CommonEvents::new();
        assert!(!common
            .apply(&Event::new("heartRateScore"), &ctx())
            .unwrap());
    }

    #[test]
    fn display_rules() {
        let mut common = CommonEvents::new();
        assert_eq!(common.score_display(3), "3");

        common.has_nurse_concern = true;
        assert_eq!(common.score_display(3), "3C");

        // Concern wins over emptiness.
        common.empty_set = true;
        assert_eq!(common.score_display(0), "0C");

        common.has_nurse_concern = false;
        assert_eq!(common.score_display(0), "--");
    }

    #[test]
    fn malformed_severity_event_is_an_error() {
        let mut common = CommonEvents::new();
        let err = common
            .apply(&Event::new("overallSeverity"), &ctx())
            .unwrap_err();
        assert!(matches!(err, ScoreError::MalformedEvent { .. }));
    }
}
