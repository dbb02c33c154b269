//! Sortable ranking key.
//!
//! Consumers sort observation sets descending on this key. It packs the
//! nurse-concern flag, severity rank, zero-padded score and the
//! completeness flags most-significant first, then an inverted timestamp,
//! so the descending pass orders by clinical priority and -- within equal
//! priority -- puts the most stale (earliest) recording first.

use time::OffsetDateTime;

/// Timestamps are inverted against 10^15 ms so later recordings produce
/// smaller digits. Fixed width until year 33658.
const TIMESTAMP_INVERSION_MS: i64 = 1_000_000_000_000_000;

pub(crate) struct RankingInputs {
    pub overall_score: i64,
    pub partial_set: bool,
    pub empty_set: bool,
    pub has_nurse_concern: bool,
    pub severity_ranking: u8,
}

/// Build the ranking key:
/// `{concern}{severity}{score:02}{partial}{empty},{inverted_millis}`.
pub(crate) fn ranking_key(inputs: &RankingInputs, recorded: OffsetDateTime) -> String {
    let millis = (recorded.unix_timestamp_nanos() / 1_000_000) as i64;
    let inverted = TIMESTAMP_INVERSION_MS - millis;
    // A partial set that is actually empty only counts as empty.
    let partial = u8::from(inputs.partial_set && !inputs.empty_set);
    let empty = u8::from(inputs.empty_set);

    format!(
        "{}{}{:02}{}{},{}",
        u8::from(inputs.has_nurse_concern),
        inputs.severity_ranking,
        inputs.overall_score,
        partial,
        empty,
        inverted
    )
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use time::format_description::well_known::Rfc3339;

    fn at(ts: &str) -> OffsetDateTime {
        OffsetDateTime::parse(ts, &Rfc3339).unwrap()
    }

    fn inputs(score: i64, severity: u8) -> RankingInputs {
        RankingInputs {
            overall_score: score,
            partial_set: false,
            empty_set: false,
            has_nurse_concern: false,
            severity_ranking: severity,
        }
    }

    #[test]
    fn key_packs_fields_in_order() {
        let key = ranking_key(
            &RankingInputs {
                overall_score: 7,
                partial_set: true,
                empty_set: false,
                has_nurse_concern: true,
                severity_ranking: 4,
            },
            at("2024-06-01T00:00:00Z"),
        );
        assert!(key.starts_with("140710,"));
    }

    #[test]
    fn score_is_zero_padded() {
        let key = ranking_key(&inputs(3, 1), at("2024-06-01T00:00:00Z"));
        assert!(key.starts_with("010300,"));
    }

    #[test]
    fn earlier_recording_sorts_first_among_equals() {
        let earlier = ranking_key(&inputs(5, 3), at("2024-06-01T00:00:00Z"));
        let later = ranking_key(&inputs(5, 3), at("2024-06-01T01:00:00Z"));
        assert!(earlier > later, "stale observations outrank fresh ones");
    }

    #[test]
    fn empty_set_suppresses_partial_flag() {
        let key = ranking_key(
            &RankingInputs {
                overall_score: 0,
                partial_set: true,
                empty_set: true,
                has_nurse_concern: false,
                severity_ranking: 0,
            },
            at("2024-06-01T00:00:00Z"),
        );
        assert!(key.starts_with("000001,"));
    }
}
