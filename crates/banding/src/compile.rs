//! Threshold-to-rule compiler.
//!
//! Flattens the sparse per-tag range configuration into the minimal set of
//! non-overlapping conditions for each band, then builds one engine rule
//! per band:
//!
//! 1. The `other` catch-all takes its bounds straight from `OTHER`.
//! 2. A tag whose bounds equal `other`'s is omitted entirely -- matching the
//!    default needs no rule entry and no exclusion.
//! 3. Tags with identical bounds coalesce into one tagged range.
//! 4. A tag is excluded from `other`'s condition unless `other`'s bounds
//!    lie inside the tag's own bounds, in which case a double match on the
//!    boundary is harmless (both legs emit the same banding event).
//! 5. Each range becomes a conjunction of its bound comparisons plus a tag
//!    clause; the band rule is the disjunction of the tagged ranges and the
//!    `other` leg, collapsed when a lone conjunction makes the wrapper
//!    redundant.

use crate::thresholds::{HighLow, PrandialTag, Thresholds};
use rust_decimal::Decimal;
use wardscore_engine::{Condition, Event, Operator, Rule, Value};

pub const VALUE_FACT: &str = "bloodGlucoseValue";
pub const TAG_FACT: &str = "prandialTagId";
pub const BANDING_EVENT: &str = "bloodGlucoseReadingBanding";

/// The three mutually exclusive bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Normal,
    High,
}

impl Band {
    /// The (lower inclusive, upper exclusive) bounds a category's range
    /// contributes to this band. `None` is unbounded.
    fn bounds(self, limits: HighLow) -> (Option<Decimal>, Option<Decimal>) {
        match self {
            Band::Low => (Some(Decimal::ZERO), Some(limits.low)),
            Band::Normal => (Some(limits.low), Some(limits.high)),
            Band::High => (Some(limits.high), None),
        }
    }

    pub fn level(self) -> &'static str {
        match self {
            Band::Low => "BG-READING-BANDING-LOW",
            Band::Normal => "BG-READING-BANDING-NORMAL",
            Band::High => "BG-READING-BANDING-HIGH",
        }
    }
}

/// A coalesced range explicitly claimed by one or more tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRange {
    pub greater_than_inclusive: Option<Decimal>,
    pub less_than: Option<Decimal>,
    pub include: Vec<&'static str>,
}

/// The catch-all range, with the tags its condition must exclude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherRange {
    pub greater_than_inclusive: Option<Decimal>,
    pub less_than: Option<Decimal>,
    pub exclude: Vec<&'static str>,
}

/// Whether `other`'s bounds lie entirely inside a tag's bounds. If they do,
/// the tag needs no exclusion from `other`: any value the catch-all leg
/// claims, the tag's own leg claims too, and both emit the same event.
fn contained_inside(
    ge: Option<Decimal>,
    lt: Option<Decimal>,
    other: &OtherRange,
) -> bool {
    if let Some(other_ge) = other.greater_than_inclusive {
        match ge {
            None => return false,
            Some(ge) if ge > other_ge => return false,
            _ => {}
        }
    }
    if let Some(other_lt) = other.less_than {
        match lt {
            None => return false,
            Some(lt) if lt < other_lt => return false,
            _ => {}
        }
    }
    true
}

/// Flatten one band of the configuration into coalesced tagged ranges and
/// the catch-all.
pub fn flatten_thresholds(
    thresholds: &Thresholds,
    band: Band,
) -> (Vec<TaggedRange>, OtherRange) {
    let (other_ge, other_lt) = band.bounds(thresholds.other);
    let mut other = OtherRange {
        greater_than_inclusive: other_ge,
        less_than: other_lt,
        exclude: Vec::new(),
    };
    let mut ranges: Vec<TaggedRange> = Vec::new();

    for tag in PrandialTag::ALL {
        let Some(limits) = thresholds.get(tag) else {
            continue;
        };
        let (ge, lt) = band.bounds(limits);

        // Same bounds as the default: the tag is implicit.
        if ge == other.greater_than_inclusive && lt == other.less_than {
            continue;
        }

        let fact_id = tag.fact_id();
        match ranges
            .iter_mut()
            .find(|r| r.greater_than_inclusive == ge && r.less_than == lt)
        {
            Some(existing) => existing.include.push(fact_id),
            None => ranges.push(TaggedRange {
                greater_than_inclusive: ge,
                less_than: lt,
                include: vec![fact_id],
            }),
        }

        if !contained_inside(ge, lt, &other) {
            other.exclude.push(fact_id);
        }
    }

    (ranges, other)
}

fn bound_conditions(
    conditions: &mut Vec<Condition>,
    ge: Option<Decimal>,
    lt: Option<Decimal>,
) {
    if let Some(ge) = ge {
        conditions.push(Condition::cmp(
            VALUE_FACT,
            Operator::GreaterThanInclusive,
            ge,
        ));
    }
    if let Some(lt) = lt {
        conditions.push(Condition::cmp(VALUE_FACT, Operator::LessThan, lt));
    }
}

/// The tag clause: `equal`/`notEqual` for one tag, `in`/`notIn` for
/// several, nothing for none.
fn tag_condition(
    tags: &[&'static str],
    single_op: Operator,
    multi_op: Operator,
) -> Option<Condition> {
    match tags {
        [] => None,
        [only] => Some(Condition::cmp(TAG_FACT, single_op, *only)),
        many => Some(Condition::membership(
            TAG_FACT,
            multi_op,
            many.iter().map(|t| Value::from(*t)).collect(),
        )),
    }
}

/// A lone condition stands by itself; more than one becomes a conjunction.
fn all_of(mut conditions: Vec<Condition>) -> Condition {
    if conditions.len() == 1 {
        conditions.remove(0)
    } else {
        Condition::all(conditions)
    }
}

fn match_tagged(range: &TaggedRange) -> Condition {
    let mut conditions = Vec::new();
    bound_conditions(
        &mut conditions,
        range.greater_than_inclusive,
        range.less_than,
    );
    if let Some(cond) = tag_condition(&range.include, Operator::Equal, Operator::In) {
        conditions.push(cond);
    }
    all_of(conditions)
}

fn match_other(other: &OtherRange) -> Condition {
    let mut conditions = Vec::new();
    bound_conditions(
        &mut conditions,
        other.greater_than_inclusive,
        other.less_than,
    );
    if let Some(cond) = tag_condition(&other.exclude, Operator::NotEqual, Operator::NotIn) {
        conditions.push(cond);
    }
    all_of(conditions)
}

/// Build a band's rule from its flattened ranges.
///
/// The root must be a group node: a lone conjunction is used directly,
/// anything else is wrapped in a top-level disjunction.
pub fn band_rule(ranges: &[TaggedRange], other: &OtherRange, level: &str) -> Rule {
    let mut conditions: Vec<Condition> = ranges.iter().map(match_tagged).collect();
    conditions.push(match_other(other));

    let root = if conditions.len() == 1 && matches!(conditions[0], Condition::All { .. }) {
        conditions.remove(0)
    } else {
        Condition::any(conditions)
    };

    Rule::new(root, Event::new(BANDING_EVENT).with_param("level", level))
}

/// Compile the configuration into one rule per band.
pub fn compile_thresholds_to_rules(thresholds: &Thresholds) -> Vec<Rule> {
    [Band::Low, Band::Normal, Band::High]
        .into_iter()
        .map(|band| {
            let (ranges, other) = flatten_thresholds(thresholds, band);
            band_rule(&ranges, &other, band.level())
        })
        .collect()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
