//! Threshold configuration types.
//!
//! A reading is categorized by a prandial tag -- when it was taken relative
//! to a meal -- and the per-tag `{low, high}` ranges are sparse: a tag with
//! no entry, or an entry identical to the mandatory `OTHER` default, falls
//! through to `OTHER`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A category's band boundaries in mmol/L: below `low` is the low band,
/// `low..high` normal, `high` and above high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HighLow {
    pub high: Decimal,
    pub low: Decimal,
}

/// The six meal-relative reading categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrandialTag {
    BeforeBreakfast,
    AfterBreakfast,
    BeforeLunch,
    AfterLunch,
    BeforeDinner,
    AfterDinner,
}

impl PrandialTag {
    /// Fixed iteration order; compiled output depends on it.
    pub const ALL: [PrandialTag; 6] = [
        PrandialTag::BeforeBreakfast,
        PrandialTag::AfterBreakfast,
        PrandialTag::BeforeLunch,
        PrandialTag::AfterLunch,
        PrandialTag::BeforeDinner,
        PrandialTag::AfterDinner,
    ];

    /// The tag identifier carried by readings and compiled conditions.
    pub fn fact_id(self) -> &'static str {
        match self {
            PrandialTag::BeforeBreakfast => "PRANDIAL-TAG-BEFORE-BREAKFAST",
            PrandialTag::AfterBreakfast => "PRANDIAL-TAG-AFTER-BREAKFAST",
            PrandialTag::BeforeLunch => "PRANDIAL-TAG-BEFORE-LUNCH",
            PrandialTag::AfterLunch => "PRANDIAL-TAG-AFTER-LUNCH",
            PrandialTag::BeforeDinner => "PRANDIAL-TAG-BEFORE-DINNER",
            PrandialTag::AfterDinner => "PRANDIAL-TAG-AFTER-DINNER",
        }
    }

    fn index(self) -> usize {
        match self {
            PrandialTag::BeforeBreakfast => 0,
            PrandialTag::AfterBreakfast => 1,
            PrandialTag::BeforeLunch => 2,
            PrandialTag::AfterLunch => 3,
            PrandialTag::BeforeDinner => 4,
            PrandialTag::AfterDinner => 5,
        }
    }
}

/// Wire shape of the threshold configuration: up to six tagged ranges plus
/// an optional `OTHER` override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdConfig {
    #[serde(rename = "BEFORE-BREAKFAST")]
    pub before_breakfast: Option<HighLow>,
    #[serde(rename = "AFTER-BREAKFAST")]
    pub after_breakfast: Option<HighLow>,
    #[serde(rename = "BEFORE-LUNCH")]
    pub before_lunch: Option<HighLow>,
    #[serde(rename = "AFTER-LUNCH")]
    pub after_lunch: Option<HighLow>,
    #[serde(rename = "BEFORE-DINNER")]
    pub before_dinner: Option<HighLow>,
    #[serde(rename = "AFTER-DINNER")]
    pub after_dinner: Option<HighLow>,
    #[serde(rename = "OTHER")]
    pub other: Option<HighLow>,
}

/// Resolved configuration: `OTHER` is always present (the catch-all
/// defaults to 0..999 when not supplied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    pub other: HighLow,
    tags: [Option<HighLow>; 6],
}

impl Thresholds {
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Thresholds {
            other: config.other.unwrap_or(HighLow {
                low: Decimal::ZERO,
                high: Decimal::from(999),
            }),
            tags: [
                config.before_breakfast,
                config.after_breakfast,
                config.before_lunch,
                config.after_lunch,
                config.before_dinner,
                config.after_dinner,
            ],
        }
    }

    pub fn get(&self, tag: PrandialTag) -> Option<HighLow> {
        self.tags[tag.index()]
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
