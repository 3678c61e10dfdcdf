//! Data types for the cave generation engine.
//!
//! The primary entry point is [`CaveConfig`], which holds the grid size, the
//! initial [`FillProbability`] and an ordered [`RuleSet`].

use cavemap_core::Tile;
use serde::{Deserialize, Serialize};

use crate::AutomataError;

// ─── Config ──────────────────────────────────────────────────────────────────

/// Everything needed for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaveConfig {
    /// Grid width including the border columns.
    pub width: u32,
    /// Grid height including the border rows.
    pub height: u32,
    /// Chance that an interior cell starts as a wall.
    pub fill: FillProbability,
    pub rules: RuleSet,
}

// ─── FillProbability ─────────────────────────────────────────────────────────

/// Percentage chance, in `0..=100`, that an interior cell is seeded as `Wall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct FillProbability(u8);

impl FillProbability {
    /// Create a fill probability, rejecting values above 100.
    pub fn new(percent: u8) -> Result<Self, AutomataError> {
        Self::try_from(i64::from(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for FillProbability {
    type Error = AutomataError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(percent) if percent <= 100 => Ok(Self(percent)),
            _ => Err(AutomataError::FillOutOfRange(value)),
        }
    }
}

impl From<FillProbability> for u8 {
    fn from(fill: FillProbability) -> Self {
        fill.0
    }
}

// ─── GenerationRule ──────────────────────────────────────────────────────────

/// A single smoothing rule, applied `repeat_count` times in a row.
///
/// A cell becomes `Wall` when its 3×3 solid count reaches `r1_threshold`, or
/// when its radius-2 solid count is at most `r2_threshold`. Otherwise it
/// becomes `Floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRule {
    pub r1_threshold: i32,
    /// A negative value disables the radius-2 test.
    pub r2_threshold: i32,
    pub repeat_count: u32,
}

impl GenerationRule {
    pub fn new(r1_threshold: i32, r2_threshold: i32, repeat_count: u32) -> Self {
        Self {
            r1_threshold,
            r2_threshold,
            repeat_count,
        }
    }

    /// Whether the radius-2 test can ever fire.
    ///
    /// Counts are never negative, so a negative threshold is the "unused" sentinel.
    pub fn uses_r2(&self) -> bool {
        self.r2_threshold >= 0
    }

    /// The tile a cell becomes given its neighborhood counts.
    pub fn next_tile(&self, r1_count: usize, r2_count: usize) -> Tile {
        let r1_count = r1_count as i64;
        let r2_count = r2_count as i64;
        if r1_count >= self.r1_threshold as i64 || r2_count <= self.r2_threshold as i64 {
            Tile::Wall
        } else {
            Tile::Floor
        }
    }
}

// ─── RuleSet ─────────────────────────────────────────────────────────────────

/// An ordered list of rules. Each rule's repeats run before the next rule starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<GenerationRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<GenerationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[GenerationRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of smoothing passes: the sum of every rule's repeat count.
    pub fn total_passes(&self) -> u64 {
        self.rules.iter().map(|r| u64::from(r.repeat_count)).sum()
    }
}

impl FromIterator<GenerationRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = GenerationRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a GenerationRule;
    type IntoIter = std::slice::Iter<'a, GenerationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
