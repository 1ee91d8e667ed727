//! Difficulty tiers and their pacing.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Opponent strength, chosen once per single-player session.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random empty cell.
    Easy,
    /// Win if possible, else block, else random.
    #[default]
    Medium,
    /// Full minimax search.
    Hard,
}

impl Difficulty {
    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Range of artificial "thinking" time before the AI moves, in ms.
    pub fn thinking_delay_ms(self) -> RangeInclusive<u64> {
        match self {
            Difficulty::Easy => 300..=700,
            Difficulty::Medium => 700..=1200,
            Difficulty::Hard => 1000..=1700,
        }
    }

    /// Draws a thinking delay from [`Self::thinking_delay_ms`].
    pub fn thinking_delay<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.thinking_delay_ms()))
    }
}
