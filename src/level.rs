//! Level mapper - converts a 0..=5 score into a level, bars and percentage.

use crate::types::{Bars, StrengthLevel};
use crate::types::StrengthLevel::{Good, Soso, Strong, VeryWeak, Weak};

/// Highest score the evaluator produces.
pub const MAX_SCORE: u8 = 5;

/// Level per score, columns ordered as 3, 4 and 5 bars.
const SCORE_TO_LEVEL: [[StrengthLevel; 3]; 6] = [
    [Weak, Weak, VeryWeak],
    [Weak, Weak, VeryWeak],
    [Weak, Soso, Weak],
    [Soso, Good, Soso],
    [Soso, Good, Good],
    [Strong, Strong, Strong],
];

/// Active bars per level, columns ordered as 3, 4 and 5 bars.
const LEVEL_TO_ACTIVE_BARS: [[u8; 3]; 5] = [
    [0, 0, 1],
    [1, 1, 2],
    [2, 2, 3],
    [2, 3, 4],
    [3, 4, 5],
];

fn column(bars: Bars) -> usize {
    match bars {
        Bars::Three => 0,
        Bars::Four => 1,
        Bars::Five => 2,
    }
}

fn row(level: StrengthLevel) -> usize {
    match level {
        VeryWeak => 0,
        Weak => 1,
        Soso => 2,
        Good => 3,
        Strong => 4,
    }
}

/// Maps a score to a strength level. Scores above [`MAX_SCORE`] are clamped.
pub fn to_level(score: u8, bars: Bars) -> StrengthLevel {
    SCORE_TO_LEVEL[usize::from(score.min(MAX_SCORE))][column(bars)]
}

/// Number of highlighted bars for `level` out of `bars`.
pub fn to_active_bars(level: StrengthLevel, bars: Bars) -> u8 {
    LEVEL_TO_ACTIVE_BARS[row(level)][column(bars)]
}

/// Score as a rounded 0..=100 percentage, independent of bars.
pub fn to_percentage(score: u8) -> u8 {
    let score = u32::from(score.min(MAX_SCORE));
    let max = u32::from(MAX_SCORE);
    // round-half-up of score * 100 / max
    ((score * 200 + max) / (2 * max)) as u8
}
