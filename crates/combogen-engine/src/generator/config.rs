use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Level, Mode};

/// Relative weight multipliers applied to the last slots of a combo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinisherBias {
    pub kick: f32,
    pub knee: f32,
}

impl FinisherBias {
    pub const DEFAULT: Self = Self { kick: 2.0, knee: 1.6 };
}

impl Default for FinisherBias {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-invocation generation policy.
///
/// Supplied by the caller and immutable for the duration of one call. The
/// kick/knee/defense no-repeat rule is always on;
/// `avoid_same_category_in_a_row` widens it to punches as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Forbid the identical move in two consecutive slots.
    pub avoid_same_move_in_a_row: bool,
    /// Forbid any category, punches included, in two consecutive slots.
    pub avoid_same_category_in_a_row: bool,
    pub finisher_bias: FinisherBias,
}

impl Rules {
    pub const DEFAULT: Self = Self {
        avoid_same_move_in_a_row: true,
        avoid_same_category_in_a_row: false,
        finisher_bias: FinisherBias::DEFAULT,
    };
}

impl Default for Rules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The numeric constants of the generation algorithm.
///
/// These are tuning values inherited from the source material rather than
/// derived quantities, kept as named, overridable configuration. The
/// defaults are the values the richest ruleset shipped with.
///
/// Weight tables are indexed `[level][category]` in [`Level::ALL`] /
/// [`Category::ALL`] order. A zero weight removes the category from the
/// eligible pool at that tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Probability that the combo opens with a kick instead of a punch,
    /// per skill tier. Kickboxing mode only.
    pub first_kick_chance: [f64; Level::LEN],
    /// Probability that the first slot is narrowed to lead-side techniques.
    pub lead_side_chance: f64,
    /// Weight boost for inside-line leg techniques.
    pub inside_boost: f32,
    /// Weight penalty for leg techniques off the rear leg.
    pub rear_leg_penalty: f32,
    /// Weight penalty applied once per earlier use of the same move.
    pub repeat_penalty: f32,
    /// Weight penalty for repeating the previous move's body side.
    pub same_side_penalty: f32,
    /// Fraction of the finisher bias applied to the second-to-last slot.
    pub finisher_taper: f32,
    /// Category weights per tier in kickboxing mode.
    pub kickboxing_weights: [[f32; Category::LEN]; Level::LEN],
    /// Category weights per tier in boxing mode.
    pub boxing_weights: [[f32; Category::LEN]; Level::LEN],
}

impl Tuning {
    pub const DEFAULT: Self = Self {
        first_kick_chance: [0.2, 0.3, 0.35],
        lead_side_chance: 0.7,
        inside_boost: 1.4,
        rear_leg_penalty: 0.75,
        repeat_penalty: 0.25,
        same_side_penalty: 0.75,
        finisher_taper: 0.5,
        // [punch, kick, knee, defense]
        kickboxing_weights: [
            [0.70, 0.30, 0.0, 0.0],
            [0.50, 0.25, 0.10, 0.15],
            [0.40, 0.25, 0.15, 0.20],
        ],
        boxing_weights: [
            [1.0, 0.0, 0.0, 0.0],
            [0.75, 0.0, 0.0, 0.25],
            [0.75, 0.0, 0.0, 0.25],
        ],
    };

    /// The category weight row for one tier and mode.
    #[must_use]
    pub fn category_weights(&self, level: Level, mode: Mode) -> [f32; Category::LEN] {
        match mode {
            Mode::Kickboxing => self.kickboxing_weights[level.as_index()],
            Mode::Boxing => self.boxing_weights[level.as_index()],
        }
    }

    pub(crate) fn first_kick_chance(&self, level: Level) -> f64 {
        self.first_kick_chance[level.as_index()]
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
