// ABOUTME: Calorie estimation for logged sets, branching on strength versus cardio
// ABOUTME: Strength uses a kg-rep cost with recovery overhead; cardio uses MET tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie estimation
//!
//! Both estimators are pure and never fail. Results are rounded to one
//! decimal place; estimates are computed per set during aggregation and are
//! never persisted.

use liftlog_core::constants::calories::{
    MET_LIGHT, MET_MODERATE, MET_VIGOROUS, REFERENCE_BODY_MASS_KG, STRENGTH_KCAL_PER_KG_REP,
    STRENGTH_RECOVERY_MULTIPLIER,
};
use serde::{Deserialize, Serialize};

/// Cardio effort level, mapped to a MET value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Walking pace
    Light,
    /// Jogging pace
    #[default]
    Moderate,
    /// Running, sprints, HIIT
    Vigorous,
}

impl Intensity {
    /// Parse an intensity label; anything unrecognized is treated as moderate
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "light" => Self::Light,
            "vigorous" => Self::Vigorous,
            _ => Self::Moderate,
        }
    }

    /// Metabolic equivalent of task for this intensity
    #[must_use]
    pub const fn met(self) -> f64 {
        match self {
            Self::Light => MET_LIGHT,
            Self::Moderate => MET_MODERATE,
            Self::Vigorous => MET_VIGOROUS,
        }
    }

    /// Calories burned over `duration_minutes` at this intensity
    #[must_use]
    pub fn calories(self, duration_minutes: f64) -> f64 {
        round_to_tenth(self.met() * REFERENCE_BODY_MASS_KG * (duration_minutes / 60.0))
    }
}

/// Estimate calories for strength work: `weight × reps × 0.05 × sets × 1.3`
///
/// Callers gate on `weight_kg > 0 && reps > 0`; no clamping happens here.
#[must_use]
pub fn strength_calories(weight_kg: f64, reps: u32, sets: u32) -> f64 {
    let base = weight_kg * f64::from(reps) * STRENGTH_KCAL_PER_KG_REP * f64::from(sets);
    round_to_tenth(base * STRENGTH_RECOVERY_MULTIPLIER)
}

/// Estimate calories for cardio: `MET × 70 kg × hours`
///
/// `intensity` is one of `light`, `moderate`, `vigorous`; other labels use the
/// moderate MET.
#[must_use]
pub fn cardio_calories(duration_minutes: f64, intensity: &str) -> f64 {
    Intensity::parse(intensity).calories(duration_minutes)
}

/// Round to one decimal place
///
/// Rounds the exact binary value of `value`, with exact ties going to the
/// even digit, so `3.25` (stored just below) becomes `3.2` and `0.25` becomes
/// `0.2`. Formatting with a fixed precision performs exactly this rounding.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_calories_single_set() {
        assert!((strength_calories(100.0, 10, 1) - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strength_calories_scales_with_sets() {
        let one = strength_calories(60.0, 8, 1);
        let three = strength_calories(60.0, 8, 3);
        assert!((one - 31.2).abs() < 1e-9);
        assert!((three - 93.6).abs() < 1e-9);
    }

    #[test]
    fn test_strength_calories_zero_inputs() {
        assert!(strength_calories(0.0, 10, 1).abs() < f64::EPSILON);
        assert!(strength_calories(80.0, 0, 1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cardio_calories_by_intensity() {
        assert!((cardio_calories(60.0, "light") - 245.0).abs() < 1e-9);
        assert!((cardio_calories(60.0, "moderate") - 490.0).abs() < 1e-9);
        assert!((cardio_calories(30.0, "vigorous") - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_intensity_matches_moderate() {
        for minutes in [0.0, 12.5, 45.0, 90.0] {
            assert!(
                (cardio_calories(minutes, "extreme") - cardio_calories(minutes, "moderate")).abs()
                    < f64::EPSILON
            );
        }
    }

    #[test]
    fn test_cardio_calories_rounds_to_one_decimal() {
        // 7 * 70 * (10 / 60) = 81.666...
        assert!((cardio_calories(10.0, "moderate") - 81.7).abs() < 1e-9);
    }

    #[test]
    fn test_strength_calories_tie_rounds_to_even() {
        // 5 * 10 * 0.05 * 1.3 lands on the 3.25 boundary
        assert!((strength_calories(5.0, 10, 1) - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_cardio_calories_tie_rounds_to_even() {
        // 7 * 70 * (1.5 / 60) lands on the 12.25 boundary
        assert!((cardio_calories(1.5, "moderate") - 12.2).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_tenth_ties() {
        assert!((round_to_tenth(0.25) - 0.2).abs() < 1e-9);
        assert!((round_to_tenth(0.75) - 0.8).abs() < 1e-9);
        assert!((round_to_tenth(2.5) - 2.5).abs() < 1e-9);
        assert!(round_to_tenth(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(1.04) - 1.0).abs() < 1e-9);
        assert!((round_to_tenth(1.06) - 1.1).abs() < 1e-9);
        assert!((round_to_tenth(-2.26) + 2.3).abs() < 1e-9);
    }
}
