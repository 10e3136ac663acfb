//! Macronutrient split

use serde::{Deserialize, Serialize};

use super::round_whole;
use crate::errors::{CalcResult, CalculatorError};
use crate::validation::{missing, positive};

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Fiber grams per kilogram of body weight
pub const FIBER_GRAMS_PER_KG: f64 = 0.35;

/// Fiber target when no body weight is given
pub const DEFAULT_FIBER_GRAMS: i64 = 30;

/// Calorie adjustment applied before splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MacroGoal {
    #[default]
    Maintain,
    MildLoss,
    Loss,
    Gain,
}

impl MacroGoal {
    pub const ALL: [MacroGoal; 4] = [
        MacroGoal::Maintain,
        MacroGoal::MildLoss,
        MacroGoal::Loss,
        MacroGoal::Gain,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            MacroGoal::Maintain => 1.0,
            MacroGoal::MildLoss => 0.9,
            MacroGoal::Loss => 0.8,
            MacroGoal::Gain => 1.1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MacroGoal::Maintain => "Maintain",
            MacroGoal::MildLoss => "Mild Fat Loss",
            MacroGoal::Loss => "Fat Loss",
            MacroGoal::Gain => "Muscle Gain",
        }
    }
}

/// Share of calories given to each macronutrient, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_percent: u8,
    pub carb_percent: u8,
    pub fat_percent: u8,
}

impl MacroSplit {
    pub fn protein_fraction(&self) -> f64 {
        f64::from(self.protein_percent) / 100.0
    }

    pub fn carb_fraction(&self) -> f64 {
        f64::from(self.carb_percent) / 100.0
    }

    pub fn fat_fraction(&self) -> f64 {
        f64::from(self.fat_percent) / 100.0
    }

    pub fn total_percent(&self) -> u32 {
        u32::from(self.protein_percent) + u32::from(self.carb_percent) + u32::from(self.fat_percent)
    }
}

/// Macro ratio presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RatioPreset {
    #[default]
    Balanced,
    LowCarb,
    HighCarb,
    Keto,
}

impl RatioPreset {
    pub const ALL: [RatioPreset; 4] = [
        RatioPreset::Balanced,
        RatioPreset::LowCarb,
        RatioPreset::HighCarb,
        RatioPreset::Keto,
    ];

    /// Protein / carb / fat percentages; always sum to 100
    pub fn split(&self) -> MacroSplit {
        let (protein_percent, carb_percent, fat_percent) = match self {
            RatioPreset::Balanced => (30, 40, 30),
            RatioPreset::LowCarb => (40, 20, 40),
            RatioPreset::HighCarb => (25, 55, 20),
            RatioPreset::Keto => (25, 5, 70),
        };
        MacroSplit {
            protein_percent,
            carb_percent,
            fat_percent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatioPreset::Balanced => "Balanced",
            RatioPreset::LowCarb => "Low Carb",
            RatioPreset::HighCarb => "High Carb",
            RatioPreset::Keto => "Ketogenic",
        }
    }
}

/// Macro calculator form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroInput {
    /// TDEE or a manually entered daily intake, kcal
    #[serde(default)]
    pub daily_calories: Option<f64>,
    /// Optional; drives the fiber target
    #[serde(default)]
    pub body_weight_kg: Option<f64>,
    #[serde(default)]
    pub goal: MacroGoal,
    #[serde(default)]
    pub ratio_preset: RatioPreset,
}

impl MacroInput {
    /// Required fields that hold no usable value
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[("dailyCalories", positive(self.daily_calories).is_some())])
    }
}

/// Daily macro targets
///
/// Per-macro calories are carried alongside the grams so renderers can show
/// them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroResult {
    pub target_calories: i64,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
    pub fiber_grams: i64,
    pub protein_calories: i64,
    pub carb_calories: i64,
    pub fat_calories: i64,
}

impl MacroResult {
    /// Calories implied by the rounded gram targets.
    ///
    /// Each macro is rounded on its own, so this can differ from
    /// `target_calories` by up to 8.5 kcal (2 + 2 + 4.5).
    pub fn macro_calories(&self) -> i64 {
        self.protein_calories + self.carb_calories + self.fat_calories
    }
}

fn grams_to_calories(grams: i64, kcal_per_gram: f64) -> Result<i64, CalculatorError> {
    grams
        .checked_mul(kcal_per_gram as i64)
        .ok_or_else(|| {
            CalculatorError::invalid(
                "dailyCalories",
                "values produce a result outside the representable range",
            )
        })
}

/// Compute gram targets for a calorie budget, goal and ratio preset
pub fn compute_macros(input: &MacroInput) -> CalcResult<MacroResult> {
    let Some(daily_calories) = positive(input.daily_calories) else {
        return Ok(None);
    };

    let target_calories = round_whole(daily_calories * input.goal.multiplier(), "dailyCalories")?;
    let target = target_calories as f64;
    let split = input.ratio_preset.split();

    let fiber_grams = match positive(input.body_weight_kg) {
        Some(kg) => round_whole(kg * FIBER_GRAMS_PER_KG, "bodyWeightKg")?,
        None => DEFAULT_FIBER_GRAMS,
    };

    let protein_grams = round_whole(
        target * split.protein_fraction() / PROTEIN_KCAL_PER_GRAM,
        "dailyCalories",
    )?;
    let carb_grams = round_whole(
        target * split.carb_fraction() / CARB_KCAL_PER_GRAM,
        "dailyCalories",
    )?;
    let fat_grams = round_whole(
        target * split.fat_fraction() / FAT_KCAL_PER_GRAM,
        "dailyCalories",
    )?;

    Ok(Some(MacroResult {
        target_calories,
        protein_grams,
        carb_grams,
        fat_grams,
        fiber_grams,
        protein_calories: grams_to_calories(protein_grams, PROTEIN_KCAL_PER_GRAM)?,
        carb_calories: grams_to_calories(carb_grams, CARB_KCAL_PER_GRAM)?,
        fat_calories: grams_to_calories(fat_grams, FAT_KCAL_PER_GRAM)?,
    }))
}
