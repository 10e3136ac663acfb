//! Calculator catalog and form option tables
//!
//! Static, compiled-in data describing the four calculators and every option
//! a form can offer, so renderers never duplicate labels or thresholds.

use serde::{Deserialize, Serialize};

use crate::health_metrics::{
    body_fat_bands, ActivityLevel, BiologicalSex, BmiCategory, BodyFatBand, CalorieGoal,
    MacroGoal, MacroSplit, RatioPreset,
};
use crate::units::UnitSystem;

/// The calculators this engine provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calculator {
    Bmi,
    Calories,
    Macros,
    BodyFat,
}

impl Calculator {
    pub const ALL: [Calculator; 4] = [
        Calculator::Bmi,
        Calculator::Calories,
        Calculator::Macros,
        Calculator::BodyFat,
    ];

    /// Short identifier used in paths and metric labels
    pub fn slug(&self) -> &'static str {
        match self {
            Calculator::Bmi => "bmi",
            Calculator::Calories => "calories",
            Calculator::Macros => "macros",
            Calculator::BodyFat => "bodyfat",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Calculator::Bmi => "BMI Calculator",
            Calculator::Calories => "Calorie Calculator",
            Calculator::Macros => "Macro Calculator",
            Calculator::BodyFat => "Body Fat Calculator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Calculator::Bmi => {
                "Calculate your Body Mass Index and understand your weight category."
            }
            Calculator::Calories => {
                "Determine your daily calorie needs based on your goals and activity level."
            }
            Calculator::Macros => "Calculate optimal protein, carb, and fat intake for your goals.",
            Calculator::BodyFat => "Estimate your body fat percentage using the US Navy method.",
        }
    }

    pub fn path(&self) -> String {
        format!("/calculators/{}", self.slug())
    }
}

/// Catalog entry for one calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInfo {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub path: String,
}

impl From<Calculator> for CalculatorInfo {
    fn from(calculator: Calculator) -> Self {
        Self {
            slug: calculator.slug().to_string(),
            title: calculator.title().to_string(),
            description: calculator.description().to_string(),
            path: calculator.path(),
        }
    }
}

/// All calculators in display order
pub fn calculator_catalog() -> Vec<CalculatorInfo> {
    Calculator::ALL.into_iter().map(CalculatorInfo::from).collect()
}

// ============================================================================
// Option Tables
// ============================================================================

/// Field unit labels for one measurement system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSystemOption {
    pub value: UnitSystem,
    pub weight_label: String,
    pub length_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOption {
    pub multiplier: f64,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroGoalOption {
    pub value: MacroGoal,
    pub label: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioPresetOption {
    pub value: RatioPreset,
    pub label: String,
    pub split: MacroSplit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieGoalOption {
    pub value: CalorieGoal,
    pub label: String,
    pub deficit: i64,
    pub weekly_rate: String,
}

/// Half-open BMI band; `None` bounds are unbounded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiBandOption {
    pub category: BmiCategory,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatBandsOption {
    pub male: Vec<BodyFatBand>,
    pub female: Vec<BodyFatBand>,
}

/// Everything a calculator form needs to render its choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOptions {
    pub unit_systems: Vec<UnitSystemOption>,
    pub activity_levels: Vec<ActivityOption>,
    pub macro_goals: Vec<MacroGoalOption>,
    pub ratio_presets: Vec<RatioPresetOption>,
    pub calorie_goals: Vec<CalorieGoalOption>,
    pub bmi_bands: Vec<BmiBandOption>,
    pub body_fat_bands: BodyFatBandsOption,
}

/// Build the option tables
pub fn calculator_options() -> CalculatorOptions {
    CalculatorOptions {
        unit_systems: UnitSystem::ALL
            .into_iter()
            .map(|unit| UnitSystemOption {
                value: unit,
                weight_label: unit.weight_label().to_string(),
                length_label: unit.length_label().to_string(),
            })
            .collect(),
        activity_levels: ActivityLevel::ALL
            .into_iter()
            .map(|level| ActivityOption {
                multiplier: level.multiplier(),
                label: level.label().to_string(),
                description: level.description().to_string(),
            })
            .collect(),
        macro_goals: MacroGoal::ALL
            .into_iter()
            .map(|goal| MacroGoalOption {
                value: goal,
                label: goal.label().to_string(),
                multiplier: goal.multiplier(),
            })
            .collect(),
        ratio_presets: RatioPreset::ALL
            .into_iter()
            .map(|preset| RatioPresetOption {
                value: preset,
                label: preset.label().to_string(),
                split: preset.split(),
            })
            .collect(),
        calorie_goals: CalorieGoal::ALL
            .into_iter()
            .map(|goal| CalorieGoalOption {
                value: goal,
                label: goal.label().to_string(),
                deficit: goal.deficit(),
                weekly_rate: goal.weekly_rate().to_string(),
            })
            .collect(),
        bmi_bands: BmiCategory::ALL
            .into_iter()
            .map(|category| {
                let (min, max) = category.range();
                BmiBandOption {
                    category,
                    min: Some(min).filter(|v| v.is_finite()),
                    max: Some(max).filter(|v| v.is_finite()),
                    description: category.guidance().to_string(),
                }
            })
            .collect(),
        body_fat_bands: BodyFatBandsOption {
            male: body_fat_bands(BiologicalSex::Male).to_vec(),
            female: body_fat_bands(BiologicalSex::Female).to_vec(),
        },
    }
}
