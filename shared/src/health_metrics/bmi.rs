//! Body Mass Index

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::errors::{ensure_finite, CalcResult};
use crate::units::{UnitSystem, IMPERIAL_BMI_FACTOR};
use crate::validation::{missing, positive};

/// BMI form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiInput {
    /// Height in cm (metric) or inches (imperial)
    #[serde(default)]
    pub height_value: Option<f64>,
    /// Weight in kg (metric) or lbs (imperial)
    #[serde(default)]
    pub weight_value: Option<f64>,
    #[serde(default)]
    pub unit: UnitSystem,
}

impl BmiInput {
    pub fn new(height_value: f64, weight_value: f64, unit: UnitSystem) -> Self {
        Self {
            height_value: Some(height_value),
            weight_value: Some(weight_value),
            unit,
        }
    }

    /// Required fields that hold no usable value
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("heightValue", positive(self.height_value).is_some()),
            ("weightValue", positive(self.weight_value).is_some()),
        ])
    }
}

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Classify a (rounded) BMI value
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Half-open BMI range `[min, max)` covered by this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (f64::NEG_INFINITY, 18.5),
            BmiCategory::NormalWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Guidance shown next to the result
    pub fn guidance(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "You may need to gain weight. Consult a healthcare provider."
            }
            BmiCategory::NormalWeight => "Your BMI is in the healthy range.",
            BmiCategory::Overweight => "You may benefit from weight management strategies.",
            BmiCategory::Obese => "Weight loss is recommended for health benefits.",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub category: BmiCategory,
    pub description: String,
}

/// Calculate BMI from metric values
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate BMI directly from imperial values
///
/// Formula: BMI = weight(lbs) / height(in)² × 703
pub fn calculate_bmi_imperial(weight_lbs: f64, height_in: f64) -> f64 {
    weight_lbs / (height_in * height_in) * IMPERIAL_BMI_FACTOR
}

/// Compute a classified BMI result from form input
pub fn compute_bmi(input: &BmiInput) -> CalcResult<BmiResult> {
    let (Some(height), Some(weight)) =
        (positive(input.height_value), positive(input.weight_value))
    else {
        return Ok(None);
    };

    let raw = match input.unit {
        UnitSystem::Metric => calculate_bmi(weight, height),
        UnitSystem::Imperial => calculate_bmi_imperial(weight, height),
    };
    let bmi = round_to(ensure_finite(raw, "heightValue")?, 1);
    let category = BmiCategory::classify(bmi);

    Ok(Some(BmiResult {
        bmi,
        category,
        description: category.guidance().to_string(),
    }))
}
