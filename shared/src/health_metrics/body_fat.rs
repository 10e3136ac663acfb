//! Body fat estimation (U.S. Navy circumference method)

use serde::{Deserialize, Serialize};

use super::{round_to, BiologicalSex};
use crate::errors::{ensure_finite, CalcResult, CalculatorError};
use crate::units::UnitSystem;
use crate::validation::{missing, positive};

/// Lower plausibility bound for an estimate, percent
pub const MIN_BODY_FAT_PERCENT: f64 = 2.0;

/// Upper plausibility bound for an estimate, percent
pub const MAX_BODY_FAT_PERCENT: f64 = 60.0;

/// Body fat calculator form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatInput {
    #[serde(default)]
    pub unit: UnitSystem,
    pub sex: BiologicalSex,
    /// Weight in kg (metric) or lbs (imperial)
    #[serde(default)]
    pub weight_value: Option<f64>,
    /// Waist circumference in cm (metric) or inches (imperial)
    #[serde(default)]
    pub waist_value: Option<f64>,
    #[serde(default)]
    pub neck_value: Option<f64>,
    /// Required for female estimates, ignored for male
    #[serde(default)]
    pub hip_value: Option<f64>,
}

impl BodyFatInput {
    /// Required fields that hold no usable value.
    ///
    /// A missing hip for a female estimate is reported as an invalid input
    /// by [`compute_body_fat`], not here.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("weightValue", positive(self.weight_value).is_some()),
            ("waistValue", positive(self.waist_value).is_some()),
            ("neckValue", positive(self.neck_value).is_some()),
        ])
    }
}

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyFatCategory {
    #[serde(rename = "Essential Fat")]
    EssentialFat,
    Athletic,
    Fit,
    Average,
    #[serde(rename = "Above Average")]
    AboveAverage,
}

impl BodyFatCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fit => "Fit",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::AboveAverage => "Above Average",
        }
    }

    /// Classify a (rounded) body fat percentage
    pub fn classify(body_fat_percent: f64, sex: BiologicalSex) -> Self {
        body_fat_bands(sex)
            .iter()
            .find(|band| body_fat_percent <= band.max_percent)
            .map(|band| band.category)
            .unwrap_or(BodyFatCategory::AboveAverage)
    }
}

/// Upper-inclusive band of a category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatBand {
    pub max_percent: f64,
    pub category: BodyFatCategory,
}

const MALE_BANDS: [BodyFatBand; 5] = [
    BodyFatBand {
        max_percent: 6.0,
        category: BodyFatCategory::EssentialFat,
    },
    BodyFatBand {
        max_percent: 14.0,
        category: BodyFatCategory::Athletic,
    },
    BodyFatBand {
        max_percent: 18.0,
        category: BodyFatCategory::Fit,
    },
    BodyFatBand {
        max_percent: 25.0,
        category: BodyFatCategory::Average,
    },
    BodyFatBand {
        max_percent: 100.0,
        category: BodyFatCategory::AboveAverage,
    },
];

const FEMALE_BANDS: [BodyFatBand; 5] = [
    BodyFatBand {
        max_percent: 14.0,
        category: BodyFatCategory::EssentialFat,
    },
    BodyFatBand {
        max_percent: 21.0,
        category: BodyFatCategory::Athletic,
    },
    BodyFatBand {
        max_percent: 25.0,
        category: BodyFatCategory::Fit,
    },
    BodyFatBand {
        max_percent: 32.0,
        category: BodyFatCategory::Average,
    },
    BodyFatBand {
        max_percent: 100.0,
        category: BodyFatCategory::AboveAverage,
    },
];

/// Category bands for a sex, in ascending order of `max_percent`
pub fn body_fat_bands(sex: BiologicalSex) -> &'static [BodyFatBand] {
    match sex {
        BiologicalSex::Male => &MALE_BANDS,
        BiologicalSex::Female => &FEMALE_BANDS,
    }
}

/// Body fat calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatResult {
    /// Clamped to [2, 60], one decimal place
    pub body_fat_percent: f64,
    pub category: BodyFatCategory,
    pub lean_mass_kg: f64,
    pub fat_mass_kg: f64,
}

/// Navy formula, men (circumferences in cm, weight in kg)
///
/// BF% = 495 / (1.0324 − 0.19077 × log10(waist − neck) + 0.15456 × log10(weight)) − 450
pub fn navy_body_fat_male(
    waist_cm: f64,
    neck_cm: f64,
    weight_kg: f64,
) -> Result<f64, CalculatorError> {
    let girth = waist_cm - neck_cm;
    if girth <= 0.0 {
        return Err(CalculatorError::invalid(
            "waistValue",
            "waist must be larger than neck",
        ));
    }
    let density = 1.0324 - 0.19077 * girth.log10() + 0.15456 * weight_kg.log10();
    navy_percent(density)
}

/// Navy formula, women (circumferences in cm, weight in kg)
///
/// BF% = 495 / (1.29579 − 0.35004 × log10(waist + hip − neck)
///   + 0.22100 × log10(weight)) − 450
pub fn navy_body_fat_female(
    waist_cm: f64,
    hip_cm: f64,
    neck_cm: f64,
    weight_kg: f64,
) -> Result<f64, CalculatorError> {
    let girth = waist_cm + hip_cm - neck_cm;
    if girth <= 0.0 {
        return Err(CalculatorError::invalid(
            "waistValue",
            "waist plus hip must be larger than neck",
        ));
    }
    let density = 1.29579 - 0.35004 * girth.log10() + 0.22100 * weight_kg.log10();
    navy_percent(density)
}

/// Raw, unclamped estimate. A non-positive density yields an infinite or
/// negative figure, which the caller's clamp maps onto the bounds.
fn navy_percent(density: f64) -> Result<f64, CalculatorError> {
    let percent = 495.0 / density - 450.0;
    if percent.is_nan() {
        return Err(CalculatorError::invalid(
            "waistValue",
            "measurements are outside the range the Navy formula supports",
        ));
    }
    Ok(percent)
}

/// Estimate body fat, lean mass and fat mass from form input
pub fn compute_body_fat(input: &BodyFatInput) -> CalcResult<BodyFatResult> {
    let (Some(weight), Some(waist), Some(neck)) = (
        positive(input.weight_value),
        positive(input.waist_value),
        positive(input.neck_value),
    ) else {
        return Ok(None);
    };

    let weight_kg = input.unit.weight_to_kg(weight);
    let waist_cm = input.unit.length_to_cm(waist);
    let neck_cm = input.unit.length_to_cm(neck);

    let raw = match input.sex {
        BiologicalSex::Male => navy_body_fat_male(waist_cm, neck_cm, weight_kg)?,
        BiologicalSex::Female => {
            let hip_cm = positive(input.hip_value)
                .map(|hip| input.unit.length_to_cm(hip))
                .ok_or_else(|| {
                    CalculatorError::invalid(
                        "hipValue",
                        "hip measurement is required for female estimates",
                    )
                })?;
            navy_body_fat_female(waist_cm, hip_cm, neck_cm, weight_kg)?
        }
    };

    let body_fat_percent = round_to(raw.clamp(MIN_BODY_FAT_PERCENT, MAX_BODY_FAT_PERCENT), 1);
    let fat_mass_kg = round_to(
        ensure_finite(weight_kg * body_fat_percent / 100.0, "weightValue")?,
        1,
    );
    let lean_mass_kg = round_to(weight_kg - fat_mass_kg, 1);

    Ok(Some(BodyFatResult {
        body_fat_percent,
        category: BodyFatCategory::classify(body_fat_percent, input.sex),
        lean_mass_kg,
        fat_mass_kg,
    }))
}
