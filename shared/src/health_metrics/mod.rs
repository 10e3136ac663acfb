//! Health metrics calculations module
//!
//! Four independent calculators: BMI, BMR/TDEE calories, macro split and
//! U.S. Navy body fat. Each takes a small input struct mirroring a form,
//! normalizes units, applies its formula and returns a fully classified
//! result.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no side effects, no hidden state; same input, same output
//! 2. **Explicit Outcomes**: incomplete input yields `Ok(None)`, unusable input
//!    yields a [`CalculatorError`](crate::errors::CalculatorError), never NaN
//! 3. **Closed Options**: units, sex, activity levels, goals and presets are enums
//! 4. **One Rounding Rule**: round half away from zero (`f64::round`) everywhere

use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;

pub mod bmi;
pub mod body_fat;
pub mod calories;
pub mod macros;

pub use bmi::*;
pub use body_fat::*;
pub use calories::*;
pub use macros::*;

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn label(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "Male",
            BiologicalSex::Female => "Female",
        }
    }
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Round to a number of decimal places, half away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Largest whole amount a calculator reports (2^53, exact in `f64` and JavaScript)
pub const MAX_WHOLE_AMOUNT: i64 = 1 << 53;

/// Round a calorie or gram amount to a whole number
///
/// Non-finite values and values beyond [`MAX_WHOLE_AMOUNT`] are rejected
/// instead of saturating.
pub(crate) fn round_whole(value: f64, field: &'static str) -> Result<i64, CalculatorError> {
    let rounded = value.round();
    if rounded.is_finite() && rounded.abs() <= MAX_WHOLE_AMOUNT as f64 {
        Ok(rounded as i64)
    } else {
        Err(CalculatorError::invalid(
            field,
            "values produce a result outside the representable range",
        ))
    }
}
