//! Health Calculators WASM Module
//!
//! Browser bindings for the calculators. Form values are passed through as
//! the raw strings the user typed; results come back as JSON.
//!
//! Each calculator returns `undefined` while the form is incomplete and
//! throws when a filled-in value cannot be used.

use healthcalc_shared::validation::{parse_measurement, parse_whole_number};
use healthcalc_shared::{
    compute_bmi, compute_body_fat, compute_calories, compute_macros, ActivityLevel,
    BiologicalSex, BmiInput, BodyFatInput, CalcResult, CalorieInput, MacroInput, UnitSystem,
};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = bmiFromForm)]
pub fn bmi_from_form(height: &str, weight: &str, unit: &str) -> Result<Option<String>, JsError> {
    run_bmi(height, weight, unit).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen(js_name = caloriesFromForm)]
pub fn calories_from_form(
    unit: &str,
    sex: &str,
    age: &str,
    height: &str,
    weight: &str,
    activity_multiplier: &str,
) -> Result<Option<String>, JsError> {
    run_calories(unit, sex, age, height, weight, activity_multiplier).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen(js_name = macrosFromForm)]
pub fn macros_from_form(
    daily_calories: &str,
    body_weight_kg: &str,
    goal: &str,
    ratio_preset: &str,
) -> Result<Option<String>, JsError> {
    run_macros(daily_calories, body_weight_kg, goal, ratio_preset).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen(js_name = bodyFatFromForm)]
pub fn body_fat_from_form(
    unit: &str,
    sex: &str,
    weight: &str,
    waist: &str,
    neck: &str,
    hip: &str,
) -> Result<Option<String>, JsError> {
    run_body_fat(unit, sex, weight, waist, neck, hip).map_err(|e| JsError::new(&e))
}

// ============================================================================
// Form handling (target independent)
// ============================================================================

fn run_bmi(height: &str, weight: &str, unit: &str) -> Result<Option<String>, String> {
    let input = BmiInput {
        height_value: parse_measurement(height),
        weight_value: parse_measurement(weight),
        unit: parse_unit(unit)?,
    };
    to_json(compute_bmi(&input))
}

fn run_calories(
    unit: &str,
    sex: &str,
    age: &str,
    height: &str,
    weight: &str,
    activity_multiplier: &str,
) -> Result<Option<String>, String> {
    let input = CalorieInput {
        unit: parse_unit(unit)?,
        sex: parse_sex(sex)?,
        age_years: parse_whole_number(age),
        height_value: parse_measurement(height),
        weight_value: parse_measurement(weight),
        activity_level: parse_activity(activity_multiplier)?,
    };
    to_json(compute_calories(&input))
}

fn run_macros(
    daily_calories: &str,
    body_weight_kg: &str,
    goal: &str,
    ratio_preset: &str,
) -> Result<Option<String>, String> {
    let input = MacroInput {
        daily_calories: parse_measurement(daily_calories),
        body_weight_kg: parse_measurement(body_weight_kg),
        goal: parse_choice(goal, "goal")?,
        ratio_preset: parse_choice(ratio_preset, "ratioPreset")?,
    };
    to_json(compute_macros(&input))
}

fn run_body_fat(
    unit: &str,
    sex: &str,
    weight: &str,
    waist: &str,
    neck: &str,
    hip: &str,
) -> Result<Option<String>, String> {
    let input = BodyFatInput {
        unit: parse_unit(unit)?,
        sex: parse_sex(sex)?,
        weight_value: parse_measurement(weight),
        waist_value: parse_measurement(waist),
        neck_value: parse_measurement(neck),
        hip_value: parse_measurement(hip),
    };
    to_json(compute_body_fat(&input))
}

fn parse_sex(raw: &str) -> Result<BiologicalSex, String> {
    raw.parse()
}

fn parse_unit(raw: &str) -> Result<UnitSystem, String> {
    if raw.trim().is_empty() {
        return Ok(UnitSystem::default());
    }
    raw.parse()
}

/// An empty select means sedentary; anything else must be a listed multiplier
fn parse_activity(raw: &str) -> Result<ActivityLevel, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ActivityLevel::default());
    }
    let multiplier: f64 = trimmed
        .parse()
        .map_err(|_| format!("Unknown activity multiplier: {}", trimmed))?;
    ActivityLevel::try_from(multiplier)
}

/// Parse a select value by its wire name; an empty value selects the default
fn parse_choice<T>(raw: &str, field: &str) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_value(serde_json::Value::String(trimmed.to_string()))
        .map_err(|_| format!("Unknown {} option: {}", field, trimmed))
}

fn to_json<T: Serialize>(result: CalcResult<T>) -> Result<Option<String>, String> {
    match result.map_err(|e| e.to_string())? {
        Some(value) => serde_json::to_string(&value)
            .map(Some)
            .map_err(|e| e.to_string()),
        None => Ok(None),
    }
}
