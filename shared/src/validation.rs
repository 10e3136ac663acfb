//! Input validation functions
//!
//! Form fields arrive as raw strings or optional numbers. A field that is
//! empty, non-numeric, non-finite or not strictly positive counts as "not
//! filled in": the calculators skip the computation instead of failing.

/// Parse a raw form value into a usable measurement
///
/// Returns `None` for empty, non-numeric, non-finite or non-positive input.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(|v| positive(Some(v)))
}

/// Parse a raw whole-number form value (e.g. age in years)
pub fn parse_whole_number(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

/// Keep a value only if it is a finite, strictly positive number
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Keep a whole number only if it is strictly positive
pub fn positive_whole(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map wire field names to user-facing labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "heightValue" => "Height",
        "weightValue" => "Weight",
        "ageYears" => "Age",
        "dailyCalories" => "Daily Calories",
        "bodyWeightKg" => "Body Weight",
        "waistValue" => "Waist",
        "neckValue" => "Neck",
        "hipValue" => "Hip",
        "activityMultiplier" => "Activity Level",
        "ratioPreset" => "Macro Ratio",
        "goal" => "Goal",
        "unit" => "Unit",
        "sex" => "Gender",
        _ => field_name,
    }
}

/// Convert a list of wire field names to user-facing labels
pub fn get_missing_fields_labels(fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .map(|f| get_field_display_label(f).to_string())
        .collect()
}

/// Collect the names of required fields that hold no usable value
pub(crate) fn missing(required: &[(&'static str, bool)]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}
