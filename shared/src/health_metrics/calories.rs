//! BMR and TDEE calorie calculations (Mifflin-St Jeor)

use serde::{Deserialize, Serialize};

use super::{round_whole, BiologicalSex};
use crate::errors::CalcResult;
use crate::units::UnitSystem;
use crate::validation::{missing, positive, positive_whole};

/// Daily intake below which a target is flagged as unsafe without supervision
pub const MIN_SAFE_DAILY_CALORIES: i64 = 1200;

/// Activity level for TDEE calculation
///
/// On the wire an activity level is its multiplier (`1.2`, `1.375`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "f64", into = "f64")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job or training twice a day
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise",
            ActivityLevel::LightlyActive => "1-3 days/week exercise",
            ActivityLevel::ModeratelyActive => "3-5 days/week exercise",
            ActivityLevel::VeryActive => "6-7 days/week exercise",
            ActivityLevel::ExtraActive => "Physical job or 2x training",
        }
    }

    /// Look up the level whose multiplier matches exactly
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - multiplier).abs() < 1e-9)
    }
}

impl TryFrom<f64> for ActivityLevel {
    type Error = String;

    fn try_from(multiplier: f64) -> Result<Self, Self::Error> {
        Self::from_multiplier(multiplier).ok_or_else(|| {
            format!(
                "Invalid activity multiplier {}. Must be one of: 1.2, 1.375, 1.55, 1.725, 1.9",
                multiplier
            )
        })
    }
}

impl From<ActivityLevel> for f64 {
    fn from(level: ActivityLevel) -> Self {
        level.multiplier()
    }
}

/// Calorie calculator form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieInput {
    #[serde(default)]
    pub unit: UnitSystem,
    pub sex: BiologicalSex,
    #[serde(default)]
    pub age_years: Option<u32>,
    /// Height in cm (metric) or inches (imperial)
    #[serde(default)]
    pub height_value: Option<f64>,
    /// Weight in kg (metric) or lbs (imperial)
    #[serde(default)]
    pub weight_value: Option<f64>,
    #[serde(default, rename = "activityMultiplier")]
    pub activity_level: ActivityLevel,
}

impl CalorieInput {
    /// Required fields that hold no usable value
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("ageYears", positive_whole(self.age_years).is_some()),
            ("heightValue", positive(self.height_value).is_some()),
            ("weightValue", positive(self.weight_value).is_some()),
        ])
    }
}

/// Named calorie targets, from maintenance to the steepest deficit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalorieGoal {
    Maintain,
    MildLoss,
    Loss,
    ExtremeLoss,
}

impl CalorieGoal {
    pub const ALL: [CalorieGoal; 4] = [
        CalorieGoal::Maintain,
        CalorieGoal::MildLoss,
        CalorieGoal::Loss,
        CalorieGoal::ExtremeLoss,
    ];

    /// Daily deficit subtracted from TDEE
    pub fn deficit(&self) -> i64 {
        match self {
            CalorieGoal::Maintain => 0,
            CalorieGoal::MildLoss => 250,
            CalorieGoal::Loss => 500,
            CalorieGoal::ExtremeLoss => 1000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalorieGoal::Maintain => "Maintain Weight",
            CalorieGoal::MildLoss => "Mild Loss",
            CalorieGoal::Loss => "Weight Loss",
            CalorieGoal::ExtremeLoss => "Extreme Loss",
        }
    }

    /// Expected rate of change at this deficit
    pub fn weekly_rate(&self) -> &'static str {
        match self {
            CalorieGoal::Maintain => "0 lb/week",
            CalorieGoal::MildLoss => "0.5 lb/week",
            CalorieGoal::Loss => "1 lb/week",
            CalorieGoal::ExtremeLoss => "2 lb/week",
        }
    }
}

/// Daily calorie targets derived from TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTargets {
    pub maintain: i64,
    pub mild_loss: i64,
    pub loss: i64,
    pub extreme_loss: i64,
}

impl CalorieTargets {
    /// Targets are not floored; see [`CalorieTargets::below_safe_minimum`]
    pub fn from_tdee(tdee: i64) -> Self {
        Self {
            maintain: tdee - CalorieGoal::Maintain.deficit(),
            mild_loss: tdee - CalorieGoal::MildLoss.deficit(),
            loss: tdee - CalorieGoal::Loss.deficit(),
            extreme_loss: tdee - CalorieGoal::ExtremeLoss.deficit(),
        }
    }

    pub fn get(&self, goal: CalorieGoal) -> i64 {
        match goal {
            CalorieGoal::Maintain => self.maintain,
            CalorieGoal::MildLoss => self.mild_loss,
            CalorieGoal::Loss => self.loss,
            CalorieGoal::ExtremeLoss => self.extreme_loss,
        }
    }

    /// Goals whose target falls below [`MIN_SAFE_DAILY_CALORIES`]
    pub fn below_safe_minimum(&self) -> Vec<CalorieGoal> {
        CalorieGoal::ALL
            .into_iter()
            .filter(|goal| self.get(*goal) < MIN_SAFE_DAILY_CALORIES)
            .collect()
    }
}

/// Calorie calculation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieResult {
    /// Basal Metabolic Rate, kcal/day
    pub bmr: i64,
    /// Total Daily Energy Expenditure, kcal/day
    pub tdee: i64,
    pub targets: CalorieTargets,
    /// Targets under the safe daily minimum, for the caller to warn about
    pub below_safe_minimum: Vec<CalorieGoal>,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Compute BMR, TDEE and goal targets from form input
pub fn compute_calories(input: &CalorieInput) -> CalcResult<CalorieResult> {
    let (Some(age), Some(height), Some(weight)) = (
        positive_whole(input.age_years),
        positive(input.height_value),
        positive(input.weight_value),
    ) else {
        return Ok(None);
    };

    let weight_kg = input.unit.weight_to_kg(weight);
    let height_cm = input.unit.length_to_cm(height);

    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, age, input.sex);
    let bmr = round_whole(bmr, "weightValue")?;
    // TDEE scales the already-rounded BMR
    let tdee = round_whole(bmr as f64 * input.activity_level.multiplier(), "weightValue")?;

    let targets = CalorieTargets::from_tdee(tdee);

    Ok(Some(CalorieResult {
        bmr,
        tdee,
        below_safe_minimum: targets.below_safe_minimum(),
        targets,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(
        unit: UnitSystem,
        sex: BiologicalSex,
        age: u32,
        height: f64,
        weight: f64,
        activity_level: ActivityLevel,
    ) -> CalorieInput {
        CalorieInput {
            unit,
            sex,
            age_years: Some(age),
            height_value: Some(height),
            weight_value: Some(weight),
            activity_level,
        }
    }

    #[test]
    fn test_male_sedentary_example() {
        let result = compute_calories(&input(
            UnitSystem::Metric,
            BiologicalSex::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Sedentary,
        ))
        .unwrap()
        .unwrap();

        // 700 + 1093.75 - 150 + 5 = 1648.75
        assert_eq!(result.bmr, 1649);
        assert_eq!(result.tdee, 1979);
        assert_eq!(result.targets.maintain, 1979);
        assert_eq!(result.targets.mild_loss, 1729);
        assert_eq!(result.targets.loss, 1479);
        assert_eq!(result.targets.extreme_loss, 979);
        assert_eq!(result.below_safe_minimum, vec![CalorieGoal::ExtremeLoss]);
    }

    #[test]
    fn test_female_moderately_active_example() {
        let result = compute_calories(&input(
            UnitSystem::Metric,
            BiologicalSex::Female,
            25,
            165.0,
            60.0,
            ActivityLevel::ModeratelyActive,
        ))
        .unwrap()
        .unwrap();

        // 600 + 1031.25 - 125 - 161 = 1345.25; 1345 * 1.55 = 2084.75
        assert_eq!(result.bmr, 1345);
        assert_eq!(result.tdee, 2085);
        assert!(result.below_safe_minimum.is_empty());
    }

    #[test]
    fn test_imperial_inputs_are_normalized() {
        let result = compute_calories(&input(
            UnitSystem::Imperial,
            BiologicalSex::Male,
            30,
            70.0,
            154.0,
            ActivityLevel::LightlyActive,
        ))
        .unwrap()
        .unwrap();

        // 69.853 kg, 177.8 cm -> 1664.78; 1665 * 1.375 = 2289.375
        assert_eq!(result.bmr, 1665);
        assert_eq!(result.tdee, 2289);
    }

    #[test]
    fn test_incomplete_input_yields_no_result() {
        let mut incomplete = input(
            UnitSystem::Metric,
            BiologicalSex::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Sedentary,
        );
        incomplete.age_years = Some(0);
        incomplete.weight_value = None;

        assert_eq!(compute_calories(&incomplete), Ok(None));
        assert_eq!(incomplete.missing_fields(), vec!["ageYears", "weightValue"]);
    }

    #[test]
    fn test_negative_targets_pass_through_with_advisory() {
        // Tiny inputs push the steep deficits below zero
        let result = compute_calories(&input(
            UnitSystem::Metric,
            BiologicalSex::Female,
            90,
            50.0,
            20.0,
            ActivityLevel::Sedentary,
        ))
        .unwrap()
        .unwrap();

        assert_eq!(result.targets.extreme_loss, result.tdee - 1000);
        assert!(result.targets.extreme_loss < 0);
        assert_eq!(result.below_safe_minimum, CalorieGoal::ALL.to_vec());
    }

    #[test]
    fn test_oversized_inputs_are_rejected() {
        let result = compute_calories(&input(
            UnitSystem::Metric,
            BiologicalSex::Male,
            30,
            175.0,
            1e18,
            ActivityLevel::Sedentary,
        ));
        assert_eq!(result.unwrap_err().field(), "weightValue");
    }

    #[test]
    fn test_activity_multipliers() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
        assert_eq!(ActivityLevel::from_multiplier(1.725), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_multiplier(1.5), None);
    }

    #[test]
    fn test_activity_level_wire_format() {
        let level: ActivityLevel = serde_json::from_str("1.55").unwrap();
        assert_eq!(level, ActivityLevel::ModeratelyActive);
        assert_eq!(serde_json::to_string(&ActivityLevel::ExtraActive).unwrap(), "1.9");
        assert!(serde_json::from_str::<ActivityLevel>("1.3").is_err());
        assert!(serde_json::from_str::<ActivityLevel>("\"sedentary\"").is_err());
    }

    #[test]
    fn test_input_wire_format() {
        let json = r#"{
            "unit": "imperial",
            "sex": "female",
            "ageYears": 41,
            "heightValue": 64,
            "weightValue": 150,
            "activityMultiplier": 1.375
        }"#;
        let parsed: CalorieInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.unit, UnitSystem::Imperial);
        assert_eq!(parsed.sex, BiologicalSex::Female);
        assert_eq!(parsed.age_years, Some(41));
        assert_eq!(parsed.activity_level, ActivityLevel::LightlyActive);
    }

    #[test]
    fn test_result_wire_format() {
        let targets = CalorieTargets::from_tdee(1100);
        let json = serde_json::to_value(CalorieResult {
            bmr: 1000,
            tdee: 1100,
            below_safe_minimum: targets.below_safe_minimum(),
            targets,
        })
        .unwrap();
        assert_eq!(json["targets"]["mildLoss"], 850);
        assert_eq!(json["targets"]["extremeLoss"], 100);
        assert_eq!(json["belowSafeMinimum"][0], "maintain");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Targets keep their fixed offsets from TDEE
        #[test]
        fn prop_target_offsets(
            weight in 30.0f64..200.0,
            height in 120.0f64..220.0,
            age in 1u32..100,
            level in 0usize..5
        ) {
            let result = compute_calories(&input(
                UnitSystem::Metric,
                BiologicalSex::Male,
                age,
                height,
                weight,
                ActivityLevel::ALL[level],
            )).unwrap().unwrap();
            prop_assert_eq!(result.targets.maintain, result.tdee);
            prop_assert_eq!(result.targets.mild_loss, result.tdee - 250);
            prop_assert_eq!(result.targets.loss, result.tdee - 500);
            prop_assert_eq!(result.targets.extreme_loss, result.tdee - 1000);
        }

        /// Property: Male BMR > Female BMR (same stats)
        #[test]
        fn prop_male_bmr_higher(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20u32..60
        ) {
            let bmr_male = calculate_bmr_mifflin(weight, height, age, BiologicalSex::Male);
            let bmr_female = calculate_bmr_mifflin(weight, height, age, BiologicalSex::Female);
            prop_assert!(bmr_male > bmr_female);
        }

        /// Property: Identical input, identical output
        #[test]
        fn prop_calories_idempotent(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80
        ) {
            let form = input(
                UnitSystem::Imperial,
                BiologicalSex::Female,
                age,
                height,
                weight,
                ActivityLevel::VeryActive,
            );
            prop_assert_eq!(compute_calories(&form), compute_calories(&form));
        }
    }
}
