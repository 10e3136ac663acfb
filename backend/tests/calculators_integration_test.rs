//! Integration tests for the calculator endpoints

mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn test_catalog_lists_all_calculators() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/calculators").await;
    assert_eq!(status, StatusCode::OK);

    let catalog: serde_json::Value = serde_json::from_str(&body).unwrap();
    let slugs: Vec<&str> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["bmi", "calories", "macros", "bodyfat"]);
}

#[tokio::test]
async fn test_options_tables() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/calculators/options").await;
    assert_eq!(status, StatusCode::OK);

    let options: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(options["activityLevels"].as_array().unwrap().len(), 5);
    assert_eq!(options["activityLevels"][0]["multiplier"], json!(1.2));
    assert_eq!(options["ratioPresets"].as_array().unwrap().len(), 4);
    assert_eq!(options["bmiBands"].as_array().unwrap().len(), 4);
    assert_eq!(options["unitSystems"][0]["value"], "metric");
    assert_eq!(options["unitSystems"][0]["weightLabel"], "kg");
    assert_eq!(options["unitSystems"][1]["value"], "imperial");
    assert_eq!(options["unitSystems"][1]["lengthLabel"], "in");
}

// =============================================================================
// BMI
// =============================================================================

#[tokio::test]
async fn test_bmi_metric() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bmi",
            r#"{"heightValue": 175, "weightValue": 70, "unit": "metric"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], json!(22.9));
    assert_eq!(body["category"], "Normal weight");
    assert!(body["description"].as_str().unwrap().len() > 0);
}

#[rstest]
#[case(50.0, 16.3, "Underweight")]
#[case(70.0, 22.9, "Normal weight")]
#[case(80.0, 26.1, "Overweight")]
#[case(100.0, 32.7, "Obese")]
#[tokio::test]
async fn test_bmi_categories(#[case] weight: f64, #[case] bmi: f64, #[case] category: &str) {
    let app = common::TestApp::new();
    let request = json!({"heightValue": 175, "weightValue": weight}).to_string();

    let (status, body) = app.post_json("/calculators/bmi", &request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], json!(bmi));
    assert_eq!(body["category"], category);
}

#[tokio::test]
async fn test_bmi_imperial() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bmi",
            r#"{"heightValue": 70, "weightValue": 154, "unit": "imperial"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], json!(22.1));
}

#[tokio::test]
async fn test_bmi_missing_fields() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json("/calculators/bmi", r#"{"heightValue": 0}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INCOMPLETE_INPUT");
    assert_eq!(
        body["error"]["missingFields"],
        json!(["heightValue", "weightValue"])
    );
    assert_eq!(body["error"]["message"], "Please provide: Height, Weight");
}

#[tokio::test]
async fn test_bmi_unknown_unit_is_rejected() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bmi",
            r#"{"heightValue": 175, "weightValue": 70, "unit": "stone"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = common::TestApp::new();

    let (status, body) = app.post_json("/calculators/bmi", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Calories
// =============================================================================

#[tokio::test]
async fn test_calories_male_sedentary() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/calories",
            r#"{"sex": "male", "ageYears": 30, "heightValue": 175, "weightValue": 70,
                "activityMultiplier": 1.2}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmr"], 1649);
    assert_eq!(body["tdee"], 1979);
    assert_eq!(body["targets"]["maintain"], 1979);
    assert_eq!(body["targets"]["mildLoss"], 1729);
    assert_eq!(body["targets"]["loss"], 1479);
    assert_eq!(body["targets"]["extremeLoss"], 979);
    assert_eq!(body["belowSafeMinimum"], json!(["extremeLoss"]));
}

#[tokio::test]
async fn test_calories_activity_defaults_to_sedentary() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/calories",
            r#"{"sex": "male", "ageYears": 30, "heightValue": 175, "weightValue": 70}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tdee"], 1979);
}

#[tokio::test]
async fn test_calories_missing_age() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/calories",
            r#"{"sex": "female", "heightValue": 165, "weightValue": 60}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["missingFields"], json!(["ageYears"]));
}

#[tokio::test]
async fn test_calories_unknown_activity_multiplier() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/calories",
            r#"{"sex": "male", "ageYears": 30, "heightValue": 175, "weightValue": 70,
                "activityMultiplier": 1.3}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Macros
// =============================================================================

#[tokio::test]
async fn test_macros_keto_loss() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/macros",
            r#"{"dailyCalories": 2200, "goal": "loss", "ratioPreset": "keto"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["targetCalories"], 1760);
    assert_eq!(body["proteinGrams"], 110);
    assert_eq!(body["carbGrams"], 22);
    assert_eq!(body["fatGrams"], 137);
    assert_eq!(body["fiberGrams"], 30);
    assert_eq!(body["proteinCalories"], 440);
    assert_eq!(body["carbCalories"], 88);
    assert_eq!(body["fatCalories"], 1233);
}

#[tokio::test]
async fn test_macros_defaults_and_fiber_from_weight() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/macros",
            r#"{"dailyCalories": 2000, "bodyWeightKg": 80}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["targetCalories"], 2000);
    assert_eq!(body["proteinGrams"], 150);
    assert_eq!(body["carbGrams"], 200);
    assert_eq!(body["fatGrams"], 67);
    assert_eq!(body["fiberGrams"], 28);
}

#[tokio::test]
async fn test_macros_missing_calories() {
    let app = common::TestApp::new();

    let (status, body) = app.post_json("/calculators/macros", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INCOMPLETE_INPUT");
    assert_eq!(body["error"]["missingFields"], json!(["dailyCalories"]));
}

#[tokio::test]
async fn test_macros_oversized_calories_are_rejected() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json("/calculators/macros", r#"{"dailyCalories": 1e20}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "dailyCalories");
}

// =============================================================================
// Body fat
// =============================================================================

#[tokio::test]
async fn test_body_fat_male() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bodyfat",
            r#"{"sex": "male", "weightValue": 80, "waistValue": 65, "neckValue": 38}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bodyFatPercent"], json!(19.9));
    assert_eq!(body["category"], "Average");
    assert_eq!(body["leanMassKg"], json!(64.1));
    assert_eq!(body["fatMassKg"], json!(15.9));
}

#[tokio::test]
async fn test_body_fat_female() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bodyfat",
            r#"{"sex": "female", "weightValue": 60, "waistValue": 60, "hipValue": 50,
                "neckValue": 40}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bodyFatPercent"], json!(24.6));
    assert_eq!(body["category"], "Fit");
}

#[tokio::test]
async fn test_body_fat_waist_not_above_neck() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bodyfat",
            r#"{"sex": "male", "weightValue": 80, "waistValue": 38, "neckValue": 38}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "waistValue");
}

#[tokio::test]
async fn test_body_fat_female_without_hip() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bodyfat",
            r#"{"sex": "female", "weightValue": 60, "waistValue": 60, "neckValue": 40}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "hipValue");
}

#[tokio::test]
async fn test_body_fat_requires_sex() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_json(
            "/calculators/bodyfat",
            r#"{"weightValue": 80, "waistValue": 65, "neckValue": 38}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
