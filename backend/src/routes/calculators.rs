//! Calculator API routes
//!
//! Every calculator accepts a JSON form and answers with either a result,
//! a 400 naming the missing fields, or a 400 naming the invalid field.

use crate::error::ApiError;
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use healthcalc_shared::{
    calculator_catalog, calculator_options, BmiInput, BmiResult, BodyFatInput, BodyFatResult,
    CalculatorInfo, CalculatorOptions, CalorieInput, CalorieResult, MacroInput, MacroResult,
};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_calculators))
        .route("/options", get(get_options))
        .route("/bmi", post(calculate_bmi))
        .route("/calories", post(calculate_calories))
        .route("/macros", post(calculate_macros))
        .route("/bodyfat", post(calculate_body_fat))
}

/// GET /calculators - List available calculators
async fn list_calculators() -> Json<Vec<CalculatorInfo>> {
    Json(calculator_catalog())
}

/// GET /calculators/options - Option tables for building calculator forms
async fn get_options() -> Json<CalculatorOptions> {
    Json(calculator_options())
}

/// POST /calculators/bmi
async fn calculate_bmi(
    payload: Result<Json<BmiInput>, JsonRejection>,
) -> Result<Json<BmiResult>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(CalculatorService::bmi(&input)?))
}

/// POST /calculators/calories
///
/// Targets are never clamped; goals under the safe minimum are listed in
/// `belowSafeMinimum` instead.
async fn calculate_calories(
    payload: Result<Json<CalorieInput>, JsonRejection>,
) -> Result<Json<CalorieResult>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(CalculatorService::calories(&input)?))
}

/// POST /calculators/macros
async fn calculate_macros(
    payload: Result<Json<MacroInput>, JsonRejection>,
) -> Result<Json<MacroResult>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(CalculatorService::macros(&input)?))
}

/// POST /calculators/bodyfat
async fn calculate_body_fat(
    payload: Result<Json<BodyFatInput>, JsonRejection>,
) -> Result<Json<BodyFatResult>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(CalculatorService::body_fat(&input)?))
}
