//! Calculator service
//!
//! Thin layer between the HTTP routes and the shared engine: runs a
//! calculation, records its outcome, and turns the engine's three-way
//! result into either a value or an [`ApiError`].

use crate::error::ApiError;
use healthcalc_shared::{
    compute_bmi, compute_body_fat, compute_calories, compute_macros, BmiInput, BmiResult,
    BodyFatInput, BodyFatResult, CalcResult, Calculator, CalorieInput, CalorieResult, MacroInput,
    MacroResult,
};
use tracing::{debug, warn};

/// Metric name for calculator invocations
pub const CALCULATOR_REQUESTS_TOTAL: &str = "calculator_requests_total";

/// How a calculator call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Computed,
    Incomplete,
    Invalid,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Computed => "computed",
            Outcome::Incomplete => "incomplete",
            Outcome::Invalid => "invalid",
        }
    }
}

/// Calculator service
pub struct CalculatorService;

impl CalculatorService {
    pub fn bmi(input: &BmiInput) -> Result<BmiResult, ApiError> {
        Self::finish(Calculator::Bmi, compute_bmi(input), || input.missing_fields())
    }

    pub fn calories(input: &CalorieInput) -> Result<CalorieResult, ApiError> {
        let result = Self::finish(Calculator::Calories, compute_calories(input), || {
            input.missing_fields()
        })?;
        if !result.below_safe_minimum.is_empty() {
            debug!(
                tdee = result.tdee,
                flagged = ?result.below_safe_minimum,
                "Calorie targets below safe minimum"
            );
        }
        Ok(result)
    }

    pub fn macros(input: &MacroInput) -> Result<MacroResult, ApiError> {
        Self::finish(Calculator::Macros, compute_macros(input), || input.missing_fields())
    }

    pub fn body_fat(input: &BodyFatInput) -> Result<BodyFatResult, ApiError> {
        Self::finish(Calculator::BodyFat, compute_body_fat(input), || {
            input.missing_fields()
        })
    }

    fn finish<T>(
        calculator: Calculator,
        outcome: CalcResult<T>,
        missing_fields: impl FnOnce() -> Vec<&'static str>,
    ) -> Result<T, ApiError> {
        match outcome {
            Ok(Some(result)) => {
                Self::record(calculator, Outcome::Computed);
                debug!(calculator = calculator.slug(), "Calculation completed");
                Ok(result)
            }
            Ok(None) => {
                Self::record(calculator, Outcome::Incomplete);
                let fields = missing_fields();
                debug!(calculator = calculator.slug(), missing = ?fields, "Incomplete input");
                Err(ApiError::IncompleteInput(fields))
            }
            Err(err) => {
                Self::record(calculator, Outcome::Invalid);
                warn!(
                    calculator = calculator.slug(),
                    field = err.field(),
                    "Rejected input: {}",
                    err
                );
                Err(err.into())
            }
        }
    }

    fn record(calculator: Calculator, outcome: Outcome) {
        metrics::counter!(
            CALCULATOR_REQUESTS_TOTAL,
            "calculator" => calculator.slug(),
            "outcome" => outcome.as_str()
        )
        .increment(1);
    }
}
