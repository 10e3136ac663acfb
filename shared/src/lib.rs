//! Health Calculators Shared Library
//!
//! The calculation engine (BMI, calories, macros, body fat) plus the unit,
//! validation and catalog types used by the HTTP backend and the WASM
//! bindings.

pub mod catalog;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use catalog::*;
pub use errors::*;
pub use health_metrics::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;
