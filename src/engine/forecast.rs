// src/engine/forecast.rs

//! The forecast engine: closed-form demand forecast and stock-level
//! recommendations.
//!
//! Everything here is a pure function of [`SimulationParameters`]; the
//! presentation layer calls [`compute`] after every validated edit.

use crate::model::params::{SimulationParameters, SimulationResults};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    /// A negative lead time would put a negative under the square root in
    /// the safety-stock formula. The edit boundary already refuses such
    /// input; this guard covers library callers that build parameters
    /// directly.
    #[error("lead time must be non-negative, got {0}")]
    NegativeLeadTime(f64),
}

/// Computes the four derived inventory metrics.
///
/// # Formulas
/// ```text
/// finalForecast    = historicalMonthlySales × lifecycleFactor × marketActivityCoefficient
/// safetyStock      = Z × σ × √L
/// reorderPoint     = finalForecast × L + safetyStock
/// recommendedStock = finalForecast × 3 + safetyStock   (3-month cover)
/// ```
///
/// A lead time of zero is valid and yields zero safety stock and a zero
/// reorder point. A negative lead time is rejected rather than being
/// allowed to produce NaN.
pub fn compute(params: &SimulationParameters) -> Result<SimulationResults, ForecastError> {
    if params.lead_time_months < 0.0 {
        return Err(ForecastError::NegativeLeadTime(params.lead_time_months));
    }

    let final_forecast = params.historical_monthly_sales
        * params.product_lifecycle_factor
        * params.market_activity_coefficient;

    let safety_stock =
        params.service_level_z_score * params.demand_std_dev * params.lead_time_months.sqrt();

    let reorder_point = final_forecast * params.lead_time_months + safety_stock;
    let recommended_stock = final_forecast * 3.0 + safety_stock;

    Ok(SimulationResults {
        final_forecast,
        safety_stock,
        reorder_point,
        recommended_stock,
    })
}
