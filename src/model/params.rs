// src/model/params.rs

use serde::Serialize;

/// The six business parameters driving the forecast model.
///
/// All values are plain numbers supplied by the planner; validation of raw
/// text input happens at the session edit boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    /// Average units sold per month, taken from history.
    pub historical_monthly_sales: f64,
    /// Multiplier for the product's market stage (introduction, growth, ...).
    pub product_lifecycle_factor: f64,
    /// Multiplier for planned promotions / market activity.
    pub market_activity_coefficient: f64,
    /// Purchasing lead time L, in months.
    pub lead_time_months: f64,
    /// Standard-normal quantile Z for the target service level.
    pub service_level_z_score: f64,
    /// Standard deviation of monthly demand.
    pub demand_std_dev: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            historical_monthly_sales: 1000.0,
            product_lifecycle_factor: 1.0,
            market_activity_coefficient: 1.0,
            lead_time_months: 2.0,
            service_level_z_score: 1.65, // 95% service level
            demand_std_dev: 150.0,
        }
    }
}

/// The four derived inventory metrics, kept at full floating-point
/// precision. Use [`SimulationResults::rounded`] for display values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResults {
    pub final_forecast: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub recommended_stock: f64,
}

/// Display view of the results, every value rounded independently to the
/// nearest integer (ties round away from zero, i.e. `f64::round`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundedResults {
    pub final_forecast: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub recommended_stock: i64,
}

impl SimulationResults {
    pub fn rounded(&self) -> RoundedResults {
        RoundedResults {
            final_forecast: self.final_forecast.round() as i64,
            safety_stock: self.safety_stock.round() as i64,
            reorder_point: self.reorder_point.round() as i64,
            recommended_stock: self.recommended_stock.round() as i64,
        }
    }
}
