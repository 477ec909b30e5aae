// src/session/mod.rs

//! The interactive planning session.
//!
//! [`PlanningSession`] owns all live state: the current simulation
//! parameters, the results derived from them, and the inventory rows of the
//! risk dashboard. Raw text edits from the presentation layer enter through
//! [`PlanningSession::edit_parameter`] and
//! [`PlanningSession::edit_consumption`]; an edit that does not parse to a
//! finite number in the field's valid range is discarded and the prior
//! state is retained. Every accepted edit recomputes the derived values
//! synchronously before the call returns.

use crate::engine::forecast::{self, ForecastError};
use crate::engine::risk::{self, RiskAssessment};
use crate::model::inventory::{seed_inventory, InventoryItem};
use crate::model::params::{SimulationParameters, SimulationResults};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("value {raw:?} is not a finite number")]
    NotANumber { raw: String },
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("unknown SKU {0:?}")]
    UnknownSku(String),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// The six editable simulation parameters, addressed by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    HistoricalMonthlySales,
    ProductLifecycleFactor,
    MarketActivityCoefficient,
    LeadTimeMonths,
    ServiceLevelZScore,
    DemandStdDev,
}

impl ParameterField {
    pub fn name(self) -> &'static str {
        match self {
            Self::HistoricalMonthlySales => "historical monthly sales",
            Self::ProductLifecycleFactor => "product lifecycle factor",
            Self::MarketActivityCoefficient => "market activity coefficient",
            Self::LeadTimeMonths => "lead time (months)",
            Self::ServiceLevelZScore => "service level Z-score",
            Self::DemandStdDev => "demand standard deviation",
        }
    }

    /// The two lifecycle/market multipliers must be strictly positive;
    /// every other field only needs to be non-negative.
    fn check_range(self, value: f64) -> Result<(), EditError> {
        match self {
            Self::ProductLifecycleFactor | Self::MarketActivityCoefficient => {
                if value <= 0.0 {
                    return Err(EditError::NotPositive {
                        field: self.name(),
                        value,
                    });
                }
            }
            _ => {
                if value < 0.0 {
                    return Err(EditError::Negative {
                        field: self.name(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    fn write_to(self, params: &mut SimulationParameters, value: f64) {
        match self {
            Self::HistoricalMonthlySales => params.historical_monthly_sales = value,
            Self::ProductLifecycleFactor => params.product_lifecycle_factor = value,
            Self::MarketActivityCoefficient => params.market_activity_coefficient = value,
            Self::LeadTimeMonths => params.lead_time_months = value,
            Self::ServiceLevelZScore => params.service_level_z_score = value,
            Self::DemandStdDev => params.demand_std_dev = value,
        }
    }
}

/// All state for one interactive session. Transient by design: initialized
/// from defaults plus seed rows, gone when the session ends.
pub struct PlanningSession {
    params: SimulationParameters,
    results: SimulationResults,
    inventory: Vec<InventoryItem>,
}

impl PlanningSession {
    /// Starts a session from the default business parameters and the demo
    /// inventory rows.
    pub fn new() -> Self {
        // The defaults are inside the engine's valid domain.
        Self::with_state(SimulationParameters::default(), seed_inventory())
            .expect("default parameters are valid")
    }

    /// Starts a session from caller-supplied state.
    pub fn with_state(
        params: SimulationParameters,
        inventory: Vec<InventoryItem>,
    ) -> Result<Self, ForecastError> {
        let results = forecast::compute(&params)?;
        Ok(Self {
            params,
            results,
            inventory,
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn results(&self) -> &SimulationResults {
        &self.results
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Classifies every inventory row. Derived values are recomputed on
    /// each call; rows are independent of one another.
    pub fn assess_inventory(&self) -> Vec<(&InventoryItem, RiskAssessment)> {
        self.inventory
            .iter()
            .map(|item| (item, risk::classify(item)))
            .collect()
    }

    /// Applies a raw text edit to one simulation parameter.
    ///
    /// On success the results are already recomputed when this returns. On
    /// any error the session state is untouched.
    pub fn edit_parameter(&mut self, field: ParameterField, raw: &str) -> Result<(), EditError> {
        let value = parse_finite(raw)?;
        field.check_range(value)?;

        let mut candidate = self.params;
        field.write_to(&mut candidate, value);
        let results = forecast::compute(&candidate)?;

        self.params = candidate;
        self.results = results;
        Ok(())
    }

    /// Applies a raw text edit to one SKU's average monthly consumption,
    /// the only mutable inventory field.
    pub fn edit_consumption(&mut self, sku: &str, raw: &str) -> Result<(), EditError> {
        let value = parse_finite(raw)?;
        if value < 0.0 {
            return Err(EditError::Negative {
                field: "average monthly consumption",
                value,
            });
        }

        let item = self
            .inventory
            .iter_mut()
            .find(|item| item.sku == sku)
            .ok_or_else(|| EditError::UnknownSku(sku.to_string()))?;

        item.avg_monthly_consumption = value;
        Ok(())
    }
}

impl Default for PlanningSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a raw field edit. Anything that is not a finite number (empty
/// field, stray text, "inf", "NaN") is an invalid edit.
fn parse_finite(raw: &str) -> Result<f64, EditError> {
    let value: f64 = raw.trim().parse().map_err(|_| EditError::NotANumber {
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(EditError::NotANumber {
            raw: raw.to_string(),
        });
    }
    Ok(value)
}
