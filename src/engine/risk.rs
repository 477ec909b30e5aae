// src/engine/risk.rs

//! Slow-moving inventory classification.
//!
//! A SKU whose on-hand plus in-transit stock covers more than ten months of
//! consumption is flagged as high obsolescence risk. Zero consumption means
//! infinite cover, which is always high risk.

use crate::model::inventory::InventoryItem;
use serde::Serialize;
use std::fmt;

/// Coverage beyond this many months flags a SKU as slow-moving.
pub const SLOW_MOVING_THRESHOLD_MONTHS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived coverage figures for one SKU. Recomputed on every read, never
/// stored on the item itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// Months until the total stock is consumed; `f64::INFINITY` when
    /// consumption is zero.
    pub months_of_consumption: f64,
    pub risk: RiskLevel,
}

impl RiskAssessment {
    /// Display string for the coverage duration: one decimal place, or
    /// "N/A" when consumption is zero and the duration is infinite.
    pub fn months_display(&self) -> String {
        if self.months_of_consumption.is_infinite() {
            "N/A".to_string()
        } else {
            format!("{:.1}", self.months_of_consumption)
        }
    }
}

/// Classifies a single SKU.
///
/// ```text
/// months = (currentStock + inTransit) / avgMonthlyConsumption   (∞ if zero)
/// risk   = months > 10 ? HIGH : LOW                             (strict >)
/// ```
pub fn classify(item: &InventoryItem) -> RiskAssessment {
    let total_stock = f64::from(item.total_stock());

    let months_of_consumption = if item.avg_monthly_consumption > 0.0 {
        total_stock / item.avg_monthly_consumption
    } else {
        f64::INFINITY
    };

    let risk = if months_of_consumption > SLOW_MOVING_THRESHOLD_MONTHS {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        months_of_consumption,
        risk,
    }
}
