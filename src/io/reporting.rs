// src/io/reporting.rs

use crate::engine::risk::RiskAssessment;
use crate::model::inventory::InventoryItem;
use crate::model::params::RoundedResults;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// One row of the exported risk report.
#[derive(Debug, Clone, Serialize)]
pub struct RiskRecord {
    pub sku: String,
    pub current_stock: u32,
    pub in_transit: u32,
    pub avg_monthly_consumption: f64,
    /// Formatted coverage duration ("14.3", or "N/A" for infinite cover).
    pub months_of_consumption: String,
    pub risk: &'static str,
}

impl RiskRecord {
    pub fn from_assessment(item: &InventoryItem, assessment: &RiskAssessment) -> Self {
        Self {
            sku: item.sku.clone(),
            current_stock: item.current_stock,
            in_transit: item.in_transit,
            avg_monthly_consumption: item.avg_monthly_consumption,
            months_of_consumption: assessment.months_display(),
            risk: assessment.risk.as_str(),
        }
    }
}

/// Writes the classified inventory rows to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "risk_report.csv").
/// * `rows` - Classified inventory rows, as returned by
///   `PlanningSession::assess_inventory`.
pub fn write_risk_report(
    file_path: &str,
    rows: &[(&InventoryItem, RiskAssessment)],
) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for (item, assessment) in rows {
        wtr.serialize(RiskRecord::from_assessment(item, assessment))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the four forecast metrics as a console panel.
pub fn format_results_panel(results: &RoundedResults) -> String {
    let mut out = String::new();
    out.push_str("=== Stocking Recommendation ===\n");
    out.push_str(&format!(
        "Final monthly forecast:   {:>8}\n",
        results.final_forecast
    ));
    out.push_str(&format!(
        "Safety stock (SS):        {:>8}\n",
        results.safety_stock
    ));
    out.push_str(&format!(
        "Reorder point (ROP):      {:>8}\n",
        results.reorder_point
    ));
    out.push_str(&format!(
        "Recommended stock (3 mo): {:>8}\n",
        results.recommended_stock
    ));
    out
}

/// Renders the per-SKU risk table for the console.
pub fn format_risk_table(rows: &[(&InventoryItem, RiskAssessment)]) -> String {
    let mut out = String::new();
    out.push_str("=== Slow-Moving Inventory Risk ===\n");
    out.push_str(&format!(
        "{:<15} {:>8} {:>10} {:>12} {:>8}  {}\n",
        "SKU", "On hand", "In transit", "Cons./month", "Months", "Risk"
    ));

    for (item, assessment) in rows {
        out.push_str(&format!(
            "{:<15} {:>8} {:>10} {:>12.1} {:>8}  {}\n",
            item.sku,
            item.current_stock,
            item.in_transit,
            item.avg_monthly_consumption,
            assessment.months_display(),
            assessment.risk,
        ));
    }
    out
}
