// src/model/inventory.rs

use serde::Serialize;

/// Stock position for a single SKU.
///
/// Only `avg_monthly_consumption` is user-editable during a session; the
/// stock figures are facts of the current position. Coverage and risk are
/// never stored here, they are recomputed on read by the risk engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    /// Part number, unique within the collection.
    pub sku: String,
    /// Units on hand.
    pub current_stock: u32,
    /// Units ordered but not yet received.
    pub in_transit: u32,
    /// Average units consumed per month (planner-adjustable what-if value).
    pub avg_monthly_consumption: f64,
}

impl InventoryItem {
    pub fn new(sku: &str, current_stock: u32, in_transit: u32, avg_monthly_consumption: f64) -> Self {
        Self {
            sku: sku.to_string(),
            current_stock,
            in_transit,
            avg_monthly_consumption,
        }
    }

    /// On-hand plus in-transit units.
    pub fn total_stock(&self) -> u32 {
        self.current_stock + self.in_transit
    }
}

/// The demo stock positions a fresh session starts from.
pub fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("201-10800-000", 431, 1630, 144.0),
        InventoryItem::new("201-10800-002", 236, 581, 118.0),
        InventoryItem::new("201-15050-000", 1572, 388, 157.0),
    ]
}
