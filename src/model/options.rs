// src/model/options.rs

//! Static option tables for the presentation layer.
//!
//! These are inert configuration data: selection widgets map a label to a
//! numeric value (or offer a plain label list). The engines never read
//! them — a planner is free to type any value instead of picking one.

/// A selectable service level and its standard-normal quantile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceLevelOption {
    pub label: &'static str,
    pub z_score: f64,
}

pub const SERVICE_LEVELS: &[ServiceLevelOption] = &[
    ServiceLevelOption { label: "85%", z_score: 1.04 },
    ServiceLevelOption { label: "90%", z_score: 1.28 },
    ServiceLevelOption { label: "95%", z_score: 1.65 },
    ServiceLevelOption { label: "97%", z_score: 1.88 },
    ServiceLevelOption { label: "98%", z_score: 2.05 },
    ServiceLevelOption { label: "99%", z_score: 2.33 },
];

/// A product lifecycle stage and its demand multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifecycleOption {
    pub label: &'static str,
    pub factor: f64,
}

pub const PRODUCT_LIFECYCLES: &[LifecycleOption] = &[
    LifecycleOption { label: "Introduction (x0.5)", factor: 0.5 },
    LifecycleOption { label: "Growth (x1.5)", factor: 1.5 },
    LifecycleOption { label: "Maturity (x1.0)", factor: 1.0 },
    LifecycleOption { label: "Decline (x0.7)", factor: 0.7 },
];

/// Disposition choices offered per slow-moving SKU.
pub const RECOMMENDED_ACTIONS: &[&str] = &[
    "Switch after depletion",
    "Switch immediately",
    "Accelerate consumption",
];

/// How to treat in-transit material when switching parts.
pub const IN_TRANSIT_HANDLINGS: &[&str] = &[
    "Convert in-transit to new part",
    "Receive in-transit as normal",
];
