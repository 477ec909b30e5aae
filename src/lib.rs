// src/lib.rs

//! Interactive supply-chain planning calculator.
//!
//! Two independent computational leaves — the forecast engine
//! ([`engine::forecast`]) and the slow-moving-inventory classifier
//! ([`engine::risk`]) — wired together by a [`session::PlanningSession`]
//! that validates raw field edits and recomputes derived values on every
//! accepted change.

pub mod engine;
pub mod io;
pub mod model;
pub mod session;

pub use engine::forecast::{compute as compute_forecast, ForecastError};
pub use engine::risk::{classify, RiskAssessment, RiskLevel};
pub use model::inventory::InventoryItem;
pub use model::params::{RoundedResults, SimulationParameters, SimulationResults};
pub use session::{EditError, ParameterField, PlanningSession};
