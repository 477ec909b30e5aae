// src/model/mod.rs

pub mod inventory;
pub mod options;
pub mod params;
