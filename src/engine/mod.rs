// src/engine/mod.rs

pub mod forecast;
pub mod risk;
