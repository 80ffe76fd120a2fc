// src/config/mod.rs

pub mod hole_config;

// Re-export main types for convenience
pub use hole_config::{HoleConfig, CoefficientRange};
