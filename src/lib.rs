// src/lib.rs

pub mod config;
pub mod core;
pub mod hole;
pub mod integer_math;
pub mod quadratic;
