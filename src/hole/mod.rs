// src/hole/mod.rs

pub mod quadratic_formula;

pub use quadratic_formula::{quadratic_formula, quadratic_formula_with};
