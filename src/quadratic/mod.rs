// src/quadratic/mod.rs

pub mod solution;
pub mod solver;

pub use solution::{QuadraticSolution, SolutionKind};
pub use solver::{Coefficients, Solver};
