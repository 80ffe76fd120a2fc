// src/core/mod.rs

pub mod scorecard;
pub mod static_random;

pub use scorecard::Scorecard;
pub use static_random::StaticRandom;
