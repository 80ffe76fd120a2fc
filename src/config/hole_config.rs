// src/config/hole_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Generator configuration for the quadratic-formula hole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleConfig {
    /// Problems per scorecard (default: 200)
    pub num_tests: usize,

    /// Sampling range for the x² coefficient
    pub a_range: CoefficientRange,

    /// Sampling range for the x coefficient
    pub b_range: CoefficientRange,

    /// Sampling range for the constant term
    pub c_range: CoefficientRange,

    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Optional path to also write the scorecards to
    pub output: Option<String>,
}

/// Half-open range [min, max)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientRange {
    pub min: i64,
    pub max: i64,
}

impl CoefficientRange {
    pub fn new(min: i64, max: i64) -> Self {
        CoefficientRange { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }

    /// Largest |x| the range can produce
    pub fn max_abs(&self) -> Option<i64> {
        let low = self.min.checked_abs()?;
        let high = self.max.checked_sub(1)?.checked_abs()?;
        Some(low.max(high))
    }
}

impl Default for HoleConfig {
    fn default() -> Self {
        HoleConfig {
            num_tests: 200,
            a_range: CoefficientRange::new(-10, 10),
            b_range: CoefficientRange::new(-10, 10),
            c_range: CoefficientRange::new(-25, 25),
            seed: None,
            log_level: "info".to_string(),
            output: None,
        }
    }
}

impl HoleConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("hole.toml").exists() {
            builder = builder.add_source(File::with_name("hole.toml"));
        } else if Path::new("hole.yaml").exists() {
            builder = builder.add_source(File::with_name("hole.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    /// Rejects settings the generator cannot run with, including coefficient
    /// ranges whose discriminant would not fit in an i64.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_tests == 0 {
            return Err(ConfigError::Message("num_tests must be at least 1".to_string()));
        }

        for (name, range) in [("a_range", self.a_range), ("b_range", self.b_range), ("c_range", self.c_range)] {
            if range.is_empty() {
                return Err(ConfigError::Message(format!(
                    "{} is empty: min {} must be below max {}", name, range.min, range.max
                )));
            }
        }

        let overflow = || ConfigError::Message("coefficient ranges too wide: discriminant overflows i64".to_string());
        let a = self.a_range.max_abs().ok_or_else(overflow)?;
        let b = self.b_range.max_abs().ok_or_else(overflow)?;
        let c = self.c_range.max_abs().ok_or_else(overflow)?;

        // |b² - 4ac| <= b² + |4a|·|c|; 4a also bounds the 2a denominator
        b.checked_mul(b)
            .zip(a.checked_mul(4))
            .and_then(|(bb, four_a)| four_a.checked_mul(c)?.checked_add(bb))
            .ok_or_else(overflow)?;

        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("num_tests", 200)?
            .set_default("a_range.min", -10)?
            .set_default("a_range.max", 10)?
            .set_default("b_range.min", -10)?
            .set_default("b_range.max", 10)?
            .set_default("c_range.min", -25)?
            .set_default("c_range.max", 25)?
            .set_default("log_level", "info")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. HOLE_SEED, HOLE_C_RANGE__MAX
        let builder = builder.add_source(
            Environment::with_prefix("HOLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let config: HoleConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
