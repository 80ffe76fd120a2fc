// src/hole/quadratic_formula.rs

use std::collections::BTreeMap;
use config::ConfigError;
use log::{debug, info, trace};
use crate::config::HoleConfig;
use crate::core::scorecard::Scorecard;
use crate::core::static_random::StaticRandom;
use crate::quadratic::solution::SolutionKind;
use crate::quadratic::solver::Coefficients;

/// 200 problems with a, b ∈ [-10, 9] and c ∈ [-25, 24].
pub fn quadratic_formula(rng: &mut StaticRandom) -> Vec<Scorecard> {
    generate(&HoleConfig::default(), rng)
}

/// Same as `quadratic_formula`, with the count and ranges taken from `config`.
/// The config is validated first, so empty or overflow-prone ranges are
/// reported instead of reaching the sampler or the solver.
pub fn quadratic_formula_with(config: &HoleConfig, rng: &mut StaticRandom) -> Result<Vec<Scorecard>, ConfigError> {
    config.validate()?;
    Ok(generate(config, rng))
}

fn generate(config: &HoleConfig, rng: &mut StaticRandom) -> Vec<Scorecard> {
    info!("Generating {} quadratic-formula problems (seed: {:?})", config.num_tests, rng.seed());

    let mut args = Vec::with_capacity(config.num_tests);
    let mut solstrings = Vec::with_capacity(config.num_tests);
    let mut tally: BTreeMap<SolutionKind, usize> = BTreeMap::new();

    for _ in 0..config.num_tests {
        let coefficients = sample(config, rng);
        let solution = coefficients.solve();
        trace!("{} => {:?} => {}", coefficients, solution, solution);

        *tally.entry(solution.kind()).or_insert(0) += 1;
        args.push(coefficients.to_string());
        solstrings.push(solution.to_string());
    }

    debug!("Solution kinds: {:?}", tally);
    vec![Scorecard::new(args, &solstrings)]
}

fn sample(config: &HoleConfig, rng: &mut StaticRandom) -> Coefficients {
    let a = rng.next_in(config.a_range.min, config.a_range.max);
    let b = rng.next_in(config.b_range.min, config.b_range.max);
    let c = rng.next_in(config.c_range.min, config.c_range.max);
    Coefficients::new(a, b, c)
}
