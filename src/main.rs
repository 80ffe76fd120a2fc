// src/main.rs

use log::{error, info};
use env_logger::Env;
use quadratic_hole::config::HoleConfig;
use quadratic_hole::core::{Scorecard, StaticRandom};
use quadratic_hole::hole::quadratic_formula_with;

fn main() {
    let mut config = match HoleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("HOLE_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("HOLE_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    // Optional positional seed overrides the configured one
    let args: Vec<String> = std::env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => {
                error!("Seed must be an unsigned integer, got '{}'", arg);
                std::process::exit(2);
            }
        }
    }

    let mut rng = StaticRandom::from_optional_seed(config.seed);
    let scorecards = match quadratic_formula_with(&config, &mut rng) {
        Ok(scorecards) => scorecards,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&scorecards) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Error serializing scorecards: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(path) = &config.output {
        match Scorecard::save_to_file(&scorecards, path) {
            Ok(_) => info!("Scorecards saved to: {}", path),
            Err(e) => {
                error!("Error saving scorecards: {}", e);
                std::process::exit(1);
            }
        }
    }
}
