// src/core/scorecard.rs

use serde::{Deserialize, Serialize};

/// Inputs and expected output for one run of a hole. `answer` holds one
/// line per entry of `args`, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub args: Vec<String>,
    pub answer: String,
}

impl Scorecard {
    pub fn new(args: Vec<String>, answers: &[String]) -> Self {
        Scorecard {
            args,
            answer: answers.join("\n"),
        }
    }

    pub fn answers(&self) -> impl Iterator<Item = &str> {
        self.answer.split('\n')
    }

    pub fn save_to_file(scorecards: &[Scorecard], path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(scorecards)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Vec<Scorecard>> {
        let json = std::fs::read_to_string(path)?;
        let scorecards = serde_json::from_str(&json)?;
        Ok(scorecards)
    }
}
