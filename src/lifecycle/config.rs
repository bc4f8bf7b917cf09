//! Run configuration.

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a [`DiningConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one philosopher is required")]
    NoPhilosophers,

    #[error("At least one round is required")]
    NoRounds,
}

/// Parameters fixed for the lifetime of a [`DiningSystem`](super::DiningSystem).
///
/// `philosophers` is both the number of seats and the number of forks. Each round starts every
/// philosopher once, concurrently, against the same table.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[command(name = "dining-table")]
#[command(version)]
#[command(about = "Dining philosophers with a non-blocking, single-attempt fork protocol")]
#[serde(default)]
pub struct DiningConfig {
    /// Number of philosophers, and of forks, at the table
    #[arg(short = 'n', long, default_value_t = 2, value_parser = parse_count)]
    pub philosophers: usize,

    /// Times every philosopher is started against the same table
    #[arg(short, long, default_value_t = 1, value_parser = parse_count)]
    pub rounds: usize,
}

impl Default for DiningConfig {
    fn default() -> Self {
        Self {
            philosophers: 2,
            rounds: 1,
        }
    }
}

impl DiningConfig {
    pub fn new(philosophers: usize) -> Self {
        Self {
            philosophers,
            ..Self::default()
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Rejects zero counts for configs built in code rather than parsed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.philosophers == 0 {
            return Err(ConfigError::NoPhilosophers);
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }
}

fn parse_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}
