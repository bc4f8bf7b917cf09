use super::{ConfigError, DiningConfig, MealReport};
use crate::philosopher::{run_actor, PhilosopherError};
use crate::table::{ForkTable, Forks, TableError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, info_span, warn, Instrument, Span};

/// Errors that abort a dinner.
#[derive(Debug, Error)]
pub enum DiningError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Philosopher {id} failed: {source}")]
    Philosopher {
        id: usize,
        #[source]
        source: PhilosopherError,
    },

    /// The philosopher's thread panicked or was cancelled.
    #[error("Philosopher {id} task failed: {reason}")]
    Join { id: usize, reason: String },

    #[error("Round {round} left {held} of {forks} forks held after every philosopher finished")]
    ForkLeaked {
        round: usize,
        held: usize,
        forks: usize,
    },
}

/// The runtime orchestrator for a dinner.
///
/// `DiningSystem` is responsible for:
/// - **Table Ownership**: Building the shared [`ForkTable`] once and handing it to every philosopher
/// - **Lifecycle Management**: Starting one philosopher per seat and joining all of them
/// - **Reporting**: Aggregating meal counts only after every philosopher of a round has finished
///
/// # Example
///
/// ```ignore
/// let system = DiningSystem::new(DiningConfig::new(5))?;
/// let report = system.run().await?;
/// println!("{report}");
/// ```
pub struct DiningSystem {
    config: DiningConfig,

    /// Shared by every philosopher task; no other state is shared.
    table: Arc<ForkTable>,
}

impl DiningSystem {
    /// Validates `config` and sets a table with one fork per philosopher, all available.
    pub fn new(config: DiningConfig) -> Result<Self, DiningError> {
        config.validate()?;
        let table = Arc::new(ForkTable::new(config.philosophers)?);
        info!(
            philosophers = config.philosophers,
            rounds = config.rounds,
            "Table set"
        );
        Ok(Self { config, table })
    }

    pub fn config(&self) -> &DiningConfig {
        &self.config
    }

    pub fn table(&self) -> &ForkTable {
        &self.table
    }

    /// Runs every round and returns the accumulated meal counts.
    ///
    /// Each round starts all philosophers concurrently, waits for all of them and checks that
    /// the table is whole again before the next round starts. The first failure stops the dinner.
    pub async fn run(&self) -> Result<MealReport, DiningError> {
        let mut report = MealReport::new(self.config.philosophers, self.config.rounds);

        for round in 0..self.config.rounds {
            let meals = self
                .run_round(round)
                .instrument(info_span!("round", round))
                .await?;
            report.record(&meals);
        }

        info!(total = report.total(), hungry = report.hungry().len(), "Dinner finished");
        Ok(report)
    }

    async fn run_round(&self, round: usize) -> Result<Vec<u64>, DiningError> {
        // One blocking thread per philosopher; the protocol never awaits.
        let handles: Vec<_> = (0..self.config.philosophers)
            .map(|id| {
                let table = self.table.clone();
                let span = Span::current();
                let handle =
                    tokio::task::spawn_blocking(move || span.in_scope(|| run_actor(&*table, id)));
                (id, handle)
            })
            .collect();

        // Join everyone before looking at any result.
        let mut meals = Vec::with_capacity(handles.len());
        let mut first_error = None;
        for (id, handle) in handles {
            match handle.await {
                Ok(Ok(increment)) => meals.push(increment),
                Ok(Err(source)) => {
                    error!(philosopher = id, error = %source, "Philosopher failed");
                    first_error.get_or_insert(DiningError::Philosopher { id, source });
                    meals.push(0);
                }
                Err(e) => {
                    error!(philosopher = id, error = %e, "Philosopher task failed");
                    first_error.get_or_insert(DiningError::Join {
                        id,
                        reason: e.to_string(),
                    });
                    meals.push(0);
                }
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }

        let forks = self.table.len();
        let available = self.table.available_count()?;
        if available != forks {
            warn!(available, forks, "Forks still held after round");
            return Err(DiningError::ForkLeaked {
                round,
                held: forks - available,
                forks,
            });
        }

        debug!(?meals, "Round finished");
        Ok(meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let result = DiningSystem::new(DiningConfig::new(0));
        assert!(matches!(
            result,
            Err(DiningError::Config(ConfigError::NoPhilosophers))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_single_round_leaves_table_whole() {
        let system = DiningSystem::new(DiningConfig::new(5)).unwrap();
        let report = system.run().await.unwrap();

        assert_eq!(report.meals.len(), 5);
        assert!(report.meals.iter().all(|&m| m <= 1));
        assert_eq!(system.table().available_count().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_fork_left_held_is_reported() {
        let system = DiningSystem::new(DiningConfig::new(3)).unwrap();
        // A fork taken outside the protocol is never put back by anyone.
        assert!(system.table().try_acquire(2).unwrap());

        let err = system.run().await.unwrap_err();
        assert!(matches!(
            err,
            DiningError::ForkLeaked {
                round: 0,
                held: 1,
                forks: 3
            }
        ));
    }
}
