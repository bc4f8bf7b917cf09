//! Error types for the fork table.

use thiserror::Error;

/// Errors that can occur while operating on the fork table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// A fork index outside `[0, len)` was used.
    #[error("Fork index {index} out of range for a table of {len} forks")]
    IndexOutOfRange { index: usize, len: usize },

    /// A thread panicked while holding the fork's lock.
    #[error("Lock for fork {index} is poisoned")]
    Poisoned { index: usize },

    /// A table with zero forks was requested.
    #[error("A fork table needs at least one fork")]
    Empty,
}
