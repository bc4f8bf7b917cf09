//! Error types for the philosopher protocol.

use crate::table::TableError;
use thiserror::Error;

/// Errors that abort a philosopher's invocation.
///
/// A busy fork is not an error: it is reported through [`Outcome`](super::Outcome).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhilosopherError {
    /// The philosopher id does not name a seat at the table.
    #[error("Philosopher {id} has no seat at a table of {seats}")]
    UnknownSeat { id: usize, seats: usize },

    /// The philosopher was seated for a different table size than the one it dines at.
    #[error("Philosopher seated for {seats} seats but the table has {forks} forks")]
    TableMismatch { seats: usize, forks: usize },

    /// The fork table failed underneath the protocol.
    #[error(transparent)]
    Table(#[from] TableError),
}
