//! # Fork Table
//!
//! The shared resource table: a fixed ring of forks, each guarded by its own lock.
//!
//! ## Key Types
//!
//! - [`Forks`]: The trait the philosopher protocol is written against.
//! - [`ForkTable`]: The production table with one [`std::sync::Mutex`] per fork.
//!
//! ## Locking Discipline
//!
//! Each fork has a dedicated lock, so philosophers contending for disjoint pairs never touch the
//! same lock. A fork's lock is held only for the O(1) check-and-set inside a single call and is
//! released before the call returns. No call ever holds two fork locks at once.

use super::fork::Fork;
use super::TableError;
use tracing::trace;

/// Point operations on a table of forks.
///
/// `try_acquire` never waits for a busy fork: it reports `Ok(false)` and lets the caller decide
/// what to do. Callers must only `release` forks they successfully acquired.
pub trait Forks: Send + Sync {
    /// Number of forks (and seats) at the table.
    fn len(&self) -> usize;

    /// Tables are never empty once constructed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes fork `index` if it is available.
    fn try_acquire(&self, index: usize) -> Result<bool, TableError>;

    /// Puts fork `index` back on the table. Releasing an available fork leaves it available.
    fn release(&self, index: usize) -> Result<(), TableError>;
}

/// A fixed-size table of forks shared by every philosopher for the duration of a run.
#[derive(Debug)]
pub struct ForkTable {
    forks: Box<[Fork]>,
}

impl ForkTable {
    /// Creates a table of `n` forks, all available.
    pub fn new(n: usize) -> Result<Self, TableError> {
        if n == 0 {
            return Err(TableError::Empty);
        }
        let forks = (0..n).map(|_| Fork::new()).collect();
        Ok(Self { forks })
    }

    fn fork(&self, index: usize) -> Result<&Fork, TableError> {
        self.forks.get(index).ok_or(TableError::IndexOutOfRange {
            index,
            len: self.forks.len(),
        })
    }

    /// Locked snapshot of a single fork's availability.
    pub fn is_available(&self, index: usize) -> Result<bool, TableError> {
        self.fork(index)?.is_available(index)
    }

    /// Number of forks currently on the table.
    pub fn available_count(&self) -> Result<usize, TableError> {
        let mut count = 0;
        for (index, fork) in self.forks.iter().enumerate() {
            if fork.is_available(index)? {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl Forks for ForkTable {
    fn len(&self) -> usize {
        self.forks.len()
    }

    fn try_acquire(&self, index: usize) -> Result<bool, TableError> {
        let taken = self.fork(index)?.try_take(index)?;
        trace!(fork = index, taken, "try_acquire");
        Ok(taken)
    }

    fn release(&self, index: usize) -> Result<(), TableError> {
        self.fork(index)?.put_down(index)?;
        trace!(fork = index, "release");
        Ok(())
    }
}
