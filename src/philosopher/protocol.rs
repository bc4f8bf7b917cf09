//! # Acquisition Protocol
//!
//! A philosopher makes exactly one attempt per invocation:
//!
//! ```text
//! Start ──take left──▶ HoldingFirst ──take right──▶ HoldingBoth ──eat, put both down──▶ Done(Ate)
//!   │                      │
//!   └─left busy──▶ Done    └─right busy, put left down──▶ Done
//! ```
//!
//! A busy fork is never waited on. A philosopher that gets only its left fork puts it straight
//! back, so no philosopher ever holds one fork while blocked on another and a circular wait
//! cannot form. Two neighbours can still keep knocking each other out of a meal; nothing here
//! prevents starvation.

use super::PhilosopherError;
use crate::table::{Forks, TableError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// How a single invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both forks were held together and a meal was eaten.
    Ate,
    /// The left fork was busy; nothing was held.
    LeftBusy,
    /// The left fork was taken and put back because the right fork was busy.
    RightBusy,
}

impl Outcome {
    /// Meal increment produced by this outcome (0 or 1).
    pub fn meals(self) -> u64 {
        match self {
            Outcome::Ate => 1,
            Outcome::LeftBusy | Outcome::RightBusy => 0,
        }
    }
}

#[derive(Debug)]
enum State {
    Start,
    HoldingFirst,
    HoldingBoth,
    Done(Outcome),
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Philosopher {
    id: usize,
    seats: usize,
    meals_eaten: u64,
}

impl Philosopher {
    /// Seats philosopher `id` at a table of `seats` forks.
    pub fn new(id: usize, seats: usize) -> Result<Self, PhilosopherError> {
        if id >= seats {
            return Err(PhilosopherError::UnknownSeat { id, seats });
        }
        Ok(Self {
            id,
            seats,
            meals_eaten: 0,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn meals_eaten(&self) -> u64 {
        self.meals_eaten
    }

    /// Index of the first fork taken.
    pub fn left(&self) -> usize {
        self.id
    }

    /// Index of the second fork taken.
    pub fn right(&self) -> usize {
        (self.id + 1) % self.seats
    }

    /// Runs the protocol once against `forks`.
    ///
    /// Every fork acquired during the call has had a release attempted by the time it returns,
    /// including when the table reports an error part way through. The first table error is
    /// the one returned.
    #[instrument(name = "dine", skip_all, fields(philosopher = self.id(), left = self.left(), right = self.right()))]
    pub fn dine<F>(&mut self, forks: &F) -> Result<Outcome, PhilosopherError>
    where
        F: Forks + ?Sized,
    {
        if forks.len() != self.seats {
            return Err(PhilosopherError::TableMismatch {
                seats: self.seats,
                forks: forks.len(),
            });
        }

        let (left, right) = (self.left(), self.right());
        let mut state = State::Start;
        loop {
            state = match state {
                State::Start => {
                    if forks.try_acquire(left)? {
                        State::HoldingFirst
                    } else {
                        State::Done(Outcome::LeftBusy)
                    }
                }
                State::HoldingFirst => match forks.try_acquire(right) {
                    Ok(true) => State::HoldingBoth,
                    Ok(false) => {
                        forks.release(left)?;
                        State::Done(Outcome::RightBusy)
                    }
                    Err(e) => {
                        // Keep the original failure even if the release fails too.
                        let _ = put_down(forks, &[left]);
                        return Err(e.into());
                    }
                },
                State::HoldingBoth => {
                    self.meals_eaten += 1;
                    put_down(forks, &[left, right])?;
                    State::Done(Outcome::Ate)
                }
                State::Done(outcome) => {
                    debug!(?outcome, meals = self.meals_eaten, "Finished");
                    return Ok(outcome);
                }
            };
        }
    }
}

/// Releases every fork in `held`, in order, and reports the first failure.
fn put_down<F>(forks: &F, held: &[usize]) -> Result<(), TableError>
where
    F: Forks + ?Sized,
{
    let mut first_error = None;
    for &index in held {
        if let Err(e) = forks.release(index) {
            warn!(fork = index, error = %e, "Release failed");
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Seats philosopher `id` at `forks`, runs one invocation and returns the meal increment.
pub fn run_actor<F>(forks: &F, id: usize) -> Result<u64, PhilosopherError>
where
    F: Forks + ?Sized,
{
    let mut philosopher = Philosopher::new(id, forks.len())?;
    philosopher.dine(forks)?;
    Ok(philosopher.meals_eaten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::mock::MockForks;
    use crate::table::ForkTable;

    #[test]
    fn test_seat_indices_wrap_around() {
        let first = Philosopher::new(0, 5).unwrap();
        assert_eq!((first.left(), first.right()), (0, 1));

        let last = Philosopher::new(4, 5).unwrap();
        assert_eq!((last.left(), last.right()), (4, 0));
    }

    #[test]
    fn test_unknown_seat_is_rejected() {
        assert_eq!(
            Philosopher::new(5, 5).unwrap_err(),
            PhilosopherError::UnknownSeat { id: 5, seats: 5 }
        );
    }

    #[test]
    fn test_eats_when_both_forks_are_free() {
        let mut forks = MockForks::new(3);
        forks.expect_acquire(1).return_ok(true);
        forks.expect_acquire(2).return_ok(true);
        forks.expect_release(1).return_ok();
        forks.expect_release(2).return_ok();

        let mut philosopher = Philosopher::new(1, 3).unwrap();
        assert_eq!(philosopher.dine(&forks).unwrap(), Outcome::Ate);
        assert_eq!(philosopher.meals_eaten(), 1);
        forks.verify();
    }

    #[test]
    fn test_left_busy_touches_nothing_else() {
        let mut forks = MockForks::new(2);
        forks.expect_acquire(0).return_ok(false);

        let mut philosopher = Philosopher::new(0, 2).unwrap();
        assert_eq!(philosopher.dine(&forks).unwrap(), Outcome::LeftBusy);
        assert_eq!(philosopher.meals_eaten(), 0);
        forks.verify();
    }

    #[test]
    fn test_right_busy_puts_left_back() {
        let mut forks = MockForks::new(2);
        forks.expect_acquire(1).return_ok(true);
        forks.expect_acquire(0).return_ok(false);
        forks.expect_release(1).return_ok();

        let mut philosopher = Philosopher::new(1, 2).unwrap();
        assert_eq!(philosopher.dine(&forks).unwrap(), Outcome::RightBusy);
        assert_eq!(philosopher.meals_eaten(), 0);
        forks.verify();
    }

    #[test]
    fn test_error_on_right_still_releases_left() {
        let mut forks = MockForks::new(4);
        forks.expect_acquire(3).return_ok(true);
        forks
            .expect_acquire(0)
            .return_err(TableError::Poisoned { index: 0 });
        forks.expect_release(3).return_ok();

        let mut philosopher = Philosopher::new(3, 4).unwrap();
        assert_eq!(
            philosopher.dine(&forks).unwrap_err(),
            PhilosopherError::Table(TableError::Poisoned { index: 0 })
        );
        assert_eq!(philosopher.meals_eaten(), 0);
        forks.verify();
    }

    #[test]
    fn test_failed_left_release_still_releases_right() {
        let mut forks = MockForks::new(2);
        forks.expect_acquire(0).return_ok(true);
        forks.expect_acquire(1).return_ok(true);
        forks
            .expect_release(0)
            .return_err(TableError::Poisoned { index: 0 });
        forks.expect_release(1).return_ok();

        let mut philosopher = Philosopher::new(0, 2).unwrap();
        assert_eq!(
            philosopher.dine(&forks).unwrap_err(),
            PhilosopherError::Table(TableError::Poisoned { index: 0 })
        );
        assert_eq!(philosopher.meals_eaten(), 1);
        forks.verify();
    }

    #[test]
    fn test_table_size_mismatch() {
        let forks = MockForks::new(4);
        let mut philosopher = Philosopher::new(0, 3).unwrap();
        assert_eq!(
            philosopher.dine(&forks).unwrap_err(),
            PhilosopherError::TableMismatch { seats: 3, forks: 4 }
        );
    }

    #[test]
    fn test_lone_philosopher_never_eats() {
        let table = ForkTable::new(1).unwrap();
        let mut philosopher = Philosopher::new(0, 1).unwrap();
        assert_eq!(philosopher.dine(&table).unwrap(), Outcome::RightBusy);
        assert!(table.is_available(0).unwrap());
    }

    #[test]
    fn test_sequential_round_feeds_everyone() {
        let table = ForkTable::new(5).unwrap();
        let meals: Vec<u64> = (0..5).map(|id| run_actor(&table, id).unwrap()).collect();
        assert_eq!(meals, vec![1, 1, 1, 1, 1]);
        assert_eq!(table.available_count().unwrap(), 5);
    }

    #[test]
    fn test_neighbour_holding_shared_fork_blocks_meal() {
        let table = ForkTable::new(3).unwrap();
        // Philosopher 1's left fork is philosopher 0's right fork.
        assert!(table.try_acquire(1).unwrap());

        let mut zero = Philosopher::new(0, 3).unwrap();
        assert_eq!(zero.dine(&table).unwrap(), Outcome::RightBusy);
        assert!(table.is_available(0).unwrap());

        let mut one = Philosopher::new(1, 3).unwrap();
        assert_eq!(one.dine(&table).unwrap(), Outcome::LeftBusy);
        assert!(!table.is_available(1).unwrap());
    }

    #[test]
    fn test_run_actor_rejects_out_of_range_id() {
        let table = ForkTable::new(2).unwrap();
        assert_eq!(
            run_actor(&table, 2).unwrap_err(),
            PhilosopherError::UnknownSeat { id: 2, seats: 2 }
        );
    }
}
