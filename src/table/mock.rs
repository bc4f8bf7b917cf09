//! # Mock Fork Table
//!
//! [`MockForks`] implements [`Forks`] entirely from a scripted queue of expectations. It lets a
//! test drive the philosopher protocol through any interleaving (busy forks, poisoned locks)
//! deterministically, without spawning threads or relying on the scheduler.
//!
//! | Feature | MockForks | ForkTable |
//! |---------|-----------|-----------|
//! | **Determinism** | Scripted outcomes | Subject to the scheduler |
//! | **State** | None (expectations only) | Real lock-protected forks |
//! | **Error Injection** | Easy (`return_err`) | Requires a panicking holder |
//!
//! ## Example
//!
//! ```rust
//! use dining_table::philosopher::{Outcome, Philosopher};
//! use dining_table::table::mock::MockForks;
//!
//! let mut forks = MockForks::new(2);
//! forks.expect_acquire(0).return_ok(true);
//! forks.expect_acquire(1).return_ok(false);
//! forks.expect_release(0).return_ok();
//!
//! let mut philosopher = Philosopher::new(0, 2).unwrap();
//! assert_eq!(philosopher.dine(&forks).unwrap(), Outcome::RightBusy);
//! forks.verify();
//! ```
//!
//! Expectations are consumed in order. A call that does not match the next expectation panics,
//! which fails the test at the exact step that diverged.

use super::{Forks, TableError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
enum Expectation {
    Acquire {
        index: usize,
        response: Result<bool, TableError>,
    },
    Release {
        index: usize,
        response: Result<(), TableError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A scripted fork table with expectation tracking.
pub struct MockForks {
    len: usize,
    expectations: Expectations,
}

impl MockForks {
    /// Creates a mock table reporting `len` forks and no expectations.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects a `try_acquire` of fork `index`.
    pub fn expect_acquire(&mut self, index: usize) -> AcquireExpectationBuilder {
        AcquireExpectationBuilder {
            index,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `release` of fork `index`.
    pub fn expect_release(&mut self, index: usize) -> ReleaseExpectationBuilder {
        ReleaseExpectationBuilder {
            index,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                exps.len(),
                exps
            );
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }
}

impl Forks for MockForks {
    fn len(&self) -> usize {
        self.len
    }

    fn try_acquire(&self, index: usize) -> Result<bool, TableError> {
        match self.next() {
            Some(Expectation::Acquire {
                index: expected,
                response,
            }) if expected == index => response,
            other => panic!("Unexpected try_acquire({index}), expected {other:?}"),
        }
    }

    fn release(&self, index: usize) -> Result<(), TableError> {
        match self.next() {
            Some(Expectation::Release {
                index: expected,
                response,
            }) if expected == index => response,
            other => panic!("Unexpected release({index}), expected {other:?}"),
        }
    }
}

/// Builder for `try_acquire` expectations.
pub struct AcquireExpectationBuilder {
    index: usize,
    expectations: Expectations,
}

impl AcquireExpectationBuilder {
    /// The fork is taken (`true`) or reported busy (`false`).
    pub fn return_ok(self, taken: bool) {
        self.push(Ok(taken));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TableError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<bool, TableError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Acquire {
            index: self.index,
            response,
        });
    }
}

/// Builder for `release` expectations.
pub struct ReleaseExpectationBuilder {
    index: usize,
    expectations: Expectations,
}

impl ReleaseExpectationBuilder {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: TableError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), TableError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Release {
            index: self.index,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expectations_are_consumed_in_order() {
        let mut forks = MockForks::new(3);
        forks.expect_acquire(2).return_ok(true);
        forks.expect_release(2).return_ok();

        assert!(forks.try_acquire(2).unwrap());
        forks.release(2).unwrap();
        forks.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected release(1)")]
    fn test_mismatched_call_panics() {
        let mut forks = MockForks::new(2);
        forks.expect_acquire(1).return_ok(true);
        let _ = forks.release(1);
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mut forks = MockForks::new(2);
        forks.expect_release(0).return_ok();
        forks.verify();
    }
}
