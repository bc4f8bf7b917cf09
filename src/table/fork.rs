//! A single lock-protected fork.

use super::TableError;
use std::sync::{Mutex, MutexGuard};

/// One binary, exclusively-held fork.
///
/// The availability flag lives inside its own [`Mutex`] and is never handed out by reference,
/// so every read and write happens under the lock.
#[derive(Debug)]
pub(crate) struct Fork {
    available: Mutex<bool>,
}

impl Fork {
    pub(crate) fn new() -> Self {
        Self {
            available: Mutex::new(true),
        }
    }

    fn lock(&self, index: usize) -> Result<MutexGuard<'_, bool>, TableError> {
        self.available
            .lock()
            .map_err(|_| TableError::Poisoned { index })
    }

    /// Check-and-set under the lock. Returns `false` immediately if the fork is taken.
    pub(crate) fn try_take(&self, index: usize) -> Result<bool, TableError> {
        let mut available = self.lock(index)?;
        if *available {
            *available = false;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn put_down(&self, index: usize) -> Result<(), TableError> {
        *self.lock(index)? = true;
        Ok(())
    }

    pub(crate) fn is_available(&self, index: usize) -> Result<bool, TableError> {
        Ok(*self.lock(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_take_then_put_down() {
        let fork = Fork::new();
        assert!(fork.try_take(0).unwrap());
        assert!(!fork.is_available(0).unwrap());
        assert!(!fork.try_take(0).unwrap());

        fork.put_down(0).unwrap();
        assert!(fork.is_available(0).unwrap());
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let fork = Arc::new(Fork::new());
        let poisoner = fork.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.available.lock().unwrap();
            panic!("poison the fork");
        })
        .join();

        assert_eq!(fork.try_take(3), Err(TableError::Poisoned { index: 3 }));
        assert_eq!(fork.put_down(3), Err(TableError::Poisoned { index: 3 }));
    }
}
