//! The shared fork table.
//!
//! - [`Forks`] - Trait the philosopher protocol runs against
//! - [`ForkTable`] - Fixed ring of lock-protected forks
//! - [`TableError`] - Range violations and poisoned locks
//!
//! # Testing
//!
//! See [`mock`] for a scripted table that drives the protocol without threads.

pub mod ring;
pub mod error;
mod fork;
pub mod mock;

pub use ring::*;
pub use error::*;
