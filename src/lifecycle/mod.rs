//! # Dinner Lifecycle
//!
//! This module runs a dinner: it owns the shared fork table, starts the philosophers, joins them
//! and reports what they ate.
//!
//! - [`DiningConfig`] - Seat count and number of rounds, fixed for the run
//! - [`DiningSystem`] - Builds the table, spawns one thread per philosopher, joins them all
//! - [`MealReport`] - Per-philosopher meal counts, read only after every philosopher has finished
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//!
//! ## Rounds
//!
//! A philosopher never retries inside one invocation. Retrying is a driver decision: each
//! round starts every philosopher once more against the same table, after the previous round
//! has been fully joined and the table checked.

pub mod config;
pub mod dining_system;
pub mod report;
pub mod tracing;

pub use config::*;
pub use dining_system::*;
pub use report::*;
pub use self::tracing::*;
