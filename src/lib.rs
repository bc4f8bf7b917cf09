//! # Dining Table
//!
//! > **Dining philosophers with a non-blocking, single-attempt fork protocol.**
//!
//! N philosophers sit at a round table with N forks. Philosopher `i` needs fork `i` on its left
//! and fork `(i + 1) % N` on its right. Each invocation of a philosopher tries to take both,
//! eats if it gets them, and puts back whatever it holds either way.
//!
//! ## 🏗️ Design
//!
//! ### Try, then back off
//! [`Forks::try_acquire`](table::Forks::try_acquire) never waits for a busy fork. A philosopher that
//! holds its left fork but finds the right one busy puts the left one back and leaves. Nobody
//! ever blocks while holding a fork, so the circular wait behind the classic deadlock cannot
//! form. Starvation is not prevented: a philosopher may go hungry for any number of rounds.
//!
//! ### One lock per fork
//! Every fork has its own mutex guarding a single availability flag. Philosophers contending for
//! disjoint pairs make progress in parallel, and no call ever holds two fork locks.
//!
//! ### An owned table
//! The [`ForkTable`](table::ForkTable) is built once per dinner and passed explicitly to every
//! philosopher. Meal counters are private to each philosopher and only aggregated after all of
//! them have been joined.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Table ([`table`])
//! - **Role**: Fixed ring of lock-protected forks with atomic try-acquire and release.
//! - **Key items**: [`Forks`](table::Forks), [`ForkTable`](table::ForkTable), [`MockForks`](table::mock::MockForks).
//!
//! ### 2. The Protocol ([`philosopher`])
//! - **Role**: The per-philosopher state machine: take left, take right, eat, put down.
//! - **Key items**: [`Philosopher`](philosopher::Philosopher), [`Outcome`](philosopher::Outcome), [`run_actor`](philosopher::run_actor).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns one thread per philosopher against a shared table, joins them all, reports meals.
//! - **Key items**: [`DiningSystem`](lifecycle::DiningSystem), [`DiningConfig`](lifecycle::DiningConfig), [`MealReport`](lifecycle::MealReport).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Five philosophers, three rounds, one log line per outcome
//! RUST_LOG=debug cargo run -- 5 3
//!
//! cargo test
//! ```

pub mod lifecycle;
pub mod philosopher;
pub mod table;
