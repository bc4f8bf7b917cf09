//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the binary with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Dinner Lifecycle**: Table setup, one `round` span per round, final totals
//! - **Protocol Steps**: A `dine` span per invocation with `philosopher`, `left` and `right` fields
//! - **Fork Operations**: Every `try_acquire`/`release` at `trace` level
//! - **Errors**: Failed philosophers, panicked tasks and forks left held
//!
//! ## Usage Examples
//!
//! ```bash
//! # Dinner summary only
//! RUST_LOG=info cargo run -- 5
//!
//! # One line per philosopher outcome
//! RUST_LOG=debug cargo run -- 5 3
//!
//! # Every fork operation
//! RUST_LOG=trace cargo run -- 2
//! ```
//!
//! With `RUST_LOG=debug` the compact format shows the span hierarchy inline:
//!
//! ```text
//! DEBUG round:dine: Finished outcome=Ate meals=1 round=0 philosopher=0 left=0 right=1
//! DEBUG round:dine: Finished outcome=LeftBusy meals=0 round=0 philosopher=1 left=1 right=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already name the philosopher and round
        .compact()
        .init();
}
