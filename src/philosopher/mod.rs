//! Philosophers and their single-attempt fork acquisition protocol.

pub mod error;
pub mod protocol;

pub use error::*;
pub use protocol::*;
