//! Bump and check commands, composed from the locator, bumper and checker.

pub mod bump;
pub mod check;

pub use bump::{BumpOutcome, run_bump};
pub use check::run_check;
