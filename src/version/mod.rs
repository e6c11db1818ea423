//! Semantic version parsing and bumping.

pub mod bump;
pub mod parse;

pub use bump::{BumpType, bump_version};
pub use parse::parse_version;
