//! Domain primitives shared by the roster crates.

pub mod error;
pub mod student;
pub mod types;
