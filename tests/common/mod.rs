// tests/common/mod.rs
//! Shared test helpers.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
