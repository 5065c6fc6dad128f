//! Common test utilities for remote-feed end-to-end tests

#[allow(dead_code)]
pub mod fixtures;

pub use fixtures::*;
