//! Mock memory devices for testing
//!
//! This module provides in-memory implementations of the memory device trait
//! so the parameter manager can be exercised without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod flash;
mod memory;

pub use flash::MockFlash;
pub use memory::MockMemory;
