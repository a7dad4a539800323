//! Platform abstraction traits
//!
//! This module defines the traits that memory backends must provide.

pub mod memory;

// Re-export trait interfaces
pub use memory::{MemoryDevice, MemorySpecs};
