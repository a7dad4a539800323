#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! nvparam - parameter management over heterogeneous memory backends
//!
//! This library binds symbolic parameter keys to control blocks describing
//! where a value physically lives (internal SRAM/flash, external flash and
//! SRAM/FRAM regions) and dispatches validated read/write transfers to the
//! memory driver bound to each location.

// Platform abstraction layer (memory device traits, errors, mocks)
pub mod platform;

// Core systems (parameter registry and manager, logging)
pub mod core;
