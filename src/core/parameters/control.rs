//! Parameter control blocks
//!
//! A control block is the per-parameter descriptor the registry stores: the
//! byte offset and size of the value inside its storage location, plus an
//! optional hook to recompute and persist the value on demand.

use super::error::ParamError;
use super::location::StorageLocation;
use super::manager::ParamManager;

/// Update hook invoked by [`ParamManager::update`]
///
/// The hook receives the manager and the triggering key; its contract is to
/// compute a fresh value and persist it through the manager's own `write`,
/// which re-runs the full validation ladder.
pub type UpdateHook = fn(&mut ParamManager<'_>, &str) -> Result<(), ParamError>;

/// Descriptor for a single parameter
///
/// Copied by value into the registry on registration; two keys never alias
/// the same control block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamControlBlock {
    /// Byte offset within the backing storage location
    pub address: u32,
    /// Size of the parameter value in bytes
    pub size: u32,
    /// Which backing store holds the value
    pub location: StorageLocation,
    /// Optional hook to recompute and persist the value on demand
    pub update: Option<UpdateHook>,
}

impl ParamControlBlock {
    /// Create a control block without an update hook
    pub const fn new(address: u32, size: u32, location: StorageLocation) -> Self {
        Self {
            address,
            size,
            location,
            update: None,
        }
    }

    /// Create a control block with an update hook
    pub const fn with_update(
        address: u32,
        size: u32,
        location: StorageLocation,
        update: UpdateHook,
    ) -> Self {
        Self {
            address,
            size,
            location,
            update: Some(update),
        }
    }
}
