//! Parameter manager
//!
//! Orchestrates the registry and the per-location driver table: every access
//! passes the initialization gate, the registered control block, and the
//! backing device geometry before any byte moves. Failed validation never
//! reaches a device.

use crate::platform::traits::{MemoryDevice, MemorySpecs};

use super::control::ParamControlBlock;
use super::error::ParamError;
use super::location::StorageLocation;
use super::registry::ParamRegistry;

/// Parameter manager over a set of location-bound memory drivers
///
/// The manager borrows device handles; it never constructs or destroys
/// devices, and every device must outlive the manager borrowing it. All
/// operations are synchronous and assume a single logical thread of control.
pub struct ParamManager<'d> {
    registry: Option<ParamRegistry>,
    drivers: [Option<&'d mut dyn MemoryDevice>; StorageLocation::COUNT],
    specs: [Option<MemorySpecs>; StorageLocation::COUNT],
}

impl<'d> ParamManager<'d> {
    /// Create an uninitialized manager
    ///
    /// Every operation except [`init`](Self::init) fails until `init` is
    /// called.
    pub fn new() -> Self {
        Self {
            registry: None,
            drivers: core::array::from_fn(|_| None),
            specs: [None; StorageLocation::COUNT],
        }
    }

    /// Initialize the manager for `capacity` parameters
    ///
    /// Re-initializing resets the registry: all prior registrations are
    /// dropped and the capacity is re-armed. Driver and specs bindings
    /// describe hardware rather than parameters and stay in place.
    pub fn init(&mut self, capacity: usize) -> Result<(), ParamError> {
        self.registry = Some(ParamRegistry::new(capacity)?);
        crate::log_debug!("parameter manager initialized, capacity {}", capacity);
        Ok(())
    }

    /// Whether `init` has been called
    pub fn is_initialized(&self) -> bool {
        self.registry.is_some()
    }

    /// Number of registered parameters (zero before `init`)
    pub fn count(&self) -> usize {
        self.registry.as_ref().map_or(0, ParamRegistry::len)
    }

    fn registry(&self) -> Result<&ParamRegistry, ParamError> {
        self.registry.as_ref().ok_or(ParamError::NotInitialized)
    }

    fn registry_mut(&mut self) -> Result<&mut ParamRegistry, ParamError> {
        self.registry.as_mut().ok_or(ParamError::NotInitialized)
    }

    /// Register a parameter, overwriting any existing entry for `key`
    pub fn register_parameter(
        &mut self,
        key: &str,
        block: ParamControlBlock,
    ) -> Result<(), ParamError> {
        self.registry_mut()?.insert(key, block)
    }

    /// Remove the parameter registered under `key`
    pub fn unregister_parameter(&mut self, key: &str) -> Result<(), ParamError> {
        self.registry_mut()?.remove(key).map(|_| ())
    }

    /// Whether `key` has a live registration
    ///
    /// Always `false` before `init`.
    pub fn is_registered(&self, key: &str) -> bool {
        self.registry.as_ref().is_some_and(|r| r.contains(key))
    }

    /// Copy of the control block registered under `key`
    pub fn control_block(&self, key: &str) -> Option<ParamControlBlock> {
        self.registry.as_ref()?.get(key).copied()
    }

    /// Bind `device` as the backing driver for `location`
    ///
    /// Overwrites any prior binding. Sentinel locations are rejected and
    /// leave the driver table untouched.
    pub fn register_memory_driver(
        &mut self,
        location: StorageLocation,
        device: &'d mut dyn MemoryDevice,
    ) -> Result<(), ParamError> {
        self.registry()?;
        let slot = location.slot().ok_or(ParamError::InvalidLocation)?;
        self.drivers[slot] = Some(device);
        crate::log_debug!("memory driver bound for {:?}", location);
        Ok(())
    }

    /// Cache capacity/geometry specs for `location`
    ///
    /// Specs are stored independently of any driver binding so bounds checks
    /// can run before a device exists.
    pub fn register_memory_specs(
        &mut self,
        location: StorageLocation,
        specs: MemorySpecs,
    ) -> Result<(), ParamError> {
        self.registry()?;
        let slot = location.slot().ok_or(ParamError::InvalidLocation)?;
        self.specs[slot] = Some(specs);
        Ok(())
    }

    /// Write a parameter's value to its backing store
    ///
    /// `data.len()` must equal the registered size exactly. Validation order:
    /// initialization gate, key lookup, size match, driver binding, bounds.
    /// The device's verdict is propagated verbatim; there are no retries and
    /// no partial writes.
    pub fn write(&mut self, key: &str, data: &[u8]) -> Result<(), ParamError> {
        let (slot, address) = self.prepare_transfer(key, data.len())?;
        let device = self.drivers[slot]
            .as_deref_mut()
            .ok_or(ParamError::NoDriver)?;

        device.write(address, data).map_err(|e| {
            crate::log_warn!("parameter write failed: {:?}", e);
            ParamError::from(e)
        })
    }

    /// Read a parameter's value from its backing store
    ///
    /// Symmetric with [`write`](Self::write); failed validation leaves `buf`
    /// unmodified.
    pub fn read(&mut self, key: &str, buf: &mut [u8]) -> Result<(), ParamError> {
        let (slot, address) = self.prepare_transfer(key, buf.len())?;
        let device = self.drivers[slot]
            .as_deref_mut()
            .ok_or(ParamError::NoDriver)?;

        device.read(address, buf).map_err(|e| {
            crate::log_warn!("parameter read failed: {:?}", e);
            ParamError::from(e)
        })
    }

    /// Invoke the parameter's update hook
    ///
    /// The hook is expected to persist a freshly computed value through
    /// [`write`](Self::write), which re-runs the full validation ladder. Its
    /// result is returned verbatim. Parameters without a hook fail with
    /// [`ParamError::NoUpdateHook`] and never touch storage.
    pub fn update(&mut self, key: &str) -> Result<(), ParamError> {
        let block = *self.registry()?.get(key).ok_or(ParamError::NotFound)?;
        let hook = block.update.ok_or(ParamError::NoUpdateHook)?;
        hook(self, key)
    }

    /// Shared validation ladder for read and write
    ///
    /// Returns the driver-table slot and device address of a transfer that
    /// passed every check short of the device call itself.
    fn prepare_transfer(&self, key: &str, len: usize) -> Result<(usize, u32), ParamError> {
        let block = *self.registry()?.get(key).ok_or(ParamError::NotFound)?;

        let size = u32::try_from(len).map_err(|_| ParamError::SizeMismatch)?;
        if size != block.size {
            return Err(ParamError::SizeMismatch);
        }

        // An invalid location in the control block can never have a driver
        let slot = block.location.slot().ok_or(ParamError::NoDriver)?;
        if self.drivers[slot].is_none() {
            return Err(ParamError::NoDriver);
        }

        // Cached specs win over a live driver query
        let capacity = match self.specs[slot] {
            Some(specs) => specs.capacity,
            None => self.drivers[slot]
                .as_deref()
                .map(|d| d.specs().capacity)
                .unwrap_or(0),
        };

        let end = block.address.checked_add(size).ok_or(ParamError::OutOfRange)?;
        if end > capacity {
            return Err(ParamError::OutOfRange);
        }

        Ok((slot, block.address))
    }
}

impl<'d> Default for ParamManager<'d> {
    fn default() -> Self {
        Self::new()
    }
}
