//! Memory device interface trait
//!
//! This module defines the interface that every backing memory store must
//! provide. The parameter manager dispatches all byte transfers through it
//! and never talks to a bus or chip protocol directly.

use crate::platform::Result;

/// Capacity and geometry of a memory device
///
/// Reported by [`MemoryDevice::specs`] and optionally cached by the parameter
/// manager so address validation can run without a live driver call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemorySpecs {
    /// Total addressable capacity in bytes
    pub capacity: u32,
    /// Program page size in bytes (1 for byte-writable parts)
    pub page_size: u32,
    /// Minimum erasable unit in bytes (1 for RAM-like parts)
    pub block_size: u32,
}

/// Byte-addressable memory device interface
///
/// Implementations must provide synchronous read/write/erase transfers plus
/// geometry reporting. One instance is bound per storage location.
///
/// # Device Characteristics
///
/// - Devices are byte-addressable; erase granularity may be coarser
///   (block-erased flash parts report their block size in [`MemorySpecs`])
/// - Erase resets a range to the device's blank state
/// - NOR-flash parts can only change bits from 1 to 0 on write; callers
///   needing arbitrary rewrites must erase first
///
/// # Safety Invariants
///
/// - The device must be initialized before any transfer
/// - Only one owner per device instance (no concurrent access)
/// - A bus fault must surface as a returned error, never a panic
pub trait MemoryDevice {
    /// Ready the device for transfers
    ///
    /// Transfers issued before initialization fail with
    /// `MemoryError::NotInitialized`.
    fn initialize(&mut self) -> Result<()>;

    /// Read data from the device
    ///
    /// Reads `buf.len()` bytes starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::InvalidAddress` if the range falls outside the
    /// device's capacity. Returns `MemoryError::ReadFailed` if the transfer
    /// itself fails.
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()>;

    /// Write data to the device
    ///
    /// Writes `data` starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::InvalidAddress` if the range falls outside the
    /// device's capacity. Returns `MemoryError::WriteFailed` if the transfer
    /// itself fails.
    fn write(&mut self, address: u32, data: &[u8]) -> Result<()>;

    /// Erase a byte range back to the device's blank state
    ///
    /// Block-erased parts require `address` and `len` to be aligned to their
    /// block size.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::InvalidAddress` for out-of-range or misaligned
    /// requests. Returns `MemoryError::EraseFailed` if the operation fails.
    fn erase(&mut self, address: u32, len: u32) -> Result<()>;

    /// Report the device's capacity and geometry
    fn specs(&self) -> MemorySpecs;
}
