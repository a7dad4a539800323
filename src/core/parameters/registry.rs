//! Fixed-capacity parameter registry
//!
//! Maps parameter keys to control blocks without dynamic growth: the
//! compile-time ceiling is `MAX_PARAMS` entries and the runtime capacity is
//! chosen when the manager is initialized. Registration overwrites an
//! existing key unconditionally.

use heapless::index_map::FnvIndexMap;
use heapless::String;

use super::control::ParamControlBlock;
use super::error::ParamError;

/// Maximum parameter key length in bytes
pub const MAX_KEY_LEN: usize = 32;

/// Compile-time ceiling on registry entries (power of two)
pub const MAX_PARAMS: usize = 128;

/// Key type stored in the registry
type Key = String<MAX_KEY_LEN>;

/// Key to control block mapping with a runtime capacity bound
pub struct ParamRegistry {
    entries: FnvIndexMap<Key, ParamControlBlock, MAX_PARAMS>,
    capacity: usize,
}

impl ParamRegistry {
    /// Create an empty registry bounded to `capacity` distinct keys
    pub fn new(capacity: usize) -> Result<Self, ParamError> {
        if capacity == 0 || capacity > MAX_PARAMS {
            return Err(ParamError::InvalidCapacity);
        }

        Ok(Self {
            entries: FnvIndexMap::new(),
            capacity,
        })
    }

    fn make_key(key: &str) -> Result<Key, ParamError> {
        let mut k = Key::new();
        k.push_str(key).map_err(|_| ParamError::KeyTooLong)?;
        Ok(k)
    }

    /// Insert a control block under `key`, overwriting any existing entry
    ///
    /// The capacity bound applies to distinct keys only; overwriting a live
    /// key always succeeds and never disturbs other entries.
    pub fn insert(&mut self, key: &str, block: ParamControlBlock) -> Result<(), ParamError> {
        let k = Self::make_key(key)?;

        if !self.entries.contains_key(&k) && self.entries.len() >= self.capacity {
            return Err(ParamError::RegistryFull);
        }

        self.entries
            .insert(k, block)
            .map(|_| ())
            .map_err(|_| ParamError::RegistryFull)
    }

    /// Remove the entry for `key`, returning its control block
    pub fn remove(&mut self, key: &str) -> Result<ParamControlBlock, ParamError> {
        let k = Self::make_key(key)?;
        self.entries.remove(&k).ok_or(ParamError::NotFound)
    }

    /// Whether `key` has a live entry
    pub fn contains(&self, key: &str) -> bool {
        match Self::make_key(key) {
            Ok(k) => self.entries.contains_key(&k),
            Err(_) => false,
        }
    }

    /// Control block registered under `key`, if any
    pub fn get(&self, key: &str) -> Option<&ParamControlBlock> {
        let k = Self::make_key(key).ok()?;
        self.entries.get(&k)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runtime capacity chosen at initialization
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
