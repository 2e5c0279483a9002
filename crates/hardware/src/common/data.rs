//! Memory access types.
//!
//! This module defines the classification of trace records fed to the cache:
//! 1. **Access kind:** Whether a record reads (load) or writes (store) its block.
//! 2. **Memory access:** One decoded trace record, consumed once by the cache.

use std::fmt;

/// Kind of memory access named by a trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read (`L` in the trace). Never dirties a line.
    Load,

    /// Data write (`S` in the trace).
    ///
    /// Every operation code other than `L` is classified as a store,
    /// including the combined modify code `M`.
    Store,
}

impl AccessType {
    /// Classifies a trace operation code.
    ///
    /// # Examples
    ///
    /// ```
    /// use csim_core::common::AccessType;
    ///
    /// assert_eq!(AccessType::from_op("L"), AccessType::Load);
    /// assert_eq!(AccessType::from_op("S"), AccessType::Store);
    /// assert_eq!(AccessType::from_op("M"), AccessType::Store);
    /// ```
    pub fn from_op(op: &str) -> Self {
        if op == "L" { Self::Load } else { Self::Store }
    }

    /// Returns `true` for accesses that dirty the block they touch.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Store)
    }

    /// Single-letter trace code for this access.
    pub const fn code(self) -> char {
        match self {
            Self::Load => 'L',
            Self::Store => 'S',
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single memory access read from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryAccess {
    /// Load or store.
    pub kind: AccessType,
    /// Byte address touched by the access.
    pub address: u64,
    /// Access width in bytes as written in the trace. Carried for reporting only.
    pub size: u32,
}

impl MemoryAccess {
    /// Creates a load of `size` bytes at `address`.
    pub const fn load(address: u64, size: u32) -> Self {
        Self {
            kind: AccessType::Load,
            address,
            size,
        }
    }

    /// Creates a store of `size` bytes at `address`.
    pub const fn store(address: u64, size: u32) -> Self {
        Self {
            kind: AccessType::Store,
            address,
            size,
        }
    }
}

impl fmt::Display for MemoryAccess {
    /// Formats the access in trace syntax, e.g. `S 7ff0005c8,8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x},{}", self.kind, self.address, self.size)
    }
}
