//! Common types shared across the simulator.
//!
//! This module provides the small building blocks every other component uses:
//! 1. **Address decoding:** Splitting an address into tag and set index.
//! 2. **Memory access:** Load/store classification and trace records.
//! 3. **Error handling:** Configuration, trace, and simulation error types.

/// Address decomposition into tag and set index.
pub mod addr;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{DecodedAddr, decode};
pub use data::{AccessType, MemoryAccess};
pub use error::{ConfigError, SimError, TraceError};
