//! Cache configuration.
//!
//! This module defines the parameters that shape the simulated cache:
//! 1. **Defaults:** Baseline geometry used when a field is omitted.
//! 2. **Raw configuration:** [`CacheConfig`], as supplied by the CLI or JSON.
//! 3. **Validated geometry:** [`CacheGeometry`], the only form a cache accepts.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default set-index bits (16 sets).
    pub const SET_BITS: u32 = 4;

    /// Default associativity (direct-mapped).
    pub const WAYS: usize = 1;

    /// Default block-offset bits (16-byte blocks).
    pub const BLOCK_BITS: u32 = 4;

    /// Upper bound on `2^s * E`, keeping the line array allocatable.
    pub const MAX_LINES: usize = 1 << 26;
}

/// Raw cache parameters, in the cachelab `-s/-E/-b` vocabulary.
///
/// # Examples
///
/// ```
/// use csim_core::config::CacheConfig;
///
/// let config: CacheConfig = serde_json::from_str(r#"{ "set_bits": 2, "ways": 4 }"#).unwrap();
/// assert_eq!(config.set_bits, 2);
/// assert_eq!(config.ways, 4);
/// assert_eq!(config.block_bits, 4);
///
/// let geometry = config.validate().unwrap();
/// assert_eq!(geometry.num_sets(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Number of set-index bits `s`; the cache has `2^s` sets.
    #[serde(default = "CacheConfig::default_set_bits")]
    pub set_bits: u32,

    /// Associativity `E`: lines per set.
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Number of block-offset bits `b`; blocks are `2^b` bytes.
    #[serde(default = "CacheConfig::default_block_bits")]
    pub block_bits: u32,
}

impl CacheConfig {
    /// Returns the default set-index bits.
    fn default_set_bits() -> u32 {
        defaults::SET_BITS
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default block-offset bits.
    fn default_block_bits() -> u32 {
        defaults::BLOCK_BITS
    }

    /// Checks the parameters and produces an immutable geometry.
    ///
    /// # Errors
    ///
    /// See [`CacheGeometry::new`].
    pub fn validate(&self) -> Result<CacheGeometry, ConfigError> {
        CacheGeometry::new(self.set_bits, self.ways, self.block_bits)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            set_bits: defaults::SET_BITS,
            ways: defaults::WAYS,
            block_bits: defaults::BLOCK_BITS,
        }
    }
}

/// Validated cache geometry `(s, E, b)`.
///
/// Invariants: `E >= 1`, `s + b <= 64`, `b <= 63`, `2^s * E` lines fit
/// in memory, and the total capacity in bytes fits in a `u64`. Fields are private so an invalid geometry cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheGeometry {
    set_bits: u32,
    ways: usize,
    block_bits: u32,
}

impl CacheGeometry {
    /// Validates `(s, E, b)`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroWays`] if `ways == 0`.
    /// - [`ConfigError::AddressBitsOverflow`] if `set_bits + block_bits > 64`.
    /// - [`ConfigError::BlockTooLarge`] if `block_bits >= 64`.
    /// - [`ConfigError::TooManyLines`] if the line array is too large.
    /// - [`ConfigError::CapacityOverflow`] if `2^s * E * 2^b` bytes exceed `u64`.
    pub fn new(set_bits: u32, ways: usize, block_bits: u32) -> Result<Self, ConfigError> {
        if ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        if set_bits.saturating_add(block_bits) > u64::BITS {
            return Err(ConfigError::AddressBitsOverflow {
                set_bits,
                block_bits,
            });
        }
        if block_bits >= u64::BITS {
            return Err(ConfigError::BlockTooLarge { block_bits });
        }

        let lines = 1usize
            .checked_shl(set_bits)
            .and_then(|sets| sets.checked_mul(ways));
        let lines = match lines {
            Some(n) if n <= defaults::MAX_LINES => n as u64,
            _ => return Err(ConfigError::TooManyLines { set_bits, ways }),
        };
        // Bounds the resident dirty-byte counter.
        if lines.checked_mul(1 << block_bits).is_none() {
            return Err(ConfigError::CapacityOverflow {
                set_bits,
                ways,
                block_bits,
            });
        }

        Ok(Self {
            set_bits,
            ways,
            block_bits,
        })
    }

    /// Set-index bits `s`.
    #[inline]
    pub const fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Associativity `E`.
    #[inline]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Block-offset bits `b`.
    #[inline]
    pub const fn block_bits(&self) -> u32 {
        self.block_bits
    }

    /// Number of sets, `2^s`.
    #[inline]
    pub const fn num_sets(&self) -> usize {
        1 << self.set_bits
    }

    /// Block size in bytes, `2^b`.
    #[inline]
    pub const fn block_size(&self) -> u64 {
        1 << self.block_bits
    }

    /// Total capacity in bytes, `2^s * E * 2^b`.
    pub const fn capacity_bytes(&self) -> u64 {
        self.num_sets() as u64 * self.ways as u64 * self.block_size()
    }
}

impl TryFrom<CacheConfig> for CacheGeometry {
    type Error = ConfigError;

    fn try_from(config: CacheConfig) -> Result<Self, Self::Error> {
        config.validate()
    }
}
