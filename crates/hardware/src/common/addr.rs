//! Address decomposition.
//!
//! A 64-bit address is split, from most to least significant bits, into:
//! 1. **Tag:** The high `64 - s - b` bits identifying the memory block.
//! 2. **Set index:** The middle `s` bits selecting one of the `2^s` sets.
//! 3. **Block offset:** The low `b` bits, never needed since no data is modeled.

/// Tag and set index of a decoded address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAddr {
    /// High-order bits identifying the block held by a line.
    pub tag: u64,
    /// Index of the set the address maps to, in `0..2^s`.
    pub set_index: u64,
}

/// Splits `address` into tag and set index for `s` set-index bits and `b`
/// block-offset bits.
///
/// Requires `s + b <= 64`; [`CacheGeometry`](crate::config::CacheGeometry)
/// rejects anything wider before a cache is ever built.
///
/// # Examples
///
/// ```
/// use csim_core::common::addr::decode;
///
/// // s = 2, b = 4: offset 0x4, set 0b01, tag 0x1C.
/// let d = decode(0x714, 2, 4);
/// assert_eq!(d.set_index, 0b01);
/// assert_eq!(d.tag, 0x1C);
/// ```
#[inline]
pub fn decode(address: u64, s: u32, b: u32) -> DecodedAddr {
    let mask = match s {
        0 => 0,
        s if s >= u64::BITS => u64::MAX,
        s => (1 << s) - 1,
    };
    let set_index = address.checked_shr(b).unwrap_or(0) & mask;
    let tag = address.checked_shr(s.saturating_add(b)).unwrap_or(0);
    DecodedAddr { tag, set_index }
}
