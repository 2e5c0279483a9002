//! # Access Type Tests
//!
//! Verifies classification of trace operation codes and the trace-syntax
//! rendering of accesses.

use csim_core::common::{AccessType, MemoryAccess};

#[test]
fn load_code_is_a_read() {
    assert_eq!(AccessType::from_op("L"), AccessType::Load);
    assert!(!AccessType::Load.is_write());
}

#[test]
fn store_code_is_a_write() {
    assert_eq!(AccessType::from_op("S"), AccessType::Store);
    assert!(AccessType::Store.is_write());
}

/// Every non-`L` code is a store, including modify and instruction codes.
#[test]
fn other_codes_are_stores() {
    for op in ["M", "I", "l", "X", "LS"] {
        assert_eq!(AccessType::from_op(op), AccessType::Store, "op {op}");
    }
}

#[test]
fn display_uses_trace_syntax() {
    assert_eq!(MemoryAccess::load(0x10, 1).to_string(), "L 10,1");
    assert_eq!(MemoryAccess::store(0x7ff000388, 8).to_string(), "S 7ff000388,8");
}
