//! # Boolean Flag Encoding
//!
//! One byte on the wire. Only `[0x01]` is true; an absent key, `[0x00]`,
//! an empty value and any multi-byte value all read as false.

/// Byte representing true.
pub const TRUE_B: u8 = 0x01;

/// Byte representing false.
pub const FALSE_B: u8 = 0x00;

/// Encode a flag.
pub const fn to_bool_b(v: bool) -> u8 {
    if v {
        TRUE_B
    } else {
        FALSE_B
    }
}

/// True iff `bz` is exactly one byte equal to [`TRUE_B`].
pub fn is_true_b(bz: &[u8]) -> bool {
    bz.len() == 1 && bz[0] == TRUE_B
}
