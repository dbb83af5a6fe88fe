//! # Denom → Address Reverse Index
//!
//! ```text
//! 0x03 ‖ denom ‖ 0x00 ‖ addrLen(1) ‖ addr(addrLen)
//! ```
//!
//! The `0x00` terminator sorts below every printable denom byte, so the
//! scan prefix for `"atom"` ends before any `"atomic"` entry begins.

use super::address::{length_prefix, split_length_prefixed};
use super::errors::KeyError;
use super::keyspace::KeyPrefix;

/// Byte closing the denom field of a reverse-index key.
pub const DENOM_TERMINATOR: u8 = 0x00;

/// Scan prefix over every holder of `denom`.
pub fn denom_address_prefix(denom: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + denom.len() + 1);
    key.push(KeyPrefix::DenomAddress.as_byte());
    key.extend_from_slice(denom.as_bytes());
    key.push(DENOM_TERMINATOR);
    key
}

/// Reverse-index entry for one holder of `denom`.
pub fn denom_address_key(denom: &str, addr: &[u8]) -> Vec<u8> {
    let mut key = denom_address_prefix(denom);
    key.extend_from_slice(&length_prefix(addr));
    key
}

/// Recover the holder address from a reverse-index key.
///
/// `key` must have the whole [`denom_address_prefix`] already stripped, so
/// only `addrLen ‖ addr` remains.
pub fn address_from_denom_index_store(key: &[u8]) -> Result<Vec<u8>, KeyError> {
    let (addr, rest) = split_length_prefixed(key)?;
    if !rest.is_empty() {
        tracing::warn!(
            "[qc-18] Reverse-index key {} has {} trailing bytes",
            hex::encode(key),
            rest.len()
        );
        return Err(KeyError::invalid("trailing bytes after address"));
    }
    Ok(addr.to_vec())
}
