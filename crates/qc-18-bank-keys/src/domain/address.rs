//! # Address Codec
//!
//! Length-prefixed encoding for variable-length addresses.
//!
//! ```text
//! len(1) ‖ addr(len)
//! ```
//!
//! The explicit length byte, not a delimiter, bounds the address, so the
//! address can be pulled off the front of any longer key.

use super::errors::KeyError;

/// Largest address that fits a one-byte length prefix.
pub const MAX_ADDRESS_LEN: usize = u8::MAX as usize;

/// Encode `addr` as `len(addr) ‖ addr`.
///
/// # Panics
///
/// Panics if `addr` is longer than [`MAX_ADDRESS_LEN`]. Addresses are
/// validated upstream; an oversized one here means that validation was
/// skipped, and the encoding call must not continue.
pub fn length_prefix(addr: &[u8]) -> Vec<u8> {
    match try_length_prefix(addr) {
        Ok(encoded) => encoded,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible form of [`length_prefix`] for callers holding unvalidated input.
pub fn try_length_prefix(addr: &[u8]) -> Result<Vec<u8>, KeyError> {
    let len = u8::try_from(addr.len()).map_err(|_| KeyError::AddressTooLong {
        len: addr.len(),
        max: MAX_ADDRESS_LEN,
    })?;

    let mut encoded = Vec::with_capacity(1 + addr.len());
    encoded.push(len);
    encoded.extend_from_slice(addr);
    Ok(encoded)
}

/// Split one length-prefixed address off the front of `bytes`.
///
/// Returns the address and whatever follows it.
pub fn split_length_prefixed(bytes: &[u8]) -> Result<(&[u8], &[u8]), KeyError> {
    let (&len, rest) = bytes
        .split_first()
        .ok_or(KeyError::invalid("empty key"))?;

    let len = len as usize;
    if rest.len() < len {
        return Err(KeyError::invalid("address length exceeds key length"));
    }

    Ok(rest.split_at(len))
}
