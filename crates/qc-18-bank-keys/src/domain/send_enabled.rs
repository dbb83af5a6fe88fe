//! # Send-Enabled Flag Keys
//!
//! ```text
//! 0x04 ‖ denom
//! ```
//!
//! No terminator: entries are read by point lookup on a known denom. The
//! layout differs from the reverse index on purpose and is already on disk.

use super::errors::KeyError;
use super::keyspace::KeyPrefix;

/// Key of the send-enabled flag for `denom`.
pub fn send_enabled_key(denom: &str) -> Vec<u8> {
    KeyPrefix::SendEnabled.key(denom.as_bytes())
}

/// Recover the denom from a send-enabled key with its prefix stripped.
pub fn denom_from_send_enabled_store(key: &[u8]) -> Result<String, KeyError> {
    if key.is_empty() {
        return Err(KeyError::invalid("empty key"));
    }
    std::str::from_utf8(key).map(str::to_owned).map_err(|_| {
        tracing::warn!("[qc-18] Send-enabled key {} has non-UTF-8 denom", hex::encode(key));
        KeyError::invalid("denom is not valid UTF-8")
    })
}
