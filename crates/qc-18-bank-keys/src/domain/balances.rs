//! # Balance Keys
//!
//! ```text
//! 0x02 ‖ addrLen(1) ‖ addr(addrLen) ‖ denom
//! ```
//!
//! Keys sort by address length, then address bytes, then denom. All
//! balances of one account share [`account_balances_prefix`], so a single
//! prefix scan enumerates them.

use super::address::{length_prefix, split_length_prefixed};
use super::errors::KeyError;
use super::keyspace::KeyPrefix;
use serde::{Deserialize, Serialize};

/// Prefix scoping an iteration to one account's balances.
pub fn account_balances_prefix(addr: &[u8]) -> Vec<u8> {
    KeyPrefix::Balances.key(&length_prefix(addr))
}

/// Full balance key for (`addr`, `denom`).
pub fn balance_key(addr: &[u8], denom: &str) -> Vec<u8> {
    let mut key = account_balances_prefix(addr);
    key.extend_from_slice(denom.as_bytes());
    key
}

/// Recover the address and denom from a balances-store key.
///
/// `key` must not contain the leading [`KeyPrefix::Balances`] byte; the
/// prefix store iterator has already stripped it.
pub fn address_and_denom_from_balances_store(key: &[u8]) -> Result<(Vec<u8>, String), KeyError> {
    let (addr, denom) = split_length_prefixed(key).map_err(|err| {
        tracing::warn!(
            "[qc-18] Rejecting balance key {}: {}",
            hex::encode(key),
            err
        );
        err
    })?;

    let denom = std::str::from_utf8(denom).map_err(|_| {
        tracing::warn!("[qc-18] Balance key {} has non-UTF-8 denom", hex::encode(key));
        KeyError::invalid("denom is not valid UTF-8")
    })?;

    Ok((addr.to_vec(), denom.to_owned()))
}

/// A decoded balance key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BalanceKey {
    pub address: Vec<u8>,
    pub denom: String,
}

impl BalanceKey {
    pub fn new(address: impl Into<Vec<u8>>, denom: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            denom: denom.into(),
        }
    }

    /// Serialize to the full store key.
    pub fn to_bytes(&self) -> Vec<u8> {
        balance_key(&self.address, &self.denom)
    }

    /// Parse a key with the balances prefix already stripped.
    pub fn from_store_key(key: &[u8]) -> Result<Self, KeyError> {
        let (address, denom) = address_and_denom_from_balances_store(key)?;
        Ok(Self { address, denom })
    }
}
