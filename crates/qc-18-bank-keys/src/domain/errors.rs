//! # Domain Errors
//!
//! Error types for the bank keyspace.
//!
//! ## Design Principles
//!
//! - Parse failures are query-level failures and are never defaulted
//! - Address overflow on the infallible encoder is a panic, not a variant;
//!   `AddressTooLong` only surfaces from the fallible encoder

use thiserror::Error;

/// Errors raised while composing, parsing or validating keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key bytes cannot be decoded into their semantic parts.
    #[error("invalid key: {reason}")]
    InvalidKey { reason: &'static str },

    /// Address does not fit a one-byte length prefix.
    #[error("address length should be max {max} bytes, got {len}")]
    AddressTooLong { len: usize, max: usize },

    /// Address has no bytes.
    #[error("address cannot be empty")]
    EmptyAddress,

    /// Denom failed validation.
    #[error("invalid denom {denom:?}: {reason}")]
    InvalidDenom { denom: String, reason: &'static str },

    /// Denom exceeds the configured maximum length.
    #[error("denom length {len} exceeds max {max}")]
    DenomTooLong { len: usize, max: usize },
}

impl KeyError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        KeyError::InvalidKey { reason }
    }
}

/// Errors from the key-value store port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// Key exceeds the store's configured maximum length.
    #[error("key length {len} exceeds max {max}")]
    KeyTooLong { len: usize, max: usize },
}

/// Errors from an unusable [`KeyspaceConfig`](super::config::KeyspaceConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_denom_length` is zero.
    #[error("max_denom_length must be non-zero")]
    ZeroDenomLength,

    /// `max_key_length` cannot hold a balance key with a maximal address and denom.
    #[error("max_key_length {max_key_length} cannot hold a maximal balance key")]
    KeyLengthTooSmall { max_key_length: usize },

    /// Maximal balance key length does not fit `usize`.
    #[error("max_denom_length {max_denom_length} overflows the balance key length")]
    DenomLengthOverflow { max_denom_length: usize },
}
