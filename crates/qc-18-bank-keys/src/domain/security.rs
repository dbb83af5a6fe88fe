//! # Key Input Validation
//!
//! Upstream checks that keep the infallible composers infallible.
//!
//! ## Security Invariants
//!
//! - Addresses are 1..=255 bytes, so `length_prefix` never panics
//! - Denoms carry no NUL, so the reverse-index terminator stays unique
//! - Denom length is bounded by configuration

use super::address::MAX_ADDRESS_LEN;
use super::config::KeyspaceConfig;
use super::errors::KeyError;

/// Validates addresses and denoms before they reach a composer.
#[derive(Debug, Clone, Default)]
pub struct KeyValidator {
    config: KeyspaceConfig,
}

impl KeyValidator {
    pub fn new(config: KeyspaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyspaceConfig {
        &self.config
    }

    /// Address must be 1..=255 bytes.
    pub fn validate_address(&self, addr: &[u8]) -> Result<(), KeyError> {
        if addr.is_empty() {
            return Err(KeyError::EmptyAddress);
        }
        if addr.len() > MAX_ADDRESS_LEN {
            return Err(KeyError::AddressTooLong {
                len: addr.len(),
                max: MAX_ADDRESS_LEN,
            });
        }
        Ok(())
    }

    /// Denom must be non-empty, bounded, printable ASCII.
    pub fn validate_denom(&self, denom: &str) -> Result<(), KeyError> {
        if denom.is_empty() {
            return Err(KeyError::InvalidDenom {
                denom: denom.to_owned(),
                reason: "denom cannot be empty",
            });
        }
        if denom.len() > self.config.max_denom_length {
            return Err(KeyError::DenomTooLong {
                len: denom.len(),
                max: self.config.max_denom_length,
            });
        }
        if denom.bytes().any(|b| b == 0x00) {
            return Err(KeyError::InvalidDenom {
                denom: denom.to_owned(),
                reason: "denom contains NUL byte",
            });
        }
        if !denom.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(KeyError::InvalidDenom {
                denom: denom.to_owned(),
                reason: "denom contains non-printable byte",
            });
        }
        Ok(())
    }

    /// Validate both halves of a balance key.
    pub fn validate_balance_key(&self, addr: &[u8], denom: &str) -> Result<(), KeyError> {
        self.validate_address(addr)?;
        self.validate_denom(denom)
    }
}
