//! # Keyspace Configuration
//!
//! Limits applied to the inputs of the key composers and to the store the
//! keys land in. The byte layout itself is not configurable.

use super::address::MAX_ADDRESS_LEN;
use super::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the bank keyspace.
///
/// All values have sensible defaults for production use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyspaceConfig {
    /// Maximum denom length in bytes (default: 128).
    pub max_denom_length: usize,

    /// Maximum full store key length in bytes (default: 512).
    ///
    /// A balance key for a 255-byte address and a 128-byte denom is 385
    /// bytes, which fits under the default.
    pub max_key_length: usize,
}

impl Default for KeyspaceConfig {
    fn default() -> Self {
        Self {
            max_denom_length: 128,
            max_key_length: 512,
        }
    }
}

impl KeyspaceConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum denom length.
    pub fn with_max_denom_length(mut self, len: usize) -> Self {
        self.max_denom_length = len;
        self
    }

    /// Set the maximum store key length.
    pub fn with_max_key_length(mut self, len: usize) -> Self {
        self.max_key_length = len;
        self
    }

    /// Length of a balance key with a maximal address and denom.
    ///
    /// `None` when the configured denom length overflows `usize`.
    pub fn max_balance_key_length(&self) -> Option<usize> {
        // prefix + length byte + address + denom
        (2 + MAX_ADDRESS_LEN).checked_add(self.max_denom_length)
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_denom_length == 0 {
            return Err(ConfigError::ZeroDenomLength);
        }
        let required = self
            .max_balance_key_length()
            .ok_or(ConfigError::DenomLengthOverflow {
                max_denom_length: self.max_denom_length,
            })?;
        if self.max_key_length < required {
            return Err(ConfigError::KeyLengthTooSmall {
                max_key_length: self.max_key_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeyspaceConfig::default();
        assert_eq!(config.max_denom_length, 128);
        assert_eq!(config.max_key_length, 512);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = KeyspaceConfig::new()
            .with_max_denom_length(64)
            .with_max_key_length(400);
        assert_eq!(config.max_denom_length, 64);
        assert_eq!(config.max_key_length, 400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_key_limit() {
        let config = KeyspaceConfig::new().with_max_key_length(256);
        assert_eq!(
            config.validate(),
            Err(ConfigError::KeyLengthTooSmall { max_key_length: 256 })
        );
        assert_eq!(
            KeyspaceConfig::new().with_max_denom_length(0).validate(),
            Err(ConfigError::ZeroDenomLength)
        );
    }

    #[test]
    fn test_max_balance_key_length() {
        assert_eq!(KeyspaceConfig::default().max_balance_key_length(), Some(385));
        assert_eq!(
            KeyspaceConfig::new()
                .with_max_denom_length(usize::MAX)
                .max_balance_key_length(),
            None
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_denom_length() {
        let config: KeyspaceConfig =
            serde_json::from_str(r#"{"max_denom_length": 18446744073709551615}"#).unwrap();
        assert_eq!(config.max_denom_length, usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DenomLengthOverflow {
                max_denom_length: usize::MAX
            })
        );

        // Key length lands exactly on usize::MAX without overflowing.
        let config = KeyspaceConfig::new()
            .with_max_denom_length(usize::MAX - 2 - MAX_ADDRESS_LEN)
            .with_max_key_length(usize::MAX - 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::KeyLengthTooSmall { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: KeyspaceConfig = serde_json::from_str(r#"{"max_denom_length": 64}"#).unwrap();
        assert_eq!(config.max_denom_length, 64);
        assert_eq!(config.max_key_length, 512);
    }
}
