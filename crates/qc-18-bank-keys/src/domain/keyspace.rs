//! # Keyspace Registry
//!
//! One-byte namespace prefixes for the bank store. The table is frozen:
//! persisted data depends on every byte below.

/// Module name.
pub const MODULE_NAME: &str = "bank";

/// Primary store key of the module.
pub const STORE_KEY: &str = MODULE_NAME;

/// Message routing key of the module.
pub const ROUTER_KEY: &str = MODULE_NAME;

/// Query routing key of the module.
pub const QUERIER_ROUTE: &str = MODULE_NAME;

/// Raw store query path of the module.
pub const MODULE_QUERY_PATH: &str = "store/bank/key";

/// Key prefixes for the bank store.
///
/// A single byte instead of a readable tag keeps every balance entry small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KeyPrefix {
    /// Global supply record: `0x00`
    Supply = 0x00,
    /// Denom metadata: `0x01 ‖ …`
    DenomMetadata = 0x01,
    /// Account balances: `0x02 ‖ addrLen ‖ addr ‖ denom`
    Balances = 0x02,
    /// Reverse index: `0x03 ‖ denom ‖ 0x00 ‖ addrLen ‖ addr`
    DenomAddress = 0x03,
    /// Send-enabled flags: `0x04 ‖ denom`
    SendEnabled = 0x04,
    /// Module params: `0x05`
    Params = 0x05,
}

impl KeyPrefix {
    /// Every prefix, in byte order.
    pub const ALL: [KeyPrefix; 6] = [
        KeyPrefix::Supply,
        KeyPrefix::DenomMetadata,
        KeyPrefix::Balances,
        KeyPrefix::DenomAddress,
        KeyPrefix::SendEnabled,
        KeyPrefix::Params,
    ];

    /// Get the prefix byte.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Get the prefix as a static slice.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            KeyPrefix::Supply => &[0x00],
            KeyPrefix::DenomMetadata => &[0x01],
            KeyPrefix::Balances => &[0x02],
            KeyPrefix::DenomAddress => &[0x03],
            KeyPrefix::SendEnabled => &[0x04],
            KeyPrefix::Params => &[0x05],
        }
    }

    /// Look up the prefix owning `byte`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_byte() == byte)
    }

    /// Classify a full store key by its leading byte.
    pub fn classify(key: &[u8]) -> Option<Self> {
        key.first().copied().and_then(Self::from_byte)
    }

    /// Build a full key with the given suffix in a fresh buffer.
    pub fn key(self, suffix: &[u8]) -> Vec<u8> {
        let mut key = Vec::with_capacity(1 + suffix.len());
        key.push(self.as_byte());
        key.extend_from_slice(suffix);
        key
    }
}

/// Key of the global supply record.
pub fn supply_key() -> Vec<u8> {
    KeyPrefix::Supply.as_bytes().to_vec()
}

/// Key of the module params record.
pub fn params_key() -> Vec<u8> {
    KeyPrefix::Params.as_bytes().to_vec()
}
