//! # Domain Layer
//!
//! Pure key codecs for the bank keyspace. Nothing here touches a store.
//!
//! ## Modules
//!
//! - `keyspace` - Frozen prefix registry and module identity
//! - `address` - Length-prefixed address encoding
//! - `balances` - Account balance keys
//! - `denom_index` - Denom → address reverse index keys
//! - `send_enabled` - Per-denom send-enabled flag keys
//! - `flags` - Single-byte boolean convention
//! - `config` - Keyspace limits
//! - `security` - Address and denom validation
//! - `errors` - Domain error types

pub mod address;
pub mod balances;
pub mod config;
pub mod denom_index;
pub mod errors;
pub mod flags;
pub mod keyspace;
pub mod security;
pub mod send_enabled;

#[cfg(test)]
mod tests;

pub use address::{length_prefix, split_length_prefixed, try_length_prefix, MAX_ADDRESS_LEN};
pub use balances::{
    account_balances_prefix, address_and_denom_from_balances_store, balance_key, BalanceKey,
};
pub use config::KeyspaceConfig;
pub use denom_index::{
    address_from_denom_index_store, denom_address_key, denom_address_prefix, DENOM_TERMINATOR,
};
pub use errors::{ConfigError, KVStoreError, KeyError};
pub use flags::{is_true_b, to_bool_b, FALSE_B, TRUE_B};
pub use keyspace::{
    params_key, supply_key, KeyPrefix, MODULE_NAME, MODULE_QUERY_PATH, QUERIER_ROUTE,
    ROUTER_KEY, STORE_KEY,
};
pub use security::KeyValidator;
pub use send_enabled::{denom_from_send_enabled_store, send_enabled_key};
