//! # Bank Keyspace Codec (qc-18)
//!
//! Byte layouts for the bank module's account-balance store. Every key the
//! bank module writes into the ordered KV store is composed here, and every
//! key it reads back during an iteration is parsed here.
//!
//! ## Keyspace
//!
//! ```text
//! 0x00                                  Supply
//! 0x01 ‖ …                              Denom metadata
//! 0x02 ‖ addrLen ‖ addr ‖ denom         Account balance
//! 0x03 ‖ denom ‖ 0x00 ‖ addrLen ‖ addr  Denom → address reverse index
//! 0x04 ‖ denom                          Send-enabled flag
//! 0x05                                  Params
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Bit-exact layout | Prefixes, field order and terminators never change |
//! | 2 | Unambiguous parse | Address length byte bounds the address field |
//! | 3 | Address order | Same-length addresses iterate in byte order |
//! | 4 | Denom isolation | `0x00` terminator closes every reverse-index scan |
//! | 5 | Default false | Only the single byte `0x01` reads as true |
//! | 6 | Fresh buffers | Composers never append onto a shared prefix |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure key codecs, keyspace registry, validation
//! - `ports/` - Ordered KV store the keys are written into
//! - `adapters/` - In-memory store and prefix-scoped view
//!
//! ## Usage
//!
//! ```
//! use qc_18_bank_keys::{address_and_denom_from_balances_store, balance_key};
//!
//! let addr = [0x11u8; 20];
//! let key = balance_key(&addr, "uatom");
//! assert_eq!(key.len(), 27);
//!
//! let (parsed, denom) = address_and_denom_from_balances_store(&key[1..]).unwrap();
//! assert_eq!(parsed, addr.to_vec());
//! assert_eq!(denom, "uatom");
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{InMemoryKVStore, PrefixStore};
pub use domain::*;
pub use ports::{KeyValueStore, ScanResult};
