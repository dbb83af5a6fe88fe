//! # Adapters
//!
//! - `memory` - Ordered in-memory `KeyValueStore`
//! - `prefix` - Prefix-scoped view over any `KeyValueStore`

pub mod memory;
pub mod prefix;

pub use memory::InMemoryKVStore;
pub use prefix::PrefixStore;
