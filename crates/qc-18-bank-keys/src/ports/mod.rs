//! # Ports
//!
//! - `outbound` - The ordered KV store bank keys are written into

pub mod outbound;

pub use outbound::{KeyValueStore, ScanResult};
