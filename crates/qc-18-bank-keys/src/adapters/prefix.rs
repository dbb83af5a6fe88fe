//! # Prefix-Scoped Store
//!
//! A view over a `KeyValueStore` that isolates one logical sub-keyspace.
//! The prefix is added on every write and stripped from every key a scan
//! returns, which is exactly the input the domain parsers expect.
//!
//! The view is generic over how it borrows the parent: `&S` gives a
//! read-only view, `&mut S` additionally allows writes.

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{KeyValueStore, ScanResult};
use std::ops::{Deref, DerefMut};

/// Store view that transparently adds and strips a fixed byte prefix.
pub struct PrefixStore<P> {
    parent: P,
    prefix: Vec<u8>,
}

impl<P> PrefixStore<P> {
    pub fn new(parent: P, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            parent,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    fn full_key(&self, key: &[u8]) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.prefix.len() + key.len());
        full.extend_from_slice(&self.prefix);
        full.extend_from_slice(key);
        full
    }
}

impl<P> PrefixStore<P>
where
    P: Deref,
    P::Target: KeyValueStore,
{
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.parent.get(&self.full_key(key))
    }

    pub fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.parent.exists(&self.full_key(key))
    }

    /// Entries under `sub_prefix`, keys returned without the store prefix.
    pub fn scan(&self, sub_prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        let scope = self.full_key(sub_prefix);
        let entries = self.parent.prefix_scan(&scope)?;
        tracing::debug!(
            "[qc-18] Prefix scan {} matched {} entries",
            hex::encode(&scope),
            entries.len()
        );

        let strip = self.prefix.len();
        Ok(entries
            .into_iter()
            .map(|(key, value)| (key[strip..].to_vec(), value))
            .collect())
    }

    /// Every entry in the sub-keyspace.
    pub fn iter_all(&self) -> Result<ScanResult, KVStoreError> {
        self.scan(&[])
    }
}

impl<P> PrefixStore<P>
where
    P: DerefMut,
    P::Target: KeyValueStore,
{
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let full = self.full_key(key);
        self.parent.put(&full, value)
    }

    pub fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        let full = self.full_key(key);
        self.parent.delete(&full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryKVStore;

    #[test]
    fn test_prefix_added_on_write() {
        let mut parent = InMemoryKVStore::new();
        {
            let mut store = PrefixStore::new(&mut parent, vec![0x02]);
            store.put(b"abc", b"1").unwrap();
            assert_eq!(store.get(b"abc").unwrap(), Some(b"1".to_vec()));
            assert!(store.exists(b"abc").unwrap());
        }
        assert_eq!(parent.get(b"\x02abc").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_scan_strips_prefix() {
        let mut parent = InMemoryKVStore::new();
        parent.put(b"\x02ab", b"1").unwrap();
        parent.put(b"\x02ac", b"2").unwrap();
        parent.put(b"\x03ab", b"3").unwrap();

        let store = PrefixStore::new(&parent, vec![0x02]);
        let keys: Vec<Vec<u8>> = store.iter_all().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b"ab".to_vec(), b"ac".to_vec()]);

        assert_eq!(store.scan(b"ac").unwrap().len(), 1);
    }

    #[test]
    fn test_read_only_views_share_parent() {
        let mut parent = InMemoryKVStore::new();
        parent.put(b"\x02ab", b"1").unwrap();
        parent.put(b"\x04ab", b"2").unwrap();

        let balances = PrefixStore::new(&parent, vec![0x02]);
        let flags = PrefixStore::new(&parent, vec![0x04]);

        assert_eq!(balances.get(b"ab").unwrap(), Some(b"1".to_vec()));
        assert_eq!(flags.get(b"ab").unwrap(), Some(b"2".to_vec()));
        assert!(!flags.exists(b"zz").unwrap());
        assert_eq!(parent.len(), 2);
    }

    #[test]
    fn test_delete_through_view() {
        let mut parent = InMemoryKVStore::new();
        let mut store = PrefixStore::new(&mut parent, vec![0x04]);
        store.put(b"uatom", &[0x01]).unwrap();
        store.delete(b"uatom").unwrap();
        assert_eq!(store.get(b"uatom").unwrap(), None);
    }
}
