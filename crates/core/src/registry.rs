//! Unique-keyed record directories.
//!
//! Both the patient and doctor directories are a [`Registry`]: an ordered map whose only
//! insertion path refuses an occupied key without touching the stored record.

use std::borrow::Borrow;
use std::collections::btree_map::{BTreeMap, Entry};

#[derive(Clone, Debug)]
pub struct Registry<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> Registry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` unless the key is already taken.
    ///
    /// On collision the rejected value is handed back and the stored record is left untouched.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> Result<&mut V, V> {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => Ok(slot.insert(value)),
            Entry::Occupied(_) => Err(value),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get_mut(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Records in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
