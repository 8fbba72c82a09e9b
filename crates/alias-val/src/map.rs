//! Maps with reference semantics
//!
//! A [`Map`] is a handle to a hash table. Cloning the handle does not copy
//! the table, so an insert through one clone is seen through every other.
//!
//! A map starts out either nil ([`Map::nil`], the zero value) or
//! initialized ([`Map::make`], or collected from pairs). A nil map behaves
//! like an empty map for reads and deletes, but a write to it fails with
//! [`ValError::NilMapWrite`].

use crate::{fields, same_storage, shared, Shared, ValError, ValResult, ValStr};
use indexmap::{Equivalent, IndexMap};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

pub struct Map<K, V> {
    table: Option<Shared<IndexMap<K, V>>>,
}

impl<K, V> Map<K, V> {
    /// The zero value: reads as empty, faults on write.
    pub const fn nil() -> Self {
        Self { table: None }
    }

    pub fn is_nil(&self) -> bool {
        self.table.is_none()
    }

    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, |t| t.borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when both handles refer to the same table.
    pub fn same_table(&self, other: &Self) -> bool {
        match (&self.table, &other.table) {
            (Some(a), Some(b)) => same_storage(a, b),
            _ => false,
        }
    }

    fn table(&self) -> ValResult<&Shared<IndexMap<K, V>>> {
        self.table.as_ref().ok_or(ValError::NilMapWrite)
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// An initialized, empty map.
    pub fn make() -> Self {
        Self {
            table: Some(shared(IndexMap::new())),
        }
    }

    /// Value stored under `key`, or the zero value when absent.
    pub fn get<Q>(&self, key: &Q) -> V
    where
        Q: ?Sized + Hash + Equivalent<K>,
        V: Clone + Default,
    {
        self.lookup(key).0
    }

    /// Value and presence flag. An absent key yields `(zero, false)`, which
    /// tells it apart from a stored zero.
    pub fn lookup<Q>(&self, key: &Q) -> (V, bool)
    where
        Q: ?Sized + Hash + Equivalent<K>,
        V: Clone + Default,
    {
        let found = self
            .table
            .as_ref()
            .and_then(|t| t.borrow().get(key).cloned());
        match found {
            Some(value) => (value, true),
            None => (V::default(), false),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.table
            .as_ref()
            .is_some_and(|t| t.borrow().contains_key(key))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&self, key: K, value: V) -> ValResult<()> {
        self.table()?.borrow_mut().insert(key, value);
        Ok(())
    }

    /// Read-modify-write of one entry, starting from the zero value when the
    /// key is absent. The table is not borrowed while `f` runs, so `f` may
    /// read the same map.
    pub fn update(&self, key: K, f: impl FnOnce(&mut V)) -> ValResult<()>
    where
        V: Clone + Default,
    {
        self.table()?;
        let (mut value, _) = self.lookup(&key);
        f(&mut value);
        self.insert(key, value)
    }

    /// Deletes `key`. Deleting from a nil map or deleting an absent key is a
    /// no-op.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.table
            .as_ref()
            .and_then(|t| t.borrow_mut().shift_remove(key))
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.table.as_ref().map_or_else(Vec::new, |t| {
            t.borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
    }

    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.table
            .as_ref()
            .map_or_else(Vec::new, |t| t.borrow().keys().cloned().collect())
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::nil()
    }
}

/// Map literal: the result is always initialized, even when empty.
impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: Some(shared(iter.into_iter().collect())),
        }
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Prints `map[k1:v1 k2:v2]` with the keys in sorted order.
impl<K: Display + Ord, V: Display> Display for Map<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "map[")?;
        if let Some(table) = &self.table {
            let table = table.borrow();
            let mut entries: Vec<_> = table.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (i, (k, v)) in entries.into_iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}:{}", k, v)?;
            }
        }
        write!(f, "]")
    }
}

impl<K: Debug, V: Debug> Debug for Map<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => f.debug_map().entries(table.borrow().iter()).finish(),
            None => write!(f, "Map(nil)"),
        }
    }
}

/// A nil map serializes as `null`.
impl<K: Serialize, V: Serialize> Serialize for Map<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.table {
            Some(table) => serializer.collect_map(table.borrow().iter()),
            None => serializer.serialize_none(),
        }
    }
}

/// Counts how many times each whitespace-separated word occurs in `text`.
pub fn word_count(text: &str) -> ValResult<Map<ValStr, i64>> {
    let counts = Map::make();
    for word in fields(text).iter() {
        counts.update(word, |n| *n += 1)?;
    }
    Ok(counts)
}
