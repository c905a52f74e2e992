//! Keyed containers (maps).
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::{EditResult, Editor};

/// Trait to edit the values of different kinds of maps generically.
///
/// Editing a key that isn't there leaves the map unchanged.
pub trait Keyed: Sized {
    type Key;
    type Value;

    /// Replaces the value at `key` with `f(value)`, if `key` is present.
    fn try_edit_value<F>(self, key: &Self::Key, f: F) -> EditResult<Self>
    where
        F: FnOnce(Self::Value) -> EditResult<Self::Value>;

    /// Rebuilds the map, passing every value and its key through `f`.
    fn try_map_values<F>(self, f: F) -> EditResult<Self>
    where
        F: FnMut(&Self::Key, Self::Value) -> EditResult<Self::Value>;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;

    fn try_edit_value<F>(mut self, key: &K, f: F) -> EditResult<Self>
    where
        F: FnOnce(V) -> EditResult<V>,
    {
        if let Some((key, value)) = self.remove_entry(key) {
            let value = f(value)?;
            self.insert(key, value);
        }
        Ok(self)
    }

    fn try_map_values<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(&K, V) -> EditResult<V>,
    {
        self.into_iter()
            .map(|(key, value)| {
                let value = f(&key, value)?;
                Ok((key, value))
            })
            .collect()
    }
}

impl<K: Ord, V> Keyed for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn try_edit_value<F>(mut self, key: &K, f: F) -> EditResult<Self>
    where
        F: FnOnce(V) -> EditResult<V>,
    {
        if let Some((key, value)) = self.remove_entry(key) {
            let value = f(value)?;
            self.insert(key, value);
        }
        Ok(self)
    }

    fn try_map_values<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(&K, V) -> EditResult<V>,
    {
        self.into_iter()
            .map(|(key, value)| {
                let value = f(&key, value)?;
                Ok((key, value))
            })
            .collect()
    }
}

#[cfg(feature = "imbl")]
impl<K, V, S> Keyed for imbl::HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;

    fn try_edit_value<F>(mut self, key: &K, f: F) -> EditResult<Self>
    where
        F: FnOnce(V) -> EditResult<V>,
    {
        if let Some(value) = self.get(key).cloned() {
            let value = f(value)?;
            self.insert(key.clone(), value);
        }
        Ok(self)
    }

    fn try_map_values<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(&K, V) -> EditResult<V>,
    {
        self.into_iter()
            .map(|(key, value)| {
                let value = f(&key, value)?;
                Ok((key, value))
            })
            .collect()
    }
}

#[cfg(feature = "imbl")]
impl<K, V> Keyed for imbl::OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn try_edit_value<F>(mut self, key: &K, f: F) -> EditResult<Self>
    where
        F: FnOnce(V) -> EditResult<V>,
    {
        if let Some(value) = self.get(key).cloned() {
            let value = f(value)?;
            self.insert(key.clone(), value);
        }
        Ok(self)
    }

    fn try_map_values<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(&K, V) -> EditResult<V>,
    {
        self.into_iter()
            .map(|(key, value)| {
                let value = f(&key, value)?;
                Ok((key, value))
            })
            .collect()
    }
}

/// Edits the value at one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnKey<K>(pub K);

pub fn on_key<K>(key: K) -> OnKey<K> {
    OnKey(key)
}

impl<M: Keyed> Editor<M, M::Value> for OnKey<M::Key> {
    fn try_edit<F>(&self, whole: M, f: &F) -> EditResult<M>
    where
        F: Fn(M::Value) -> EditResult<M::Value> + Clone + 'static,
    {
        whole.try_edit_value(&self.0, f)
    }
}

/// Edits the values at several keys. Each present key is edited once, however many times it is
/// listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnKeys<K>(pub Vec<K>);

pub fn on_keys<K>(keys: impl IntoIterator<Item = K>) -> OnKeys<K> {
    OnKeys(keys.into_iter().collect())
}

impl<M> Editor<M, M::Value> for OnKeys<M::Key>
where
    M: Keyed,
    M::Key: PartialEq,
{
    fn try_edit<F>(&self, whole: M, f: &F) -> EditResult<M>
    where
        F: Fn(M::Value) -> EditResult<M::Value> + Clone + 'static,
    {
        whole.try_map_values(|key, value| if self.0.contains(key) { f(value) } else { Ok(value) })
    }
}

/// Edits every value of a map.
#[derive(Copy, Clone, Debug, Default)]
pub struct Values;

pub fn values() -> Values {
    Values
}

impl<M: Keyed> Editor<M, M::Value> for Values {
    fn try_edit<F>(&self, whole: M, f: &F) -> EditResult<M>
    where
        F: Fn(M::Value) -> EditResult<M::Value> + Clone + 'static,
    {
        whole.try_map_values(|_, value| f(value))
    }
}
