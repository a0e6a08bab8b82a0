use std::{
    collections::{hash_map, HashMap},
    hash::Hash,
    ops::Index,
};

/// A sparse map of real values where every absent key reads as `0.0`
///
/// Backs the Q-table, the weight vector of a linear approximator, and the feature
/// vectors produced by a [`FeatureExtractor`](crate::features::FeatureExtractor).
/// Entries are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultMap<K: Eq + Hash> {
    map: HashMap<K, f64>,
}

impl<K: Eq + Hash> DefaultMap<K> {
    /// Constructs an empty `DefaultMap`
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Get the stored value for `key`, or `0.0` if it was never written
    pub fn get(&self, key: &K) -> f64 {
        self.map.get(key).copied().unwrap_or(0.0)
    }

    /// Overwrite or create the entry for `key`
    pub fn set(&mut self, key: K, value: f64) {
        self.map.insert(key, value);
    }

    /// Add `delta` to the entry for `key`, starting from `0.0` if absent
    pub fn add(&mut self, key: K, delta: f64) {
        *self.map.entry(key).or_insert(0.0) += delta;
    }

    /// Number of entries that have been written
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the written entries in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, K, f64> {
        self.map.iter()
    }

    /// Sparse dot product over the keys written in `self`
    ///
    /// Keys only present in `other` contribute nothing.
    pub fn dot(&self, other: &DefaultMap<K>) -> f64 {
        self.iter().map(|(k, v)| v * other.get(k)).sum()
    }
}

impl<K: Eq + Hash> Default for DefaultMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> Index<&K> for DefaultMap<K> {
    type Output = f64;

    fn index(&self, key: &K) -> &Self::Output {
        self.map.get(key).unwrap_or(&0.0)
    }
}

impl<K: Eq + Hash> FromIterator<(K, f64)> for DefaultMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> IntoIterator for DefaultMap<K> {
    type Item = (K, f64);
    type IntoIter = hash_map::IntoIter<K, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a DefaultMap<K> {
    type Item = (&'a K, &'a f64);
    type IntoIter = hash_map::Iter<'a, K, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_functional() {
        let mut map = DefaultMap::new();
        assert_eq!(map.get(&"a"), 0.0, "Unwritten key reads as zero");
        assert_eq!(map[&"a"], 0.0, "Unwritten key indexes as zero");
        assert!(map.is_empty(), "Reads do not create entries");

        map.set("a", 2.5);
        assert_eq!(map.get(&"a"), 2.5, "Set overwrites value");
        map.set("a", -1.0);
        assert_eq!(map[&"a"], -1.0, "Set overwrites value");

        map.add("b", 0.5);
        map.add("b", 0.25);
        assert_eq!(map.get(&"b"), 0.75, "Add accumulates from zero");
        assert_eq!(map.len(), 2, "Two keys written");
    }

    #[test]
    fn sparse_dot_product() {
        let weights: DefaultMap<&str> = [("x", 2.0), ("y", -1.0), ("z", 4.0)]
            .into_iter()
            .collect();
        let features: DefaultMap<&str> = [("x", 1.0), ("y", 3.0), ("w", 10.0)]
            .into_iter()
            .collect();

        assert_eq!(features.dot(&weights), -1.0, "Unknown keys contribute zero");
        assert_eq!(
            features.dot(&DefaultMap::new()),
            0.0,
            "All-zero weights give zero"
        );
    }
}
