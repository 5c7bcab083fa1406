//! Multiset counters and the two set metrics computed over them.

use std::collections::{BTreeMap, BTreeSet};

/// A multiset: key -> occurrence count. Keys with a zero count are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<K: Ord> {
    counts: BTreeMap<K, usize>,
}

impl<K: Ord> Default for Multiset<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<K: Ord> Multiset<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// Union of both key sets, ascending.
    fn union_keys<'a>(&'a self, other: &'a Self) -> BTreeSet<&'a K> {
        self.counts.keys().chain(other.counts.keys()).collect()
    }

    /// `Σ |A[k] − B[k]|` over the key union.
    pub fn abs_delta(&self, other: &Self) -> usize {
        self.union_keys(other)
            .into_iter()
            .map(|k| self.count(k).abs_diff(other.count(k)))
            .sum()
    }

    /// Multiset Jaccard similarity: `Σ min / Σ max`, `1.0` when both sides are empty.
    pub fn jaccard(&self, other: &Self) -> f64 {
        let mut inter = 0usize;
        let mut union = 0usize;
        for k in self.union_keys(other) {
            let (a, b) = (self.count(k), other.count(k));
            inter += a.min(b);
            union += a.max(b);
        }
        if union == 0 {
            return 1.0;
        }
        inter as f64 / union as f64
    }

    /// Keys whose counts differ, ascending, as `(key, self_count, other_count)`.
    pub fn differing<'a>(&'a self, other: &'a Self) -> Vec<CountDiff<'a, K>> {
        self.union_keys(other)
            .into_iter()
            .filter_map(|k| {
                let (a, b) = (self.count(k), other.count(k));
                (a != b).then_some(CountDiff { key: k, a, b })
            })
            .collect()
    }
}

impl<K: Ord> FromIterator<K> for Multiset<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut out = Self::new();
        for k in iter {
            out.add(k);
        }
        out
    }
}

/// One key whose count differs between two multisets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountDiff<'a, K> {
    pub key: &'a K,
    pub a: usize,
    pub b: usize,
}

impl<K> CountDiff<'_, K> {
    /// `b − a`.
    pub fn signed(&self) -> i64 {
        self.b as i64 - self.a as i64
    }

    pub fn abs(&self) -> usize {
        self.a.abs_diff(self.b)
    }
}
