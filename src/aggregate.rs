//! Aggregation and ranking engine
//!
//! Grouped accumulators, exact ratios with a zero-denominator guard, and the
//! ordering helpers every report uses to produce a reproducible total order.

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Count of distinct values per group key
#[derive(Debug)]
pub struct DistinctCounter<K, V> {
    groups: FxHashMap<K, FxHashSet<V>>,
}

impl<K: Eq + Hash, V: Eq + Hash> DistinctCounter<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: FxHashMap::default(),
        }
    }

    /// Record `value` under `key`; repeated values are counted once
    pub fn insert(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().insert(value);
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the counter into per-group counts
    #[must_use]
    pub fn into_counts(self) -> FxHashMap<K, usize> {
        self.groups
            .into_iter()
            .map(|(key, values)| (key, values.len()))
            .collect()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Default for DistinctCounter<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-group tally of rows and of rows matching a predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rows where the predicate held
    pub hits: u64,
    /// All rows in the group
    pub rows: u64,
}

impl Tally {
    /// Share of matching rows; `None` for an empty group
    #[must_use]
    pub fn ratio(self) -> Option<Ratio> {
        Ratio::new(self.hits, self.rows)
    }
}

/// Conditional sum: adds 1 per row where the indicator holds, 0 otherwise.
///
/// Every key that received a row is kept, so a group whose predicate never
/// held still reports a sum of 0.
#[derive(Debug)]
pub struct ConditionalSum<K> {
    tallies: FxHashMap<K, Tally>,
}

impl<K: Eq + Hash> ConditionalSum<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tallies: FxHashMap::default(),
        }
    }

    /// Add one row to the group `key`
    pub fn add(&mut self, key: K, indicator: bool) {
        let tally = self.tallies.entry(key).or_default();
        tally.rows += 1;
        if indicator {
            tally.hits += 1;
        }
    }

    /// Sum of indicators for `key`
    #[must_use]
    pub fn sum(&self, key: &K) -> u64 {
        self.tallies.get(key).map_or(0, |tally| tally.hits)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Consume into per-group tallies
    #[must_use]
    pub fn into_tallies(self) -> FxHashMap<K, Tally> {
        self.tallies
    }
}

impl<K: Eq + Hash> Default for ConditionalSum<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact non-negative ratio of two aggregates.
///
/// Comparison cross-multiplies instead of dividing, so `1/3` and `2/6` are
/// equal and a tie-break decides between them.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    /// `None` when the denominator is zero
    #[must_use]
    pub const fn new(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    #[must_use]
    pub const fn numerator(self) -> u64 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(self) -> u64 {
        self.denominator
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Ratio scaled to 0–100
    #[must_use]
    pub fn percent(self) -> f64 {
        self.as_f64() * 100.0
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.numerator) * u128::from(other.denominator);
        let rhs = u128::from(other.numerator) * u128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

/// HAVING-equivalent filter over aggregated rows
pub fn having<T, F>(rows: impl IntoIterator<Item = T>, predicate: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    rows.into_iter().filter(|row| predicate(row)).collect()
}

/// Sort by a total order, then keep the first `n` rows
pub fn top_n<T, F>(mut rows: Vec<T>, n: usize, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    rows.sort_by(compare);
    rows.truncate(n);
    rows
}

/// The first row under a total order
pub fn first_by<T, F>(rows: impl IntoIterator<Item = T>, mut compare: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    rows.into_iter().min_by(|a, b| compare(a, b))
}
