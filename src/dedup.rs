//! Team-medal deduplication
//!
//! A team event stores one result row per team member, so one team medal
//! arrives as N identical (event, medal, country) triples. Collapsing them
//! into a set gives exactly one medal per awarding.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::join::ResultView;
use crate::models::{Country, Medal};

/// Key identifying one medal awarding to one country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MedalTriple<'a> {
    pub event_id: i64,
    pub medal: Medal,
    /// Country of the medalling player
    pub country_id: &'a str,
}

/// Distinct set of medal triples
#[derive(Debug, Default)]
pub struct MedalTripleSet<'a> {
    triples: FxHashSet<MedalTriple<'a>>,
}

impl<'a> MedalTripleSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns `true` if it was not already present
    pub fn insert(&mut self, event_id: i64, medal: Medal, country_id: &'a str) -> bool {
        self.triples.insert(MedalTriple {
            event_id,
            medal,
            country_id,
        })
    }

    /// Insert the triple of a joined result row, using the player's country.
    ///
    /// Rows without a medal are ignored.
    pub fn insert_view(&mut self, view: &ResultView<'a>) -> bool {
        match view.result.medal {
            Some(medal) => self.insert(view.event.event_id, medal, &view.country.country_id),
            None => false,
        }
    }

    /// Number of distinct triples
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Per-country counts for countries with at least one triple
    #[must_use]
    pub fn counts_by_country(&self) -> FxHashMap<&'a str, usize> {
        let mut counts = FxHashMap::default();
        for triple in &self.triples {
            *counts.entry(triple.country_id).or_insert(0) += 1;
        }
        counts
    }

    /// Outer join of the counts against a full country set.
    ///
    /// Every country appears exactly once; countries without triples get 0.
    pub fn counts_for<'c, I>(&self, countries: I) -> Vec<(&'c Country, usize)>
    where
        I: IntoIterator<Item = &'c Country>,
    {
        let counts = self.counts_by_country();
        countries
            .into_iter()
            .map(|country| {
                let count = counts
                    .get(country.country_id.as_str())
                    .copied()
                    .unwrap_or(0);
                (country, count)
            })
            .collect()
    }
}

impl<'a> Extend<ResultView<'a>> for MedalTripleSet<'a> {
    fn extend<T: IntoIterator<Item = ResultView<'a>>>(&mut self, views: T) {
        for view in views {
            self.insert_view(&view);
        }
    }
}
