//! Birth-year medal profile for one edition

use serde::Serialize;

use crate::aggregate::{ConditionalSum, DistinctCounter};
use crate::join;
use crate::snapshot::Snapshot;

/// Players and gold medals of one birth year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    /// Birth year; `None` groups players without a known birthdate
    pub birth_year: Option<i32>,
    /// Distinct players with at least one result in the edition
    pub players: usize,
    /// Gold result rows; a player with two golds counts twice
    pub gold_medals: u64,
}

/// Profile the players who took part in `olympic_id` by birth year.
///
/// Rows are ordered by birth year ascending, with the unknown-birthdate group
/// last. An unknown edition yields no rows.
#[must_use]
pub fn birth_year_profile(snapshot: &Snapshot, olympic_id: &str) -> Vec<BirthYearStats> {
    if snapshot.edition(olympic_id).is_none() {
        log::warn!("Edition {olympic_id} is not in the snapshot; birth-year profile is empty");
        return Vec::new();
    }

    let mut players = DistinctCounter::new();
    let mut golds = ConditionalSum::new();
    for view in join::edition_results(snapshot, olympic_id) {
        let birth_year = view.player.birth_year();
        players.insert(birth_year, view.player.player_id);
        golds.add(birth_year, view.result.is_gold());
    }

    let mut stats: Vec<BirthYearStats> = players
        .into_counts()
        .into_iter()
        .map(|(birth_year, players)| BirthYearStats {
            birth_year,
            players,
            gold_medals: golds.sum(&birth_year),
        })
        .collect();
    stats.sort_by_key(|row| (row.birth_year.is_none(), row.birth_year));
    stats
}
