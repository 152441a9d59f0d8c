//! Players who medaled, per edition

use itertools::Itertools;
use serde::Serialize;

use crate::join;
use crate::snapshot::Snapshot;

/// A player name paired with an edition in which that name won a medal
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EditionMedalist {
    pub player_name: String,
    pub olympic_id: String,
}

/// Distinct (player name, edition) pairs with at least one medal, ordered by
/// name and then edition identifier
#[must_use]
pub fn medalists_by_edition(snapshot: &Snapshot) -> Vec<EditionMedalist> {
    join::medal_results(snapshot)
        .into_iter()
        .map(|view| (view.player.name.as_str(), view.edition.olympic_id.as_str()))
        .sorted_unstable()
        .dedup()
        .map(|(player_name, olympic_id)| EditionMedalist {
            player_name: player_name.to_string(),
            olympic_id: olympic_id.to_string(),
        })
        .collect()
}
