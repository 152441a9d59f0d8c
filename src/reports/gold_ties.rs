//! Individual events where two or more athletes shared gold

use serde::Serialize;

use crate::aggregate::{self, ConditionalSum};
use crate::join;
use crate::snapshot::Snapshot;

/// An individual event with a shared first place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldTie {
    pub event_id: i64,
    pub event_name: String,
    /// Edition the event belongs to
    pub olympic_id: String,
    /// Result rows carrying GOLD, always at least 2
    pub gold_winners: u64,
}

/// Minimum gold rows for an event to count as tied
pub const MIN_GOLD_WINNERS: u64 = 2;

/// Individual events with at least two gold rows, ordered by edition
/// identifier and then event identifier
#[must_use]
pub fn tied_individual_golds(snapshot: &Snapshot) -> Vec<GoldTie> {
    let mut winners = ConditionalSum::new();
    for view in join::individual_gold_results(snapshot) {
        winners.add(view.event.event_id, true);
    }

    let tied = aggregate::having(winners.into_tallies(), |(_, tally)| {
        tally.hits >= MIN_GOLD_WINNERS
    });

    let mut ties: Vec<GoldTie> = tied
        .into_iter()
        .filter_map(|(event_id, tally)| {
            let event = snapshot.event(event_id)?;
            Some(GoldTie {
                event_id,
                event_name: event.name.clone(),
                olympic_id: event.olympic_id.clone(),
                gold_winners: tally.hits,
            })
        })
        .collect();
    ties.sort_by(|a, b| {
        a.olympic_id
            .cmp(&b.olympic_id)
            .then_with(|| a.event_id.cmp(&b.event_id))
    });
    ties
}
