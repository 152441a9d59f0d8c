//! Join and projection layer
//!
//! Follows the fixed reference chain Result → Event → Olympics and
//! Result → Player → Country through the snapshot indexes, producing the
//! flattened rows each report aggregates. Row order is not significant;
//! every report applies its own total order after aggregation.

use crate::models::{Country, Event, EventResult, Olympics, Player};
use crate::snapshot::Snapshot;

/// A result joined with its event, the event's edition, the player and the
/// player's country
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    pub result: &'a EventResult,
    pub event: &'a Event,
    /// Edition the event belongs to
    pub edition: &'a Olympics,
    pub player: &'a Player,
    /// Country the player represents
    pub country: &'a Country,
}

impl<'a> ResultView<'a> {
    /// Join a single result; `None` when any parent is absent from the snapshot
    #[must_use]
    pub fn resolve(snapshot: &'a Snapshot, result: &'a EventResult) -> Option<Self> {
        let event = snapshot.event(result.event_id)?;
        let edition = snapshot.edition(&event.olympic_id)?;
        let player = snapshot.player(result.player_id)?;
        let country = snapshot.country(&player.country_id)?;
        Some(Self {
            result,
            event,
            edition,
            player,
            country,
        })
    }
}

/// Every result whose event belongs to the edition
#[must_use]
pub fn edition_results<'a>(snapshot: &'a Snapshot, olympic_id: &str) -> Vec<ResultView<'a>> {
    snapshot
        .events_in_edition(olympic_id)
        .flat_map(|event| snapshot.results_for_event(event.event_id))
        .filter_map(|result| ResultView::resolve(snapshot, result))
        .collect()
}

/// Every result carrying one of the three medals, across all editions
#[must_use]
pub fn medal_results(snapshot: &Snapshot) -> Vec<ResultView<'_>> {
    snapshot
        .results()
        .filter(|result| result.medal.is_some())
        .filter_map(|result| ResultView::resolve(snapshot, result))
        .collect()
}

/// Medal-winning results of the edition's team events
#[must_use]
pub fn team_medal_results<'a>(snapshot: &'a Snapshot, olympic_id: &str) -> Vec<ResultView<'a>> {
    snapshot
        .events_in_edition(olympic_id)
        .filter(|event| event.is_team_event)
        .flat_map(|event| snapshot.results_for_event(event.event_id))
        .filter(|result| result.medal.is_some())
        .filter_map(|result| ResultView::resolve(snapshot, result))
        .collect()
}

/// Gold results of individual events, across all editions
#[must_use]
pub fn individual_gold_results(snapshot: &Snapshot) -> Vec<ResultView<'_>> {
    snapshot
        .events()
        .filter(|event| !event.is_team_event)
        .flat_map(|event| snapshot.results_for_event(event.event_id))
        .filter(|result| result.is_gold())
        .filter_map(|result| ResultView::resolve(snapshot, result))
        .collect()
}

/// Every country paired with the players representing it.
///
/// Countries without players are included with an empty list.
#[must_use]
pub fn players_by_country(snapshot: &Snapshot) -> Vec<(&Country, Vec<&Player>)> {
    snapshot
        .countries()
        .map(|country| {
            let players = snapshot.players_in_country(&country.country_id).collect();
            (country, players)
        })
        .collect()
}
