//! Immutable in-memory snapshot of the five tables
//!
//! The snapshot checks referential integrity once, while it is built. Rows
//! whose parent entity is missing, and rows repeating an existing key, are
//! skipped and recorded in the [`IntegrityReport`]; every report then runs
//! over the same validated rows. The foreign-key indexes used by the join
//! layer are built here as well.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::collections::{EntityCollection, ModelCollection};
use crate::models::{Country, EntityModel, Event, EventResult, Olympics, Player};
use crate::utils::logging::log_integrity_fault;

/// A row skipped while building a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityFault {
    /// A second row with an existing primary key
    DuplicateKey {
        /// Table the row came from
        table: &'static str,
        /// Key of the repeated row
        key: String,
    },
    /// An edition whose host country does not exist
    EditionWithoutCountry { olympic_id: String, country_id: String },
    /// A player whose country does not exist
    PlayerWithoutCountry { player_id: i64, country_id: String },
    /// An event whose edition does not exist
    EventWithoutEdition { event_id: i64, olympic_id: String },
    /// A result whose event does not exist
    ResultWithoutEvent { event_id: i64, player_id: i64 },
    /// A result whose player does not exist
    ResultWithoutPlayer { event_id: i64, player_id: i64 },
}

impl fmt::Display for IntegrityFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { table, key } => write!(f, "duplicate key {key} in {table}"),
            Self::EditionWithoutCountry {
                olympic_id,
                country_id,
            } => write!(f, "edition {olympic_id} references missing country {country_id}"),
            Self::PlayerWithoutCountry {
                player_id,
                country_id,
            } => write!(f, "player {player_id} references missing country {country_id}"),
            Self::EventWithoutEdition {
                event_id,
                olympic_id,
            } => write!(f, "event {event_id} references missing edition {olympic_id}"),
            Self::ResultWithoutEvent {
                event_id,
                player_id,
            } => write!(
                f,
                "result ({event_id}, {player_id}) references missing event {event_id}"
            ),
            Self::ResultWithoutPlayer {
                event_id,
                player_id,
            } => write!(
                f,
                "result ({event_id}, {player_id}) references missing player {player_id}"
            ),
        }
    }
}

/// Rows skipped while building a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    faults: Vec<IntegrityFault>,
}

impl IntegrityReport {
    fn record(&mut self, fault: IntegrityFault) {
        log_integrity_fault(&fault);
        self.faults.push(fault);
    }

    /// True when no row was skipped
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    /// Number of skipped rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    /// Skipped rows in the order they were found
    #[must_use]
    pub fn faults(&self) -> &[IntegrityFault] {
        &self.faults
    }
}

/// The five tables plus their foreign-key indexes
#[derive(Debug, Default)]
pub struct Snapshot {
    countries: EntityCollection<Country>,
    olympics: EntityCollection<Olympics>,
    players: EntityCollection<Player>,
    events: EntityCollection<Event>,
    results: EntityCollection<EventResult>,
    events_by_edition: FxHashMap<String, Vec<i64>>,
    results_by_event: FxHashMap<i64, Vec<(i64, i64)>>,
    players_by_country: FxHashMap<String, Vec<i64>>,
    integrity: IntegrityReport,
}

impl Snapshot {
    /// Build a snapshot, skipping rows that violate key or reference integrity.
    ///
    /// Parents are inserted before children, so a child is only kept when its
    /// parent survived validation.
    #[must_use]
    pub fn new(
        countries: Vec<Country>,
        olympics: Vec<Olympics>,
        players: Vec<Player>,
        events: Vec<Event>,
        results: Vec<EventResult>,
    ) -> Self {
        let mut snapshot = Self {
            countries: EntityCollection::with_capacity(countries.len()),
            olympics: EntityCollection::with_capacity(olympics.len()),
            players: EntityCollection::with_capacity(players.len()),
            events: EntityCollection::with_capacity(events.len()),
            results: EntityCollection::with_capacity(results.len()),
            ..Self::default()
        };

        for country in countries {
            snapshot.insert_country(country);
        }
        for edition in olympics {
            snapshot.insert_edition(edition);
        }
        for player in players {
            snapshot.insert_player(player);
        }
        for event in events {
            snapshot.insert_event(event);
        }
        for result in results {
            snapshot.insert_result(result);
        }

        log::debug!(
            "Built snapshot: {} countries, {} editions, {} players, {} events, {} results, {} skipped rows",
            snapshot.countries.count(),
            snapshot.olympics.count(),
            snapshot.players.count(),
            snapshot.events.count(),
            snapshot.results.count(),
            snapshot.integrity.len()
        );

        snapshot
    }

    fn insert_country(&mut self, country: Country) {
        let key = country.key();
        if !self.countries.add(country) {
            self.integrity.record(IntegrityFault::DuplicateKey {
                table: "countries",
                key,
            });
        }
    }

    fn insert_edition(&mut self, edition: Olympics) {
        if !self.countries.contains(&edition.country_id) {
            self.integrity.record(IntegrityFault::EditionWithoutCountry {
                olympic_id: edition.olympic_id,
                country_id: edition.country_id,
            });
            return;
        }
        let key = edition.key();
        if !self.olympics.add(edition) {
            self.integrity.record(IntegrityFault::DuplicateKey {
                table: "olympics",
                key,
            });
        }
    }

    fn insert_player(&mut self, player: Player) {
        if !self.countries.contains(&player.country_id) {
            self.integrity.record(IntegrityFault::PlayerWithoutCountry {
                player_id: player.player_id,
                country_id: player.country_id,
            });
            return;
        }
        let (player_id, country_id) = (player.player_id, player.country_id.clone());
        if self.players.add(player) {
            self.players_by_country
                .entry(country_id)
                .or_default()
                .push(player_id);
        } else {
            self.integrity.record(IntegrityFault::DuplicateKey {
                table: "players",
                key: player_id.to_string(),
            });
        }
    }

    fn insert_event(&mut self, event: Event) {
        if !self.olympics.contains(&event.olympic_id) {
            self.integrity.record(IntegrityFault::EventWithoutEdition {
                event_id: event.event_id,
                olympic_id: event.olympic_id,
            });
            return;
        }
        let (event_id, olympic_id) = (event.event_id, event.olympic_id.clone());
        if self.events.add(event) {
            self.events_by_edition
                .entry(olympic_id)
                .or_default()
                .push(event_id);
        } else {
            self.integrity.record(IntegrityFault::DuplicateKey {
                table: "events",
                key: event_id.to_string(),
            });
        }
    }

    fn insert_result(&mut self, result: EventResult) {
        let (event_id, player_id) = result.id();
        if !self.events.contains(&event_id) {
            self.integrity
                .record(IntegrityFault::ResultWithoutEvent { event_id, player_id });
            return;
        }
        if !self.players.contains(&player_id) {
            self.integrity
                .record(IntegrityFault::ResultWithoutPlayer { event_id, player_id });
            return;
        }
        let key = result.key();
        if self.results.add(result) {
            self.results_by_event
                .entry(event_id)
                .or_default()
                .push((event_id, player_id));
        } else {
            self.integrity.record(IntegrityFault::DuplicateKey {
                table: "results",
                key,
            });
        }
    }

    /// Rows skipped while the snapshot was built
    #[must_use]
    pub const fn integrity(&self) -> &IntegrityReport {
        &self.integrity
    }

    #[must_use]
    pub fn country(&self, country_id: &str) -> Option<&Country> {
        self.countries.lookup(country_id)
    }

    #[must_use]
    pub fn edition(&self, olympic_id: &str) -> Option<&Olympics> {
        self.olympics.lookup(olympic_id)
    }

    #[must_use]
    pub fn player(&self, player_id: i64) -> Option<&Player> {
        self.players.get(&player_id)
    }

    #[must_use]
    pub fn event(&self, event_id: i64) -> Option<&Event> {
        self.events.get(&event_id)
    }

    #[must_use]
    pub fn result(&self, event_id: i64, player_id: i64) -> Option<&EventResult> {
        self.results.get(&(event_id, player_id))
    }

    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn editions(&self) -> impl Iterator<Item = &Olympics> {
        self.olympics.iter()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn results(&self) -> impl Iterator<Item = &EventResult> {
        self.results.iter()
    }

    /// Events belonging to an edition
    pub fn events_in_edition(&self, olympic_id: &str) -> impl Iterator<Item = &Event> {
        self.events_by_edition
            .get(olympic_id)
            .into_iter()
            .flatten()
            .filter_map(|event_id| self.events.get(event_id))
    }

    /// Results recorded for an event
    pub fn results_for_event(&self, event_id: i64) -> impl Iterator<Item = &EventResult> {
        self.results_by_event
            .get(&event_id)
            .map(Vec::as_slice)
            .into_iter()
            .flatten()
            .filter_map(|key| self.results.get(key))
    }

    /// Players representing a country
    pub fn players_in_country(&self, country_id: &str) -> impl Iterator<Item = &Player> {
        self.players_by_country
            .get(country_id)
            .into_iter()
            .flatten()
            .filter_map(|player_id| self.players.get(player_id))
    }

    /// Edition identifiers of the games held in `year`, ascending
    #[must_use]
    pub fn editions_in_year(&self, year: i32) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .olympics
            .filter(|edition| edition.year == year)
            .into_iter()
            .map(|edition| edition.olympic_id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}
