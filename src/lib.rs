//! Fixed analytical reports over an Olympic-Games dataset.
//!
//! The dataset is five related tables (countries, editions, players, events,
//! results) held in an immutable [`Snapshot`]. Five pure report functions in
//! [`reports`] turn per-result rows into aggregates, deduplicating team
//! medals and applying deterministic tie-breaks.

pub mod aggregate;
pub mod collections;
pub mod config;
pub mod dedup;
pub mod error;
pub mod join;
pub mod loader;
pub mod models;
pub mod reports;
pub mod snapshot;
pub mod utils;

// Re-export the most common types for easier use
pub use config::ReportConfig;
pub use error::{OlympicsError, Result};
pub use loader::{Tables, load_snapshot};
pub use models::{Country, Event, EventResult, Medal, Olympics, Player};
pub use reports::{
    ReportBundle, birth_year_profile, lowest_team_medals_per_capita, medalists_by_edition,
    run_all, tied_individual_golds, vowel_name_leader,
};
pub use snapshot::{IntegrityFault, IntegrityReport, Snapshot};
