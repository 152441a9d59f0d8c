//! The five fixed reports
//!
//! Each report is a pure function over a shared [`Snapshot`]. Because the
//! snapshot is immutable, [`run_all`] computes the reports in parallel.

pub mod birth_year;
pub mod gold_ties;
pub mod medalists;
pub mod team_medals;
pub mod vowel_names;

pub use birth_year::{BirthYearStats, birth_year_profile};
pub use gold_ties::{GoldTie, tied_individual_golds};
pub use medalists::{EditionMedalist, medalists_by_edition};
pub use team_medals::{TeamMedalRatio, lowest_team_medals_per_capita};
pub use vowel_names::{VowelNameLeader, vowel_name_leader};

use serde::Serialize;

use crate::config::ReportConfig;
use crate::snapshot::Snapshot;

/// Output of all five reports for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBundle {
    pub birth_year_edition: String,
    pub birth_years: Vec<BirthYearStats>,
    pub gold_ties: Vec<GoldTie>,
    pub medalists: Vec<EditionMedalist>,
    pub vowel_name_leader: Option<VowelNameLeader>,
    pub team_medal_edition: String,
    pub team_medal_ratios: Vec<TeamMedalRatio>,
}

/// Run every report against the snapshot, in parallel
#[must_use]
pub fn run_all(snapshot: &Snapshot, config: &ReportConfig) -> ReportBundle {
    let ((birth_years, gold_ties), (medalists, (vowel_name_leader, team_medal_ratios))) =
        rayon::join(
            || {
                rayon::join(
                    || birth_year_profile(snapshot, &config.birth_year_edition),
                    || tied_individual_golds(snapshot),
                )
            },
            || {
                rayon::join(
                    || medalists_by_edition(snapshot),
                    || {
                        rayon::join(
                            || vowel_name_leader(snapshot),
                            || lowest_team_medals_per_capita(snapshot, &config.team_medal_edition),
                        )
                    },
                )
            },
        );

    log::info!(
        "Reports complete: {} birth years, {} gold ties, {} medalist pairs, {} team-medal rows",
        birth_years.len(),
        gold_ties.len(),
        medalists.len(),
        team_medal_ratios.len()
    );

    ReportBundle {
        birth_year_edition: config.birth_year_edition.clone(),
        birth_years,
        gold_ties,
        medalists,
        vowel_name_leader,
        team_medal_edition: config.team_medal_edition.clone(),
        team_medal_ratios,
    }
}
