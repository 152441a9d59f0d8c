//! Country with the largest share of vowel-initial player names

use serde::Serialize;

use crate::aggregate::{self, Ratio, Tally};
use crate::join;
use crate::models::Country;
use crate::snapshot::Snapshot;

/// The country whose players most often have a name starting with a vowel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VowelNameLeader {
    pub country_id: String,
    pub country_name: String,
    /// Share of vowel-initial names, 0–100
    pub percent_vowel: f64,
    pub vowel_players: u64,
    pub total_players: u64,
}

/// Highest vowel-initial share; ties go to the smaller country identifier.
///
/// Countries without players are not ranked. `None` means no country has any
/// player, which is distinct from a winner at 0 %.
#[must_use]
pub fn vowel_name_leader(snapshot: &Snapshot) -> Option<VowelNameLeader> {
    let ranked: Vec<(&Country, Ratio)> = join::players_by_country(snapshot)
        .into_iter()
        .filter_map(|(country, players)| {
            let tally = Tally {
                hits: players.iter().filter(|p| p.name_starts_with_vowel()).count() as u64,
                rows: players.len() as u64,
            };
            // Empty countries have no ratio and drop out here
            Some((country, tally.ratio()?))
        })
        .collect();

    let (country, ratio) = aggregate::first_by(ranked, |(a, ra), (b, rb)| {
        rb.cmp(ra).then_with(|| a.country_id.cmp(&b.country_id))
    })?;

    Some(VowelNameLeader {
        country_id: country.country_id.clone(),
        country_name: country.name.clone(),
        percent_vowel: ratio.percent(),
        vowel_players: ratio.numerator(),
        total_players: ratio.denominator(),
    })
}
