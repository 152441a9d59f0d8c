//! Countries with the fewest team medals per inhabitant in one edition

use serde::Serialize;

use crate::aggregate::{self, Ratio};
use crate::dedup::MedalTripleSet;
use crate::join;
use crate::models::Country;
use crate::snapshot::Snapshot;

/// Rows returned by the ranking
pub const LOWEST_RATIO_LIMIT: usize = 5;

/// Team medals of one country relative to its population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMedalRatio {
    pub country_id: String,
    pub country_name: String,
    pub population: u64,
    /// Distinct team medals; a whole team's medal counts once
    pub team_medals: usize,
    pub medals_per_population: f64,
}

/// The five countries with the lowest team-medal count per population for
/// `olympic_id`.
///
/// All countries with a positive population take part, including those
/// without any team medal. Ordered by ratio, then name, then identifier.
#[must_use]
pub fn lowest_team_medals_per_capita(snapshot: &Snapshot, olympic_id: &str) -> Vec<TeamMedalRatio> {
    if snapshot.edition(olympic_id).is_none() {
        log::warn!("Edition {olympic_id} is not in the snapshot; every country has 0 team medals");
    }

    let mut triples = MedalTripleSet::new();
    triples.extend(join::team_medal_results(snapshot, olympic_id));

    let candidates: Vec<(&Country, usize, Ratio)> = triples
        .counts_for(snapshot.countries())
        .into_iter()
        .filter_map(|(country, medals)| {
            let ratio = Ratio::new(medals as u64, country.positive_population()?)?;
            Some((country, medals, ratio))
        })
        .collect();

    aggregate::top_n(candidates, LOWEST_RATIO_LIMIT, |(a, _, ra), (b, _, rb)| {
        ra.cmp(rb)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.country_id.cmp(&b.country_id))
    })
    .into_iter()
    .map(|(country, team_medals, ratio)| TeamMedalRatio {
        country_id: country.country_id.clone(),
        country_name: country.name.clone(),
        population: ratio.denominator(),
        team_medals,
        medals_per_population: ratio.as_f64(),
    })
    .collect()
}
