//! Shared fixtures for the integration tests
//!
//! A small swimming-heavy dataset covering two editions, one tied individual
//! final, relay teams of several sizes, a player without a birthdate and
//! countries with missing or zero population.

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use olympic_stats::{Country, Event, EventResult, Medal, Olympics, Player, Snapshot, Tables};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn player(id: i64, name: &str, country: &str, born: Option<NaiveDate>) -> Player {
    let player = Player::new(id, name, country);
    match born {
        Some(birthdate) => player.with_birthdate(birthdate),
        None => player,
    }
}

fn medal(event_id: i64, player_id: i64, medal: Medal) -> EventResult {
    EventResult::new(event_id, player_id).with_medal(medal)
}

pub fn sample_tables() -> Tables {
    let countries = vec![
        Country::new("AUS", "Australia").with_population(19_000_000).with_area(7_692_024),
        Country::new("USA", "United States").with_population(280_000_000),
        Country::new("NED", "Netherlands").with_population(16_000_000),
        Country::new("ITA", "Italy").with_population(57_000_000),
        Country::new("GRE", "Greece").with_population(11_000_000),
        Country::new("CAN", "Canada").with_population(31_000_000),
        Country::new("ATL", "Atlantis"),
        Country::new("VAT", "Vatican City").with_population(0),
    ];

    let olympics = vec![
        Olympics::new("SYD2000", "AUS", "Sydney", 2000)
            .with_dates(date(2000, 9, 15), date(2000, 10, 1)),
        Olympics::new("ATH2004", "GRE", "Athens", 2004)
            .with_dates(date(2004, 8, 13), date(2004, 8, 29)),
    ];

    let players = vec![
        player(1, "Ian Thorpe", "AUS", Some(date(1982, 10, 13))),
        player(2, "Grant Hackett", "AUS", Some(date(1980, 5, 9))),
        player(3, "Michael Klim", "AUS", Some(date(1977, 8, 13))),
        player(4, "Ashley Callus", "AUS", Some(date(1979, 7, 18))),
        player(5, "Pieter van den Hoogenband", "NED", Some(date(1978, 10, 14))),
        player(6, "Inge de Bruijn", "NED", Some(date(1973, 8, 24))),
        player(7, "Anthony Ervin", "USA", Some(date(1981, 5, 26))),
        player(8, "Gary Hall", "USA", Some(date(1974, 9, 26))),
        player(9, "Michael Phelps", "USA", Some(date(1985, 6, 30))),
        player(10, "Nikos Siranidis", "GRE", None),
        player(11, "Eleni Pappa", "GRE", Some(date(1990, 1, 1))),
    ];

    let events = vec![
        Event::individual(100, "50m Freestyle Men", "Swimming", "SYD2000").with_result_unit("seconds"),
        Event::team(101, "4x100m Freestyle Relay Men", "Swimming", "SYD2000", 4),
        Event::individual(102, "100m Freestyle Women", "Swimming", "SYD2000"),
        Event::individual(103, "200m Freestyle Men", "Swimming", "SYD2000"),
        Event::individual(200, "200m Freestyle Men", "Swimming", "ATH2004"),
        Event::team(201, "4x200m Freestyle Relay Men", "Swimming", "ATH2004", 4),
        Event::individual(202, "3m Springboard Synchro", "Diving", "ATH2004"),
        Event::individual(203, "10m Platform Men", "Diving", "ATH2004"),
        Event::individual(204, "400m Freestyle Men", "Swimming", "ATH2004"),
    ];

    let results = vec![
        // Shared gold in the 50m final
        medal(100, 7, Medal::Gold).with_value(21.98),
        medal(100, 8, Medal::Gold).with_value(21.98),
        // One row per relay swimmer
        medal(101, 1, Medal::Gold),
        medal(101, 2, Medal::Gold),
        medal(101, 3, Medal::Gold),
        medal(101, 4, Medal::Gold),
        medal(101, 7, Medal::Silver),
        medal(101, 8, Medal::Silver),
        medal(101, 9, Medal::Silver),
        medal(101, 5, Medal::Bronze),
        medal(102, 6, Medal::Gold),
        medal(103, 5, Medal::Gold),
        medal(103, 1, Medal::Silver),
        medal(200, 1, Medal::Gold),
        medal(200, 5, Medal::Silver),
        medal(200, 9, Medal::Bronze),
        medal(201, 9, Medal::Gold),
        medal(201, 8, Medal::Gold),
        medal(201, 1, Medal::Silver),
        medal(201, 2, Medal::Silver),
        medal(202, 10, Medal::Gold),
        medal(202, 3, Medal::Gold),
        EventResult::new(203, 10).with_value(450.5),
        medal(204, 1, Medal::Gold),
    ];

    Tables {
        countries,
        olympics,
        players,
        events,
        results,
    }
}

pub fn sample_snapshot() -> Snapshot {
    sample_tables().into_snapshot()
}

/// A fresh, empty directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("olympic-stats-{name}-{}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
