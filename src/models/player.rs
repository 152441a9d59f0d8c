//! Player entity

use arrow::datatypes::{DataType, Field};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::traits::{ArrowSchema, EntityModel};

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// An athlete representing one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier
    pub player_id: i64,
    /// Full name
    pub name: String,
    /// Country the player represents
    pub country_id: String,
    /// Date of birth, if known
    pub birthdate: Option<NaiveDate>,
}

impl Player {
    /// Create a player without a known birthdate
    #[must_use]
    pub fn new(player_id: i64, name: impl Into<String>, country_id: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            country_id: country_id.into(),
            birthdate: None,
        }
    }

    /// Set the date of birth
    #[must_use]
    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    /// Year component of the birthdate
    #[must_use]
    pub fn birth_year(&self) -> Option<i32> {
        self.birthdate.map(|date| date.year())
    }

    /// Whether the first character of the name is an English vowel (no Y)
    #[must_use]
    pub fn name_starts_with_vowel(&self) -> bool {
        self.name
            .chars()
            .next()
            .is_some_and(|first| VOWELS.contains(&first.to_ascii_uppercase()))
    }
}

impl EntityModel for Player {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.player_id
    }

    fn key(&self) -> String {
        self.player_id.to_string()
    }
}

impl ArrowSchema for Player {
    const TABLE: &'static str = "players";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("player_id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("country_id", DataType::Utf8, false),
            Field::new("birthdate", DataType::Date32, true),
        ]
    }
}
