//! Result entity
//!
//! Team events store one row per team member, so a single team medal appears
//! once for every player on the team.

use arrow::datatypes::{DataType, Field};
use serde::{Deserialize, Serialize};

use crate::models::traits::{ArrowSchema, EntityModel};
use crate::models::types::{Medal, medal_column};

/// One player's outcome in one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    /// Event the result belongs to
    pub event_id: i64,
    /// Player the result belongs to
    pub player_id: i64,
    /// Medal won, if any; absent when the file has no medal column
    #[serde(default, with = "medal_column")]
    pub medal: Option<Medal>,
    /// Performance value in the event's unit
    pub result: Option<f64>,
}

impl EventResult {
    /// Create a result without a medal or performance value
    #[must_use]
    pub const fn new(event_id: i64, player_id: i64) -> Self {
        Self {
            event_id,
            player_id,
            medal: None,
            result: None,
        }
    }

    /// Set the medal
    #[must_use]
    pub const fn with_medal(mut self, medal: Medal) -> Self {
        self.medal = Some(medal);
        self
    }

    /// Set the performance value
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.result = Some(value);
        self
    }

    /// Whether this row carries a gold medal
    #[must_use]
    pub fn is_gold(&self) -> bool {
        self.medal == Some(Medal::Gold)
    }
}

impl EntityModel for EventResult {
    type Id = (i64, i64);

    fn id(&self) -> Self::Id {
        (self.event_id, self.player_id)
    }

    fn key(&self) -> String {
        format!("{}:{}", self.event_id, self.player_id)
    }
}

impl ArrowSchema for EventResult {
    const TABLE: &'static str = "results";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("event_id", DataType::Int64, false),
            Field::new("player_id", DataType::Int64, false),
            Field::new("medal", DataType::Utf8, true),
            Field::new("result", DataType::Float64, true),
        ]
    }
}
