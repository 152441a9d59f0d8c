//! Event entity

use arrow::datatypes::{DataType, Field};
use serde::{Deserialize, Serialize};

use crate::models::traits::{ArrowSchema, EntityModel};

/// A contested event within one edition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub event_id: i64,
    /// Event name, e.g. "100m Men"
    pub name: String,
    /// Sport or discipline label
    pub eventtype: String,
    /// Edition the event belongs to
    pub olympic_id: String,
    /// Whether results are recorded per team member
    pub is_team_event: bool,
    /// Number of players on a team
    pub num_players_in_team: Option<i32>,
    /// Unit the performance value is noted in
    pub result_noted_in: Option<String>,
}

impl Event {
    /// Create an individual event
    #[must_use]
    pub fn individual(
        event_id: i64,
        name: impl Into<String>,
        eventtype: impl Into<String>,
        olympic_id: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            name: name.into(),
            eventtype: eventtype.into(),
            olympic_id: olympic_id.into(),
            is_team_event: false,
            num_players_in_team: None,
            result_noted_in: None,
        }
    }

    /// Create a team event with a fixed team size
    #[must_use]
    pub fn team(
        event_id: i64,
        name: impl Into<String>,
        eventtype: impl Into<String>,
        olympic_id: impl Into<String>,
        team_size: i32,
    ) -> Self {
        Self {
            is_team_event: true,
            num_players_in_team: Some(team_size),
            ..Self::individual(event_id, name, eventtype, olympic_id)
        }
    }

    /// Set the unit results are noted in
    #[must_use]
    pub fn with_result_unit(mut self, unit: impl Into<String>) -> Self {
        self.result_noted_in = Some(unit.into());
        self
    }
}

impl EntityModel for Event {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.event_id
    }

    fn key(&self) -> String {
        self.event_id.to_string()
    }
}

impl ArrowSchema for Event {
    const TABLE: &'static str = "events";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("event_id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("eventtype", DataType::Utf8, false),
            Field::new("olympic_id", DataType::Utf8, false),
            Field::new("is_team_event", DataType::Boolean, false),
            Field::new("num_players_in_team", DataType::Int32, true),
            Field::new("result_noted_in", DataType::Utf8, true),
        ]
    }
}
