//! Games edition entity

use arrow::datatypes::{DataType, Field};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::traits::{ArrowSchema, EntityModel};

/// One staging of the games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Olympics {
    /// Unique edition identifier, e.g. `ATH2004`
    pub olympic_id: String,
    /// Host country
    pub country_id: String,
    /// Host city
    pub city: String,
    /// Year of the games
    pub year: i32,
    /// Opening date
    pub startdate: Option<NaiveDate>,
    /// Closing date
    pub enddate: Option<NaiveDate>,
}

impl Olympics {
    /// Create an edition without opening or closing dates
    #[must_use]
    pub fn new(
        olympic_id: impl Into<String>,
        country_id: impl Into<String>,
        city: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            olympic_id: olympic_id.into(),
            country_id: country_id.into(),
            city: city.into(),
            year,
            startdate: None,
            enddate: None,
        }
    }

    /// Set the opening and closing dates
    #[must_use]
    pub fn with_dates(mut self, startdate: NaiveDate, enddate: NaiveDate) -> Self {
        self.startdate = Some(startdate);
        self.enddate = Some(enddate);
        self
    }
}

impl EntityModel for Olympics {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.olympic_id.clone()
    }

    fn key(&self) -> String {
        self.olympic_id.clone()
    }
}

impl ArrowSchema for Olympics {
    const TABLE: &'static str = "olympics";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("olympic_id", DataType::Utf8, false),
            Field::new("country_id", DataType::Utf8, false),
            Field::new("city", DataType::Utf8, false),
            Field::new("year", DataType::Int32, false),
            Field::new("startdate", DataType::Date32, true),
            Field::new("enddate", DataType::Date32, true),
        ]
    }
}
