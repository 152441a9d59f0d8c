//! Country entity

use arrow::datatypes::{DataType, Field};
use serde::{Deserialize, Serialize};

use crate::models::traits::{ArrowSchema, EntityModel};

/// A country that fields players and hosts editions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Unique country code
    pub country_id: String,
    /// Display name
    pub name: String,
    /// Area in square kilometres
    pub area_sqkm: Option<i64>,
    /// Population; missing or non-positive values are excluded from per-capita ratios
    pub population: Option<i64>,
}

impl Country {
    /// Create a country with no area or population information
    #[must_use]
    pub fn new(country_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            country_id: country_id.into(),
            name: name.into(),
            area_sqkm: None,
            population: None,
        }
    }

    /// Set the population
    #[must_use]
    pub fn with_population(mut self, population: i64) -> Self {
        self.population = Some(population);
        self
    }

    /// Set the area
    #[must_use]
    pub fn with_area(mut self, area_sqkm: i64) -> Self {
        self.area_sqkm = Some(area_sqkm);
        self
    }

    /// Population usable as a ratio denominator; `None` when missing or not positive
    #[must_use]
    pub fn positive_population(&self) -> Option<u64> {
        self.population
            .filter(|population| *population > 0)
            .and_then(|population| u64::try_from(population).ok())
    }
}

impl EntityModel for Country {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.country_id.clone()
    }

    fn key(&self) -> String {
        self.country_id.clone()
    }
}

impl ArrowSchema for Country {
    const TABLE: &'static str = "countries";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("country_id", DataType::Utf8, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("area_sqkm", DataType::Int64, true),
            Field::new("population", DataType::Int64, true),
        ]
    }
}
