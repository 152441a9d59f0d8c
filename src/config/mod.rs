//! Configuration for loading a snapshot and running the reports.

use std::path::PathBuf;

use crate::error::{OlympicsError, Result};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Edition profiled by the birth-year report when nothing else is configured
pub const DEFAULT_BIRTH_YEAR_EDITION: &str = "ATH2004";

/// Edition ranked by the team-medal report when nothing else is configured
pub const DEFAULT_TEAM_MEDAL_EDITION: &str = "SYD2000";

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory holding the five table files
    pub data_dir: PathBuf,
    /// Edition identifier passed to the birth-year profile
    pub birth_year_edition: String,
    /// Edition identifier passed to the team-medals-per-population ranking
    pub team_medal_edition: String,
    /// Rows per record batch when reading Parquet
    pub batch_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            birth_year_edition: DEFAULT_BIRTH_YEAR_EDITION.to_string(),
            team_medal_edition: DEFAULT_TEAM_MEDAL_EDITION.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ReportConfig {
    /// Build a configuration from the process environment.
    ///
    /// Recognised variables: `OLYMPICS_DATA_DIR`, `OLYMPICS_Q1_EDITION`,
    /// `OLYMPICS_Q5_EDITION` and `PARQUET_BATCH_SIZE`. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("OLYMPICS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(edition) = lookup("OLYMPICS_Q1_EDITION") {
            config.birth_year_edition = edition;
        }
        if let Some(edition) = lookup("OLYMPICS_Q5_EDITION") {
            config.team_medal_edition = edition;
        }
        if let Some(raw) = lookup("PARQUET_BATCH_SIZE") {
            config.batch_size = raw.trim().parse::<usize>().map_err(|e| {
                OlympicsError::Config(format!("PARQUET_BATCH_SIZE '{raw}' is not a number: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(OlympicsError::Config(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if self.birth_year_edition.trim().is_empty() || self.team_medal_edition.trim().is_empty() {
            return Err(OlympicsError::Config(
                "edition identifiers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
