//! Parquet table loading
//!
//! The five tables live in one directory, one Parquet file per table named
//! after [`ArrowSchema::TABLE`] (`countries.parquet`, `olympics.parquet`,
//! `players.parquet`, `events.parquet`, `results.parquet`).

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use parquet::arrow::ArrowWriter;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::{OlympicsError, Result};
use crate::models::{ArrowSchema, Country, Event, EventResult, Olympics, Player};
use crate::snapshot::Snapshot;
use crate::utils::logging::{log_table_loaded, log_table_start, log_warning};

/// Path of a table file inside a data directory
#[must_use]
pub fn table_path<T: ArrowSchema>(dir: &Path) -> PathBuf {
    dir.join(format!("{}.parquet", T::TABLE))
}

/// Read one table into entity records.
///
/// Only the columns named by the entity's fields are decoded. A nullable
/// column the file lacks is skipped with a warning and decodes as a missing
/// value; a missing required column fails the read.
pub fn read_table<T: ArrowSchema>(path: &Path, batch_size: usize) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(OlympicsError::MissingTable {
            table: T::TABLE,
            path: path.to_path_buf(),
        });
    }

    log_table_start(T::TABLE, path);
    let start = Instant::now();

    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let file_schema = builder.schema().clone();
    let mut projection = Vec::new();
    for field in T::fields() {
        match file_schema.index_of(field.name()) {
            Ok(idx) => projection.push(idx),
            Err(_) => log_warning(
                &format!("Column '{}' not found in {} table", field.name(), T::TABLE),
                Some(path),
            ),
        }
    }
    let mask = ProjectionMask::roots(builder.parquet_schema(), projection);
    let reader = builder
        .with_projection(mask)
        .with_batch_size(batch_size)
        .build()?;

    let mut rows = Vec::new();
    for batch in reader {
        rows.extend(T::from_record_batch(&batch?)?);
    }

    log_table_loaded(T::TABLE, rows.len(), Some(start.elapsed()));
    Ok(rows)
}

/// Write entity records to a table file, replacing any existing file
pub fn write_table<T: ArrowSchema>(path: &Path, rows: &[T]) -> Result<()> {
    let batch = T::to_record_batch(rows)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, T::schema_ref(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// The five raw tables, before integrity checks
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub countries: Vec<Country>,
    pub olympics: Vec<Olympics>,
    pub players: Vec<Player>,
    pub events: Vec<Event>,
    pub results: Vec<EventResult>,
}

impl Tables {
    /// Read all five tables from `dir`, in parallel
    pub fn read(dir: &Path, batch_size: usize) -> Result<Self> {
        if !dir.is_dir() {
            return Err(OlympicsError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data directory does not exist: {}", dir.display()),
            )));
        }

        let (countries, (olympics, (players, (events, results)))) = rayon::join(
            || read_table::<Country>(&table_path::<Country>(dir), batch_size),
            || {
                rayon::join(
                    || read_table::<Olympics>(&table_path::<Olympics>(dir), batch_size),
                    || {
                        rayon::join(
                            || read_table::<Player>(&table_path::<Player>(dir), batch_size),
                            || {
                                rayon::join(
                                    || read_table::<Event>(&table_path::<Event>(dir), batch_size),
                                    || {
                                        read_table::<EventResult>(
                                            &table_path::<EventResult>(dir),
                                            batch_size,
                                        )
                                    },
                                )
                            },
                        )
                    },
                )
            },
        );

        Ok(Self {
            countries: countries?,
            olympics: olympics?,
            players: players?,
            events: events?,
            results: results?,
        })
    }

    /// Write all five tables into `dir`, creating it if needed
    pub fn write(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        write_table(&table_path::<Country>(dir), &self.countries)?;
        write_table(&table_path::<Olympics>(dir), &self.olympics)?;
        write_table(&table_path::<Player>(dir), &self.players)?;
        write_table(&table_path::<Event>(dir), &self.events)?;
        write_table(&table_path::<EventResult>(dir), &self.results)?;
        Ok(())
    }

    /// Validate the tables and build their snapshot
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::new(
            self.countries,
            self.olympics,
            self.players,
            self.events,
            self.results,
        )
    }
}

/// Read the five tables from `dir` and build a snapshot
pub fn load_snapshot(dir: &Path, batch_size: usize) -> Result<Snapshot> {
    let snapshot = Tables::read(dir, batch_size)?.into_snapshot();
    if !snapshot.integrity().is_clean() {
        log_warning(
            &format!(
                "Skipped {} rows that violate key or reference integrity",
                snapshot.integrity().len()
            ),
            Some(dir),
        );
    }
    Ok(snapshot)
}
