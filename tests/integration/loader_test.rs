use std::fs::File;
use std::sync::Arc;

use crate::utils::{sample_tables, scratch_dir};
use arrow::array::{Float64Array, Int64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use olympic_stats::loader::{read_table, table_path, write_table};
use olympic_stats::{
    EventResult, Medal, OlympicsError, ReportConfig, Tables, load_snapshot, run_all,
};
use parquet::arrow::ArrowWriter;

/// Write the fixture to Parquet and read it back through the loader
#[test]
fn test_parquet_round_trip() -> olympic_stats::Result<()> {
    let dir = scratch_dir("round-trip");
    let tables = sample_tables();
    tables.write(&dir)?;

    for table in ["countries", "olympics", "players", "events", "results"] {
        assert!(dir.join(format!("{table}.parquet")).is_file());
    }

    let loaded = Tables::read(&dir, 4)?;
    assert_eq!(loaded.countries, tables.countries);
    assert_eq!(loaded.olympics, tables.olympics);
    assert_eq!(loaded.players, tables.players);
    assert_eq!(loaded.events, tables.events);
    assert_eq!(loaded.results, tables.results);

    let config = ReportConfig::default();
    let from_disk = run_all(&load_snapshot(&dir, 4)?, &config);
    let in_memory = run_all(&tables.into_snapshot(), &config);
    assert_eq!(from_disk, in_memory);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_missing_table_is_reported() -> olympic_stats::Result<()> {
    let dir = scratch_dir("missing-table");
    let mut tables = sample_tables();
    tables.write(&dir)?;
    std::fs::remove_file(table_path::<EventResult>(&dir))?;

    match Tables::read(&dir, 1024) {
        Err(OlympicsError::MissingTable { table, path }) => {
            assert_eq!(table, "results");
            assert!(path.ends_with("results.parquet"));
        }
        other => panic!("expected a missing table error, got {other:?}"),
    }

    // Restoring the file makes the directory readable again
    tables.results.truncate(1);
    write_table(&table_path::<EventResult>(&dir), &tables.results)?;
    assert_eq!(Tables::read(&dir, 1024)?.results.len(), 1);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_missing_data_dir() {
    let dir = std::env::temp_dir().join("olympic-stats-does-not-exist");
    assert!(matches!(
        load_snapshot(&dir, 1024),
        Err(OlympicsError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound
    ));
}

/// Medal labels are matched leniently and extra columns are ignored
#[test]
fn test_read_results_with_raw_labels() -> olympic_stats::Result<()> {
    let dir = scratch_dir("raw-labels");
    let path = dir.join("results.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("event_id", DataType::Int64, false),
        Field::new("player_id", DataType::Int64, false),
        Field::new("medal", DataType::Utf8, true),
        Field::new("result", DataType::Float64, true),
        Field::new("notes", DataType::Utf8, true),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![1, 1, 1, 1])),
            Arc::new(Int64Array::from(vec![10, 11, 12, 13])),
            Arc::new(StringArray::from(vec![
                Some("GOLD"),
                Some(" gold "),
                Some("PLATINUM"),
                None,
            ])),
            Arc::new(Float64Array::from(vec![Some(9.87), None, None, Some(10.5)])),
            Arc::new(StringArray::from(vec![None, Some("tie"), None, None])),
        ],
    )?;

    let mut writer = ArrowWriter::try_new(File::create(&path)?, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    let results: Vec<EventResult> = read_table(&path, 2)?;
    let medals: Vec<Option<Medal>> = results.iter().map(|result| result.medal).collect();
    assert_eq!(medals, vec![Some(Medal::Gold), Some(Medal::Gold), None, None]);
    assert_eq!(results[0].result, Some(9.87));
    assert_eq!(results[1].result, None);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

/// A results file without medal or result columns still loads
#[test]
fn test_read_results_without_optional_columns() -> olympic_stats::Result<()> {
    let dir = scratch_dir("key-columns-only");
    let path = dir.join("results.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("event_id", DataType::Int64, false),
        Field::new("player_id", DataType::Int64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![7, 7])),
            Arc::new(Int64Array::from(vec![1, 2])),
        ],
    )?;

    let mut writer = ArrowWriter::try_new(File::create(&path)?, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    let results: Vec<EventResult> = read_table(&path, 1024)?;
    assert_eq!(
        results,
        vec![EventResult::new(7, 1), EventResult::new(7, 2)]
    );
    assert!(results.iter().all(|result| result.medal.is_none()));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
