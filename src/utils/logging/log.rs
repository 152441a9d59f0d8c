//! Log lines for table loads and skipped rows

use std::path::Path;
use std::time::Duration;

use crate::snapshot::IntegrityFault;

/// Announce that a table file is about to be decoded
pub fn log_table_start(table: &str, path: &Path) {
    ::log::info!("Reading {table} table from {}", path.display());
}

/// Report a decoded table
///
/// # Arguments
/// * `table` - Table name, e.g. "results"
/// * `rows` - Records decoded from the file
/// * `elapsed` - Time spent decoding, when measured
pub fn log_table_loaded(table: &str, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => ::log::info!("Loaded {rows} {table} rows in {duration:?}"),
        None => ::log::info!("Loaded {rows} {table} rows"),
    }
}

/// Warn about a problem tied to an optional file location
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => ::log::warn!("{message}: {}", path.display()),
        None => ::log::warn!("{message}"),
    }
}

/// Log a row skipped while building a snapshot
pub fn log_integrity_fault(fault: &IntegrityFault) {
    ::log::warn!("Skipping row: {fault}");
}
