//! Logging utilities
//!
//! Consistent log lines for loading tables and for rows skipped while a
//! snapshot is built. The binary installs `env_logger`; the library only
//! emits through the `log` facade.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_integrity_fault, log_table_loaded, log_table_start, log_warning};
