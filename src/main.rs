use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::{info, warn};
use olympic_stats::{ReportConfig, load_snapshot, run_all};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ReportConfig::from_env().context("Invalid configuration")?;
    if let Some(dir) = std::env::args_os().nth(1) {
        config.data_dir = PathBuf::from(dir);
    }

    info!("Loading tables from: {}", config.data_dir.display());
    let start = Instant::now();
    let snapshot = load_snapshot(&config.data_dir, config.batch_size).with_context(|| {
        format!("Failed to load tables from {}", config.data_dir.display())
    })?;
    info!("Snapshot ready in {:?}", start.elapsed());

    if !snapshot.integrity().is_clean() {
        warn!(
            "{} rows were skipped; reports cover the remaining rows only",
            snapshot.integrity().len()
        );
    }

    let bundle = run_all(&snapshot, &config);
    println!(
        "{}",
        serde_json::to_string_pretty(&bundle).context("Failed to serialize reports")?
    );
    Ok(())
}
