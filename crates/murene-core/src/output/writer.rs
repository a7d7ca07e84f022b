//! History writers: JSON with the `B/Dm/U/D/R` keys and a per-step CSV.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use murene_events::History;
use thiserror::Error;

pub const HISTORY_FILE_NAME: &str = "history.json";
pub const SERIES_FILE_NAME: &str = "series.csv";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the full history as JSON. Non-finite values become `null`.
pub fn write_history_json(path: &Path, history: &History) -> Result<(), OutputError> {
    let json = history.to_json()?;
    fs::write(path, json)?;
    Ok(())
}

/// Write one row per step: `step,B,Dm,mean_U,D,R`
pub fn write_series_csv(path: &Path, history: &History) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "step,B,Dm,mean_U,D,R")?;
    for record in history.records() {
        writeln!(
            w,
            "{},{},{},{},{},{}",
            record.step,
            record.beauty,
            record.debt,
            record.mean_utility(),
            record.drift,
            record.reparations,
        )?;
    }

    w.flush()?;
    Ok(())
}

/// Write both files into `dir`, creating it if needed. Returns the paths.
pub fn write_run_outputs(dir: &Path, history: &History) -> Result<Vec<PathBuf>, OutputError> {
    fs::create_dir_all(dir)?;

    let json_path = dir.join(HISTORY_FILE_NAME);
    let csv_path = dir.join(SERIES_FILE_NAME);
    write_history_json(&json_path, history)?;
    write_series_csv(&csv_path, history)?;

    Ok(vec![json_path, csv_path])
}
