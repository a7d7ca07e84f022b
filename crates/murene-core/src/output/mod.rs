//! Output
//!
//! Chart series, text reports and file writers for a recorded history.

pub mod report;
pub mod writer;

pub use report::{chart_series, render_report, ChartSeries, Report};
pub use writer::{
    write_history_json, write_run_outputs, write_series_csv, OutputError, HISTORY_FILE_NAME,
    SERIES_FILE_NAME,
};
