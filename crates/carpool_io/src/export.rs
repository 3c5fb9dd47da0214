//! Result export and reporting.
//!
//! The grouped result is persisted as CSV (one row per driver); the whole run
//! can additionally be written as JSON. [`render_report`] builds the console
//! summary printed after a run.

use std::path::Path;

use carpool_core::{MatchOutcome, PoolConfig, PoolMode};

use crate::error::Result;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/report.rs"]
mod report;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Write one row per driver: driver, category (departure mode only), passengers, count.
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails.
pub fn export_groups_to_csv(
    outcome: &MatchOutcome,
    mode: PoolMode,
    path: impl AsRef<Path>,
) -> Result<()> {
    let file = writer_utils::create_output_file(path)?;
    csv::export_groups_impl(outcome, mode, file)
}

/// Write the full run (configuration, assignments, unassigned, groups) as JSON.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    outcome: &MatchOutcome,
    config: &PoolConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(outcome, config, file)
}

/// Console report: success line naming `output_path`, the grouped table, and
/// any unassigned passengers.
pub fn render_report(outcome: &MatchOutcome, mode: PoolMode, output_path: &Path) -> String {
    report::render(outcome, mode, output_path)
}
