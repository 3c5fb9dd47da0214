//! End-to-end pooling run: survey in, grouped result out.
//!
//! Fatal conditions (missing columns, no drivers) stop the pipeline before any
//! output file is created.

use std::fs::File;
use std::path::PathBuf;

use carpool_core::{AssignmentEngine, MatchOutcome, PoolConfig};
use log::info;

use crate::error::Result;
use crate::export::{export_groups_to_csv, export_to_json};
use crate::geo::GeoResolver;
use crate::ingest::{build_registry, read_survey, IngestReport};
use crate::schema::SurveyColumns;

/// Everything one run needs besides the postcode resolver.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub survey_path: PathBuf,
    pub pool: PoolConfig,
    pub columns: SurveyColumns,
    /// Grouped CSV destination. Defaults to the mode's file name.
    pub output_path: Option<PathBuf>,
    /// Optional JSON export of the whole run.
    pub json_path: Option<PathBuf>,
}

impl RunSettings {
    pub fn new(survey_path: impl Into<PathBuf>) -> Self {
        Self {
            survey_path: survey_path.into(),
            pool: PoolConfig::default(),
            columns: SurveyColumns::default(),
            output_path: None,
            json_path: None,
        }
    }

    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    pub fn with_columns(mut self, columns: SurveyColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.pool.mode.output_file_name()))
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcome: MatchOutcome,
    pub ingest: IngestReport,
    pub output_path: PathBuf,
}

/// Read the survey, resolve postcodes, assign passengers and write the results.
///
/// # Errors
///
/// Fails without writing anything if a required column is missing or no driver
/// survives ingestion ([`carpool_core::CarpoolError::NoDrivers`]).
pub fn run_pool<G: GeoResolver + ?Sized>(settings: &RunSettings, resolver: &G) -> Result<RunSummary> {
    settings.pool.validate()?;

    let with_departure = settings.pool.mode.is_category_aware();
    let file = File::open(&settings.survey_path)?;
    let records = read_survey(file, &settings.columns, with_departure)?;
    let (registry, ingest) = build_registry(&records, resolver, &settings.columns.on_time_answer);

    let engine = AssignmentEngine::new(settings.pool);
    let outcome = engine.run_registry(&registry)?;

    let output_path = settings.resolved_output_path();
    export_groups_to_csv(&outcome, settings.pool.mode, &output_path)?;
    info!("wrote {} driver groups to {}", outcome.groups.len(), output_path.display());

    if let Some(json_path) = &settings.json_path {
        export_to_json(&outcome, &settings.pool, json_path)?;
        info!("wrote run summary to {}", json_path.display());
    }

    Ok(RunSummary {
        outcome,
        ingest,
        output_path,
    })
}
