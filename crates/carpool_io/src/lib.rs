//! Survey ingestion, postcode resolution and result export for carpool pooling.
//!
//! This crate is the plumbing around `carpool_core`: it turns a survey CSV into a
//! [`PersonRegistry`](carpool_core::PersonRegistry), runs the assignment pass, and
//! writes the grouped result.
//!
//! # Architecture
//!
//! - [`schema`]: one-time resolution of survey headers to logical fields
//! - [`ingest`]: survey rows, postcode extraction and registry building
//! - [`geo`]: the `GeoResolver` seam and a GeoNames postcode table
//! - [`export`]: CSV and JSON export plus the console report
//! - [`runner`]: the end-to-end pipeline used by the CLI

pub mod error;
pub mod export;
pub mod geo;
pub mod ingest;
pub mod runner;
pub mod schema;

pub use error::IoError;
pub use export::{export_groups_to_csv, export_to_json, render_report};
pub use geo::{GeoResolver, PostcodeTable, StaticResolver};
pub use ingest::{build_registry, extract_postcode, read_survey, IngestReport, SurveyRecord};
pub use runner::{run_pool, RunSettings, RunSummary};
pub use schema::{SurveyColumns, SurveySchema};
