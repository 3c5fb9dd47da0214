use carpool_core::{Category, MatchOutcome, PoolConfig, PoolMode, Unassigned};
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct RunExport<'a> {
    mode: &'static str,
    max_capacity: u32,
    total_distance_km: f64,
    assignments: Vec<AssignmentRow<'a>>,
    unassigned: &'a [Unassigned],
    groups: Vec<GroupRow<'a>>,
}

#[derive(Serialize)]
struct AssignmentRow<'a> {
    passenger: &'a str,
    driver: &'a str,
    category: Option<Category>,
    distance_km: f64,
}

#[derive(Serialize)]
struct GroupRow<'a> {
    driver: &'a str,
    category: Option<Category>,
    passengers: String,
    passenger_count: usize,
}

fn mode_label(mode: PoolMode) -> &'static str {
    match mode {
        PoolMode::Base => "base",
        PoolMode::ByDepartureTime => "by-departure-time",
    }
}

pub(crate) fn export_to_json_impl(
    outcome: &MatchOutcome,
    config: &PoolConfig,
    file: std::fs::File,
) -> Result<()> {
    let export = RunExport {
        mode: mode_label(config.mode),
        max_capacity: config.max_capacity,
        total_distance_km: carpool_core::spatial::round_to_tenth(outcome.total_distance_km()),
        assignments: outcome
            .assignments
            .iter()
            .map(|a| AssignmentRow {
                passenger: &a.passenger,
                driver: &a.driver,
                category: a.category,
                distance_km: a.rounded_distance_km(),
            })
            .collect(),
        unassigned: &outcome.unassigned,
        groups: outcome
            .groups
            .iter()
            .map(|g| GroupRow {
                driver: &g.driver,
                category: g.category,
                passengers: g.passengers_label(),
                passenger_count: g.passenger_count(),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
