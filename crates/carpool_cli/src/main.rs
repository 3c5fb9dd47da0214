use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use carpool_core::{CarpoolError, PoolConfig, PoolMode, DEFAULT_MAX_CAPACITY};
use carpool_io::geo::DEFAULT_COUNTRY_CODE;
use carpool_io::schema::{DEFAULT_DEPARTURE_COLUMN, DEFAULT_ON_TIME_ANSWER};
use carpool_io::{render_report, run_pool, IoError, PostcodeTable, RunSettings, SurveyColumns};
use clap::Parser;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "carpool",
    about = "Assign survey passengers to the nearest driver with a free seat",
    long_about = "Reads a survey export, resolves each respondent's postcode, and places\n\
                  passengers with the nearest driver that still has a seat (and, with\n\
                  --by-departure, the same departure group)."
)]
struct Cli {
    /// Survey responses (CSV with a header row)
    #[arg(long, default_value = "form_responses.csv")]
    input: PathBuf,
    /// GeoNames postal-code dump (tab separated)
    #[arg(long, env = "CARPOOL_POSTCODES")]
    postcodes: PathBuf,
    /// Country code used to filter the postcode dump; "any" disables filtering
    #[arg(long, default_value = DEFAULT_COUNTRY_CODE)]
    country: String,
    /// Seats offered by every driver
    #[arg(long, default_value_t = DEFAULT_MAX_CAPACITY)]
    max_capacity: u32,
    /// Only pool people who leave in the same departure group
    #[arg(long)]
    by_departure: bool,
    /// Header of the departure-time question
    #[arg(long, default_value = DEFAULT_DEPARTURE_COLUMN)]
    departure_column: String,
    /// Departure answer that counts as on-time
    #[arg(long, default_value = DEFAULT_ON_TIME_ANSWER)]
    on_time_answer: String,
    /// Grouped CSV output (defaults depend on the mode)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also write the full run as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> RunSettings {
        let mode = if self.by_departure {
            PoolMode::ByDepartureTime
        } else {
            PoolMode::Base
        };
        let columns = SurveyColumns::default()
            .with_departure_column(&self.departure_column)
            .with_on_time_answer(&self.on_time_answer);

        let mut settings = RunSettings::new(&self.input)
            .with_pool(
                PoolConfig::default()
                    .with_max_capacity(self.max_capacity)
                    .with_mode(mode),
            )
            .with_columns(columns);
        if let Some(output) = &self.output {
            settings = settings.with_output_path(output);
        }
        if let Some(json) = &self.json {
            settings = settings.with_json_path(json);
        }
        settings
    }

    fn country_filter(&self) -> Option<&str> {
        if self.country.eq_ignore_ascii_case("any") {
            None
        } else {
            Some(self.country.as_str())
        }
    }
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if matches!(
            err.downcast_ref::<IoError>(),
            Some(IoError::Core(CarpoolError::NoDrivers))
        ) {
            eprintln!("No drivers available!");
        } else {
            eprintln!("error: {err:#}");
        }
        exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let resolver = PostcodeTable::from_path(&cli.postcodes, cli.country_filter())
        .with_context(|| format!("loading postcodes from {}", cli.postcodes.display()))?;

    let settings = cli.settings();
    let summary = run_pool(&settings, &resolver)?;

    print!(
        "{}",
        render_report(&summary.outcome, settings.pool.mode, &summary.output_path)
    );
    let ingest = &summary.ingest;
    if ingest.unlocated() > 0 {
        log::warn!(
            "{} of {} survey rows had no usable location and were skipped",
            ingest.unlocated(),
            ingest.rows_read
        );
    }
    if ingest.missing_name > 0 {
        log::warn!(
            "{} of {} survey rows had no name and were skipped",
            ingest.missing_name,
            ingest.rows_read
        );
    }
    Ok(())
}
