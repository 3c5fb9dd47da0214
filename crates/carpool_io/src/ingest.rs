//! Survey rows to a resolved [`PersonRegistry`].

use std::io::Read;
use std::sync::OnceLock;

use carpool_core::{Category, Person, PersonRegistry};
use log::{info, warn};
use regex::Regex;

use crate::error::Result;
use crate::geo::GeoResolver;
use crate::schema::{SurveyColumns, SurveySchema};

/// One survey response with only the fields pooling needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    pub name: String,
    /// Free-text location answer, expected to contain a 4-digit postcode.
    pub location: String,
    pub is_driver: bool,
    /// Present only when the survey was read for a departure-aware run.
    pub departure: Option<String>,
}

/// Counts of rows that never reached the matching pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub rows_read: usize,
    pub missing_name: usize,
    pub missing_postcode: usize,
    pub unresolved_postcode: usize,
}

impl IngestReport {
    pub fn dropped(&self) -> usize {
        self.missing_name + self.unlocated()
    }

    /// Rows with a name whose location never resolved to coordinates.
    pub fn unlocated(&self) -> usize {
        self.missing_postcode + self.unresolved_postcode
    }
}

fn postcode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{4})").expect("postcode pattern is valid"))
}

/// First run of four digits in `text`, e.g. `"Carlton 3053"` -> `"3053"`.
pub fn extract_postcode(text: &str) -> Option<&str> {
    postcode_pattern().find(text).map(|m| m.as_str())
}

/// Trimmed, case-insensitive "yes" marks a driver.
pub fn is_driver_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Read survey rows, resolving the header schema first.
///
/// `with_departure` additionally requires and reads the departure column.
pub fn read_survey<R: Read>(
    reader: R,
    columns: &SurveyColumns,
    with_departure: bool,
) -> Result<Vec<SurveyRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let schema = SurveySchema::resolve(rdr.headers()?.iter(), columns, with_departure)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();
        records.push(SurveyRecord {
            name: field(schema.name).trim().to_string(),
            location: field(schema.location),
            is_driver: is_driver_answer(&field(schema.driver)),
            departure: schema.departure.map(field),
        });
    }
    info!("read {} survey rows", records.len());
    Ok(records)
}

/// Geocode records and collect them into a registry.
///
/// Records without a name are skipped. Records without a postcode, or with a
/// postcode the resolver does not know, enter the registry unresolved, which
/// keeps them out of matching and lists them in `PersonRegistry::unresolved`.
/// All three cases are counted in the returned report. Departure
/// answers are classified against `on_time_answer` when present.
pub fn build_registry<G: GeoResolver + ?Sized>(
    records: &[SurveyRecord],
    resolver: &G,
    on_time_answer: &str,
) -> (PersonRegistry, IngestReport) {
    let mut report = IngestReport {
        rows_read: records.len(),
        ..Default::default()
    };
    let mut registry = PersonRegistry::new();

    for record in records {
        if record.name.is_empty() {
            warn!("skipping survey row without a name");
            report.missing_name += 1;
            continue;
        }
        let coordinates = match extract_postcode(&record.location) {
            Some(postcode) => {
                let coordinates = resolver.resolve(postcode);
                if coordinates.is_none() {
                    warn!("{}: postcode {postcode} not found", record.name);
                    report.unresolved_postcode += 1;
                }
                coordinates
            }
            None => {
                warn!("{}: no postcode in {:?}", record.name, record.location);
                report.missing_postcode += 1;
                None
            }
        };

        let mut person = Person::new(record.name.clone(), coordinates, record.is_driver);
        if let Some(answer) = &record.departure {
            person = person.with_category(Category::from_answer(answer, on_time_answer));
        }
        registry.insert(person);
    }

    info!(
        "{} drivers, {} passengers resolved; {} rows dropped",
        registry.drivers().len(),
        registry.passengers().len(),
        report.dropped()
    );
    (registry, report)
}
