//! Postcode to coordinate resolution.
//!
//! Resolution happens once per person during ingestion, never inside the
//! matching pass. [`PostcodeTable`] reads a GeoNames postal-code dump; the
//! smaller [`StaticResolver`] serves tests and embedded lookups.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use carpool_core::Coordinates;
use log::{debug, info};

use crate::error::{IoError, Result};

/// Country filter applied to GeoNames dumps unless configured otherwise.
pub const DEFAULT_COUNTRY_CODE: &str = "AU";

// GeoNames postal-code columns (tab separated, no header).
const COUNTRY_FIELD: usize = 0;
const POSTCODE_FIELD: usize = 1;
const LATITUDE_FIELD: usize = 9;
const LONGITUDE_FIELD: usize = 10;

/// Maps a postal code to coordinates, or `None` when it is unknown.
pub trait GeoResolver {
    fn resolve(&self, postcode: &str) -> Option<Coordinates>;
}

/// In-memory resolver built from explicit postcode/coordinate pairs.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, Coordinates>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, postcode: impl Into<String>, coordinates: Coordinates) -> Self {
        self.entries.insert(postcode.into(), coordinates);
        self
    }
}

impl GeoResolver for StaticResolver {
    fn resolve(&self, postcode: &str) -> Option<Coordinates> {
        self.entries.get(postcode.trim()).copied()
    }
}

/// Postcode lookup table loaded from a GeoNames postal-code file.
///
/// When a postcode appears on several rows (one per locality), the first row wins.
#[derive(Debug, Clone, Default)]
pub struct PostcodeTable {
    entries: HashMap<String, Coordinates>,
}

impl PostcodeTable {
    pub fn from_path(path: impl AsRef<Path>, country_code: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file, country_code)?;
        info!(
            "loaded {} postcodes from {}",
            table.entries.len(),
            path.display()
        );
        Ok(table)
    }

    /// Read a GeoNames dump, keeping only rows for `country_code` when given.
    ///
    /// Rows whose coordinates do not parse, are not finite, or fall outside valid
    /// latitude/longitude ranges are skipped.
    ///
    /// # Errors
    ///
    /// CSV read failures, or [`IoError::InvalidPostcodeTable`] if no usable row
    /// remains.
    pub fn from_reader<R: Read>(reader: R, country_code: Option<&str>) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for record in rdr.records() {
            let record = record?;
            if let Some(country) = country_code {
                if !record
                    .get(COUNTRY_FIELD)
                    .is_some_and(|c| c.trim().eq_ignore_ascii_case(country))
                {
                    continue;
                }
            }
            let Some(postcode) = record.get(POSTCODE_FIELD).map(str::trim) else {
                continue;
            };
            let lat = record.get(LATITUDE_FIELD).and_then(|v| v.trim().parse::<f64>().ok());
            let lng = record.get(LONGITUDE_FIELD).and_then(|v| v.trim().parse::<f64>().ok());
            let coordinates = lat.zip(lng).and_then(|(lat, lng)| Coordinates::checked(lat, lng));
            match coordinates {
                Some(coordinates) if !postcode.is_empty() => {
                    entries.entry(postcode.to_string()).or_insert(coordinates);
                }
                _ => debug!("skipping postcode row {:?}", record.position()),
            }
        }

        if entries.is_empty() {
            return Err(IoError::InvalidPostcodeTable(match country_code {
                Some(country) => format!("no usable rows for country {country}"),
                None => "no usable rows".to_string(),
            }));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GeoResolver for PostcodeTable {
    fn resolve(&self, postcode: &str) -> Option<Coordinates> {
        self.entries.get(postcode.trim()).copied()
    }
}
