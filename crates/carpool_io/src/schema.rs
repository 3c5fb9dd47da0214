//! Resolution of survey headers to logical fields.
//!
//! Survey exports carry long free-text question headers with stray whitespace.
//! Headers are matched once, up front, producing fixed column indices that the
//! row reader uses from then on.

use crate::error::{IoError, Result};

pub const DEFAULT_NAME_COLUMN: &str = "Full Name";
pub const DEFAULT_LOCATION_COLUMN: &str = "What's your suburb and postcode?";
pub const DEFAULT_DRIVER_COLUMN: &str = "Do you have access to a car and would drive for road trip? (Drivers get bed priorities and won't be included for fuel split)";
pub const DEFAULT_DEPARTURE_COLUMN: &str = "What time can you leave";
/// Departure answer that classifies a person as on-time.
pub const DEFAULT_ON_TIME_ANSWER: &str = "Friday after work";

/// Header names for each logical survey field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyColumns {
    pub name: String,
    pub location: String,
    pub driver: String,
    /// Matched case-insensitively, with or without a trailing `?`.
    pub departure: String,
    pub on_time_answer: String,
}

impl Default for SurveyColumns {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_COLUMN.to_string(),
            location: DEFAULT_LOCATION_COLUMN.to_string(),
            driver: DEFAULT_DRIVER_COLUMN.to_string(),
            departure: DEFAULT_DEPARTURE_COLUMN.to_string(),
            on_time_answer: DEFAULT_ON_TIME_ANSWER.to_string(),
        }
    }
}

impl SurveyColumns {
    pub fn with_departure_column(mut self, column: impl Into<String>) -> Self {
        self.departure = column.into();
        self
    }

    pub fn with_on_time_answer(mut self, answer: impl Into<String>) -> Self {
        self.on_time_answer = answer.into();
        self
    }
}

/// Column indices for one survey file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveySchema {
    pub name: usize,
    pub location: usize,
    pub driver: usize,
    /// Only resolved for departure-aware runs.
    pub departure: Option<usize>,
}

impl SurveySchema {
    /// Match `headers` against `columns`.
    ///
    /// # Errors
    ///
    /// [`IoError::MissingColumn`] naming the missing field and every available
    /// (trimmed) header.
    pub fn resolve<'a, I>(headers: I, columns: &SurveyColumns, with_departure: bool) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let trimmed: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();

        let exact = |wanted: &str| -> Result<usize> {
            let wanted = wanted.trim();
            trimmed
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| missing(wanted, &trimmed))
        };

        let name = exact(&columns.name)?;
        let location = exact(&columns.location)?;
        let driver = exact(&columns.driver)?;

        let departure = if with_departure {
            let wanted = normalize_question(&columns.departure);
            let idx = trimmed
                .iter()
                .position(|h| normalize_question(h) == wanted)
                .ok_or_else(|| missing(columns.departure.trim(), &trimmed))?;
            Some(idx)
        } else {
            None
        };

        Ok(Self {
            name,
            location,
            driver,
            departure,
        })
    }
}

fn normalize_question(header: &str) -> String {
    let header = header.trim();
    header
        .strip_suffix('?')
        .unwrap_or(header)
        .trim_end()
        .to_lowercase()
}

fn missing(column: &str, available: &[String]) -> IoError {
    IoError::MissingColumn {
        column: column.to_string(),
        available: available.to_vec(),
    }
}
