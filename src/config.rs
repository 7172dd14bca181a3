//! Configuration for the text-facing reservation system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{DEFAULT_DATE_FORMAT, check_format, format_date, parse_date};
use crate::error::{ReservationError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationConfig {
    /// chrono format string used to read and render dates.
    pub date_format: String,
    /// Re-sort room listings by date after the tree walk.
    pub resort_room_listing: bool,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            resort_room_listing: true,
        }
    }
}

impl ReservationConfig {
    /// A format is usable only if a rendered date parses back to itself.
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(ReservationError::InvalidConfig(
                "date_format must not be empty".to_string(),
            ));
        }

        check_format(&self.date_format)?;

        let sample = NaiveDate::from_ymd_opt(2023, 12, 20)
            .ok_or_else(|| ReservationError::InvalidConfig("sample date".to_string()))?;
        let rendered = format_date(sample, &self.date_format)?;
        match parse_date(&rendered, &self.date_format) {
            Ok(parsed) if parsed == sample => Ok(()),
            _ => Err(ReservationError::InvalidConfig(format!(
                "date_format {:?} does not round-trip a full date",
                self.date_format
            ))),
        }
    }
}
