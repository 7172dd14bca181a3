use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use crate::error::{ReservationError, Result};

/// day-month-year, e.g. `20-12-2023`
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a textual date into a comparable calendar date.
///
/// # Arguments
/// * `text` - Date text, surrounding whitespace is ignored
/// * `format` - chrono format string, see [`DEFAULT_DATE_FORMAT`]
pub fn parse_date(text: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).map_err(|source| {
        log::warn!("rejected malformed date {:?} (format {:?})", text, format);
        ReservationError::MalformedDate {
            input: text.to_string(),
            source,
        }
    })
}

/// Reject format strings chrono cannot parse, e.g. an unknown `%Q`.
pub fn check_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ReservationError::InvalidConfig(format!(
            "date_format {:?} has an invalid specifier",
            format
        )));
    }
    Ok(())
}

/// Render a date. Fails on specifiers a bare date cannot fill, such as `%H`.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    check_format(format)?;
    let mut out = String::new();
    write!(&mut out, "{}", date.format(format)).map_err(|_| {
        ReservationError::InvalidConfig(format!(
            "date_format {:?} cannot render a calendar date",
            format
        ))
    })?;
    Ok(out)
}
