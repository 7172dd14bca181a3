use chrono::NaiveDate;

use crate::RoomNumber;
use crate::config::ReservationConfig;
use crate::date::parse_date;
use crate::error::Result;
use crate::record::ReservationRecord;
use crate::reservation_index::ReservationIndex;

/// Reservation front that takes textual dates.
///
/// Dates are parsed with the configured format before they reach the index,
/// so the index itself only ever sees valid dates.
///
/// # Example
/// ```rust
/// use room_reservations::ReservationSystem;
/// let mut system = ReservationSystem::new();
/// assert!(system.insert("20-12-2023", 101).unwrap());
/// assert!(!system.check_availability("20-12-2023", 101).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct ReservationSystem {
    index: ReservationIndex,
    config: ReservationConfig,
}

impl ReservationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReservationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            index: ReservationIndex::new(),
            config,
        })
    }

    pub fn config(&self) -> &ReservationConfig {
        &self.config
    }

    pub fn index(&self) -> &ReservationIndex {
        &self.index
    }

    fn parse(&self, date: &str) -> Result<NaiveDate> {
        parse_date(date, &self.config.date_format)
    }

    pub fn insert(&mut self, date: &str, room_number: RoomNumber) -> Result<bool> {
        let date = self.parse(date)?;
        Ok(self.index.insert(date, room_number))
    }

    pub fn check_availability(&self, date: &str, room_number: RoomNumber) -> Result<bool> {
        let date = self.parse(date)?;
        Ok(self.index.check_availability(date, room_number))
    }

    pub fn cancel(&mut self, date: &str, room_number: RoomNumber) -> Result<bool> {
        let date = self.parse(date)?;
        Ok(self.index.cancel(date, room_number))
    }

    pub fn list_by_room(&self, room_number: RoomNumber) -> Vec<ReservationRecord> {
        self.index
            .list_by_room_with(room_number, self.config.resort_room_listing)
    }

    // the format was validated when the system was built
    pub fn format_record(&self, record: &ReservationRecord) -> String {
        record.display_with(&self.config.date_format).to_string()
    }
}
