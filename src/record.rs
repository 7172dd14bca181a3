use std::fmt;

use chrono::NaiveDate;

use crate::RoomNumber;
use crate::date::DEFAULT_DATE_FORMAT;

/// A single reservation, keyed by (date, room_number).
///
/// Field order matters: the derived `Ord` compares `date` first and falls back
/// to `room_number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationRecord {
    date: NaiveDate,
    room_number: RoomNumber,
}

impl ReservationRecord {
    pub fn new(date: NaiveDate, room_number: RoomNumber) -> Self {
        Self { date, room_number }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn key(&self) -> (NaiveDate, RoomNumber) {
        (self.date, self.room_number)
    }

    pub(crate) fn matches(&self, date: NaiveDate, room_number: RoomNumber) -> bool {
        self.date == date && self.room_number == room_number
    }

    // overwritten in place when a two-child node takes its successor's key
    pub(crate) fn overwrite_with(&mut self, other: &ReservationRecord) {
        self.date = other.date;
        self.room_number = other.room_number;
    }
}

impl ReservationRecord {
    /// Render with a custom date format. The format must be able to render a
    /// bare date, otherwise formatting fails with `fmt::Error`.
    pub fn display_with<'a>(&'a self, date_format: &'a str) -> RecordDisplay<'a> {
        RecordDisplay {
            record: self,
            date_format,
        }
    }
}

pub struct RecordDisplay<'a> {
    record: &'a ReservationRecord,
    date_format: &'a str,
}

impl fmt::Display for RecordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation room {}, date {}",
            self.record.room_number,
            self.record.date.format(self.date_format)
        )
    }
}

impl fmt::Display for ReservationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(DEFAULT_DATE_FORMAT), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordering_date_first() {
        let early_high_room = ReservationRecord::new(date(2023, 12, 20), 999);
        let late_low_room = ReservationRecord::new(date(2023, 12, 21), 1);
        assert_eq!(early_high_room.cmp(&late_low_room), Ordering::Less);
    }

    #[test]
    fn test_ordering_room_tiebreak() {
        let a = ReservationRecord::new(date(2023, 12, 20), 101);
        let b = ReservationRecord::new(date(2023, 12, 20), 102);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(a.key(), (date(2023, 12, 20), 101));
    }

    #[test]
    fn test_matches_and_overwrite() {
        let mut a = ReservationRecord::new(date(2023, 12, 20), 101);
        let b = ReservationRecord::new(date(2023, 12, 30), 102);
        assert!(a.matches(date(2023, 12, 20), 101));
        assert!(!a.matches(date(2023, 12, 20), 102));

        a.overwrite_with(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let record = ReservationRecord::new(date(2023, 12, 20), 101);
        assert_eq!(record.to_string(), "Reservation room 101, date 20-12-2023");
        assert_eq!(
            record.display_with("%Y-%m-%d").to_string(),
            "Reservation room 101, date 2023-12-20"
        );
    }

    #[test]
    fn test_display_with_bad_format_is_fmt_error() {
        use std::fmt::Write;

        let record = ReservationRecord::new(date(2023, 12, 20), 101);
        let mut out = String::new();
        assert!(write!(&mut out, "{}", record.display_with("%H:%M")).is_err());
    }
}
