use chrono::{Duration, NaiveDate};
use rand::thread_rng;
use rand_distr::{Distribution, Uniform};

use crate::RoomNumber;
use crate::record::ReservationRecord;

// default = 1k reservations
const DEFAULT_COUNT: usize = 1 << 10;
const DEFAULT_SPAN_DAYS: u32 = 365;
const DEFAULT_ROOMS: RoomNumber = 50;

/// Dates drawn uniformly from `start..start + span_days`. Dates past the end
/// of the calendar are clamped to `NaiveDate::MAX`.
pub fn generate_dates(count: usize, start: NaiveDate, span_days: u32) -> Vec<NaiveDate> {
    let offsets = Uniform::new(0, span_days.max(1));
    let mut rng = thread_rng();

    (0..count)
        .map(|_| {
            let offset = Duration::days(offsets.sample(&mut rng) as i64);
            start.checked_add_signed(offset).unwrap_or(NaiveDate::MAX)
        })
        .collect()
}

/// Random reservations with room numbers in `0..rooms`. Keys may repeat.
pub fn generate_reservations(
    count: usize,
    start: NaiveDate,
    span_days: u32,
    rooms: RoomNumber,
) -> Vec<ReservationRecord> {
    let room_dist = Uniform::new(0, rooms.max(1));
    let mut rng = thread_rng();

    generate_dates(count, start, span_days)
        .into_iter()
        .map(|date| ReservationRecord::new(date, room_dist.sample(&mut rng)))
        .collect()
}

/// One year of bookings over 50 rooms starting 2024-01-01.
pub fn generate_smooth_reservations(count: Option<usize>) -> Vec<ReservationRecord> {
    let count = count.unwrap_or(DEFAULT_COUNT);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    generate_reservations(count, start, DEFAULT_SPAN_DAYS, DEFAULT_ROOMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_within_span() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let data = generate_dates(1000, start, 31);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&d| d >= start && d < start + Duration::days(31)));
    }

    #[test]
    fn test_reservations_room_range() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let data = generate_reservations(1000, start, 10, 4);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|r| r.room_number() < 4));
    }

    #[test]
    fn test_zero_span_collapses_to_start() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let data = generate_reservations(10, start, 0, 0);
        assert!(data.iter().all(|r| r.date() == start && r.room_number() == 0));
    }

    #[test]
    fn test_dates_clamped_at_calendar_end() {
        let start = NaiveDate::MAX - Duration::days(2);
        let data = generate_dates(500, start, 30);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|&d| d >= start && d <= NaiveDate::MAX));
    }

    #[test]
    fn test_smooth_default() {
        assert_eq!(generate_smooth_reservations(None).len(), DEFAULT_COUNT);
        assert_eq!(generate_smooth_reservations(Some(10)).len(), 10);
    }
}
