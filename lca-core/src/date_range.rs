use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// An inclusive range of calendar days, iterated one day at a time.
///
/// Used to lay out the availability calendar from the earliest to the
/// latest day with data.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Number of days in the range, zero when the end precedes the start.
    pub fn num_days(&self) -> usize {
        let days = (self.1 - self.0).num_days() + 1;
        days.max(0) as usize
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0 <= *date && *date <= self.1
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_covers_week() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let range = DateRange(start, end);
        assert_eq!(range.num_days(), 7);
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], start);
        assert_eq!(dates[6], end);
    }

    #[test]
    fn test_date_range_crosses_leap_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = DateRange(start, end);
        assert_eq!(range.num_days(), 3);
        assert!(range.contains(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }

    #[test]
    fn test_date_range_reversed_is_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let range = DateRange(start, end);
        assert_eq!(range.num_days(), 0);
        assert_eq!(range.count(), 0);
    }
}
