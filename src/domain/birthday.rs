//! Birthday tracking for a single contact.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

/// Format accepted by [`BirthdayTracker::add_date`], e.g. `01.01.2000`.
pub const INPUT_FORMAT: &str = "%d.%m.%Y";

/// Day and month of one or two digits, unsigned four-digit year.
static INPUT_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").unwrap());

/// Format used when rendering or saving dates, e.g. `01-01-2000`.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Outcome of adding a date to a [`BirthdayTracker`].
///
/// These are soft conditions: none of them is an error that should abort a
/// bulk operation, so they are returned as values.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    /// The date was stored
    Added,
    /// The text was not a valid `DD.MM.YYYY` date; nothing was stored
    InvalidFormat,
    /// The date was already stored; nothing changed
    AlreadyExists,
}

impl DateStatus {
    pub fn is_added(self) -> bool {
        self == Self::Added
    }
}

impl fmt::Display for DateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "Date added"),
            Self::InvalidFormat => write!(
                f,
                "Invalid date format. Example: day.month.year(01.01.2000)"
            ),
            Self::AlreadyExists => write!(f, "Date already exists"),
        }
    }
}

/// A set of distinct birthday dates with next-anniversary lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayTracker {
    dates: BTreeSet<NaiveDate>,
}

impl BirthdayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` as `DD.MM.YYYY` and store it.
    ///
    /// The year must be exactly four digits with no sign.
    pub fn add_date(&mut self, text: &str) -> DateStatus {
        if !INPUT_SHAPE.is_match(text) {
            return DateStatus::InvalidFormat;
        }

        match NaiveDate::parse_from_str(text, INPUT_FORMAT) {
            Ok(date) => self.insert(date),
            Err(_) => DateStatus::InvalidFormat,
        }
    }

    fn insert(&mut self, date: NaiveDate) -> DateStatus {
        if self.dates.insert(date) {
            DateStatus::Added
        } else {
            DateStatus::AlreadyExists
        }
    }

    /// Remove a stored date. Returns `false` if it was not stored.
    pub fn remove(&mut self, date: &NaiveDate) -> bool {
        self.dates.remove(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    /// Stored dates in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Render all dates as `DD-MM-YYYY`, joined by `", "`.
    pub fn format_dates(&self) -> String {
        self.dates
            .iter()
            .map(|date| date.format(DISPLAY_FORMAT).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Days from the local date until the nearest upcoming anniversary.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the nearest upcoming anniversary of any stored
    /// date, or `None` when no dates are stored.
    ///
    /// An anniversary falling on `today` counts as zero days away.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.dates
            .iter()
            .map(|date| {
                let this_year = anniversary_in(*date, today.year());
                if this_year < today {
                    anniversary_in(*date, today.year() + 1)
                } else {
                    this_year
                }
            })
            .min()
            .map(|next| (next - today).num_days())
    }
}

/// The anniversary of `date` in `year`.
///
/// February 29 falls on February 28 in non-leap years.
fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_add_date() {
        let mut tracker = BirthdayTracker::new();
        assert_eq!(tracker.add_date("01.01.2000"), DateStatus::Added);
        assert!(tracker.contains(&ymd(2000, 1, 1)));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_add_duplicate_date() {
        let mut tracker = BirthdayTracker::new();
        assert!(tracker.add_date("01.01.2000").is_added());
        assert_eq!(tracker.add_date("01.01.2000"), DateStatus::AlreadyExists);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_add_invalid_date() {
        let mut tracker = BirthdayTracker::new();
        assert_eq!(tracker.add_date("31.13.2020"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date("30.02.2020"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date("2020-01-01"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date(""), DateStatus::InvalidFormat);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_add_date_requires_four_digit_year() {
        let mut tracker = BirthdayTracker::new();
        assert_eq!(tracker.add_date("01.01.99"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date("01.01.+2000"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date("01.01.-500"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date("01.01.20000"), DateStatus::InvalidFormat);
        assert_eq!(tracker.add_date(" 01.01.2000"), DateStatus::InvalidFormat);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_add_date_short_day_and_month() {
        let mut tracker = BirthdayTracker::new();
        assert_eq!(tracker.add_date("1.2.1990"), DateStatus::Added);
        assert_eq!(tracker.add_date("01.02.1990"), DateStatus::AlreadyExists);
        assert_eq!(tracker.add_date("01.01.0099"), DateStatus::Added);
        assert_eq!(tracker.format_dates(), "01-01-0099, 01-02-1990");
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            DateStatus::InvalidFormat.to_string(),
            "Invalid date format. Example: day.month.year(01.01.2000)"
        );
        assert_eq!(DateStatus::AlreadyExists.to_string(), "Date already exists");
    }

    #[test]
    fn test_days_to_next_birthday_empty() {
        let tracker = BirthdayTracker::new();
        assert_eq!(tracker.days_to_next_birthday_from(ymd(2024, 6, 1)), None);
        assert_eq!(tracker.days_to_next_birthday(), None);
    }

    #[test]
    fn test_days_rolls_to_next_year() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("15.02.1990");
        let today = ymd(2024, 6, 1);
        let expected = (ymd(2025, 2, 15) - today).num_days();
        assert_eq!(tracker.days_to_next_birthday_from(today), Some(expected));
        assert_eq!(expected, 259);
    }

    #[test]
    fn test_days_later_this_year() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("01.12.1990");
        assert_eq!(tracker.days_to_next_birthday_from(ymd(2024, 6, 1)), Some(183));
    }

    #[test]
    fn test_days_on_the_day() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("01.06.1990");
        assert_eq!(tracker.days_to_next_birthday_from(ymd(2024, 6, 1)), Some(0));
    }

    #[test]
    fn test_days_takes_nearest_date() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("15.02.1990");
        let _ = tracker.add_date("01.12.1990");
        let _ = tracker.add_date("10.06.1985");
        assert_eq!(tracker.days_to_next_birthday_from(ymd(2024, 6, 1)), Some(9));
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("29.02.2000");

        // Falls on Feb 28 in 2025
        assert_eq!(tracker.days_to_next_birthday_from(ymd(2025, 1, 10)), Some(49));
        // Stays Feb 29 in a leap year
        assert_eq!(tracker.days_to_next_birthday_from(ymd(2024, 2, 28)), Some(1));
        // Passed in 2025, next is Feb 28 2026
        let today = ymd(2025, 3, 1);
        let expected = (ymd(2026, 2, 28) - today).num_days();
        assert_eq!(tracker.days_to_next_birthday_from(today), Some(expected));
    }

    #[test]
    fn test_format_dates_sorted() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("15.02.1990");
        let _ = tracker.add_date("01.01.1980");
        assert_eq!(tracker.format_dates(), "01-01-1980, 15-02-1990");
    }

    #[test]
    fn test_remove_date() {
        let mut tracker = BirthdayTracker::new();
        let _ = tracker.add_date("15.02.1990");
        assert!(tracker.remove(&ymd(1990, 2, 15)));
        assert!(!tracker.remove(&ymd(1990, 2, 15)));
        assert!(tracker.is_empty());
    }
}
