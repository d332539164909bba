//! `MM/YYYY` month-year values exchanged at the form boundary.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected MM/YYYY, got '{0}'")]
    Format(String),

    #[error("month {0} is out of range")]
    Month(u32),
}

/// A calendar month. Field order gives (year, month) ordering for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

impl MonthYear {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::Month(month));
        }
        Ok(Self { year, month })
    }

    /// Parses a two-digit month and four-digit year separated by `/`.
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let format_err = || DateError::Format(raw.to_string());

        let (month, year) = raw.split_once('/').ok_or_else(format_err)?;
        if month.len() != 2 || year.len() != 4 {
            return Err(format_err());
        }
        if !month.bytes().chain(year.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(format_err());
        }

        let month: u32 = month.parse().map_err(|_| format_err())?;
        let year: i32 = year.parse().map_err(|_| format_err())?;
        Self::new(year, month)
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn is_after(&self, other: &MonthYear) -> bool {
        self > other
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Source of "today" for the future-date rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(MonthYear),
}

impl Clock {
    pub fn today(&self) -> MonthYear {
        match self {
            Clock::System => MonthYear::current(),
            Clock::Fixed(month_year) => *month_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        assert_eq!(
            MonthYear::parse("03/2021").unwrap(),
            MonthYear { year: 2021, month: 3 }
        );
        assert_eq!(
            MonthYear::parse("12/1999").unwrap(),
            MonthYear { year: 1999, month: 12 }
        );
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for raw in [
            "", " 03/2021", "03/2021 ", "3/2021", "03/21", "03-2021", "ab/2021", "03/20x1",
            "03/2021/1",
        ] {
            assert!(MonthYear::parse(raw).is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn test_parse_rejects_month_out_of_range() {
        assert_eq!(MonthYear::parse("13/2021"), Err(DateError::Month(13)));
        assert_eq!(MonthYear::parse("00/2021"), Err(DateError::Month(0)));
    }

    #[test]
    fn test_ordering_is_numeric_year_then_month() {
        let a = MonthYear::parse("12/2021").unwrap();
        let b = MonthYear::parse("01/2022").unwrap();
        assert!(b.is_after(&a));
        assert!(!a.is_after(&b));
        assert!(!a.is_after(&a));

        let wide = MonthYear::parse("01/9999").unwrap();
        let narrow = MonthYear::parse("01/1000").unwrap();
        assert!(wide.is_after(&narrow));
    }

    #[test]
    fn test_fixed_clock() {
        let fixed = MonthYear::new(2024, 6).unwrap();
        assert_eq!(Clock::Fixed(fixed).today(), fixed);
    }
}
