//! Employment duration derived from a work entry's start and end dates.
//!
//! Months are counted in fixed 30-day slots between the first days of the two
//! months and floored, so e.g. Jan→Mar 2021 (59 days) reads as one month.

use crate::resume::dates::{DateError, MonthYear};

const DAYS_PER_MONTH: i64 = 30;

/// Returns the human-readable span between two `MM/YYYY` dates, e.g.
/// `"1 ano e 3 meses"`. Identical or reversed dates produce an empty string.
///
/// Both inputs must be well-formed; callers only derive once both dates parse.
pub fn derive_duration(start: &str, end: &str) -> Result<String, DateError> {
    let start = MonthYear::parse(start)?;
    let end = MonthYear::parse(end)?;
    Ok(duration_between(start, end))
}

pub fn duration_between(start: MonthYear, end: MonthYear) -> String {
    let (Some(from), Some(to)) = (start.first_day(), end.first_day()) else {
        return String::new();
    };

    let days = (to - from).num_days();
    if days <= 0 {
        return String::new();
    }

    let months = days / DAYS_PER_MONTH;
    format_duration(months / 12, months % 12)
}

fn format_duration(years: i64, months: i64) -> String {
    let years_clause = match years {
        0 => None,
        1 => Some("1 ano".to_string()),
        n => Some(format!("{n} anos")),
    };
    let months_clause = match months {
        0 => None,
        1 => Some("1 mês".to_string()),
        n => Some(format!("{n} meses")),
    };

    match (years_clause, months_clause) {
        (Some(y), Some(m)) => format!("{y} e {m}"),
        (Some(y), None) => y,
        (None, Some(m)) => m,
        (None, None) => String::new(),
    }
}
