//! Date Filter Module
//! Builds arrival dates from the three date-part columns and filters records
//! by an inclusive date range.

use crate::data::BookingRecord;
use chrono::{Month, NaiveDate};

/// Inclusive [start, end] arrival-date filter. The bounds are edited
/// independently; a start after the end simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Arrival date of a record, when one can be built from its date parts.
/// A missing, non-parsable or impossible part yields `None`, which excludes
/// the record from every range.
pub fn arrival_date(record: &BookingRecord) -> Option<NaiveDate> {
    let year: i32 = record.year.as_deref()?.trim().parse().ok()?;
    let month = parse_month(record.month.as_deref()?)?;
    let day: u32 = record.day.as_deref()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month number from either a numeric cell ("7") or an English month name
/// ("July"); the source data mixes both forms.
fn parse_month(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    text.parse::<Month>().ok().map(|m| m.number_from_month())
}

/// Records whose arrival date falls inside `range`. Records without a
/// constructible arrival date are silently dropped; the source slice is
/// never mutated.
pub fn filter_by_range(records: &[BookingRecord], range: DateRange) -> Vec<BookingRecord> {
    records
        .iter()
        .filter(|record| arrival_date(record).is_some_and(|date| range.contains(date)))
        .cloned()
        .collect()
}
