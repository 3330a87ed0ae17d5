//! Visitor Aggregation Module
//! Sums visitor counts per record, per country and per arrival date, with
//! rayon for the full-dataset passes.

use crate::data::{arrival_date, BookingRecord};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// One of the three visitor-count columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorCategory {
    Adults,
    Children,
    Babies,
}

impl VisitorCategory {
    pub fn label(self) -> &'static str {
        match self {
            VisitorCategory::Adults => "Adult Visitors",
            VisitorCategory::Children => "Children Visitors",
            VisitorCategory::Babies => "Baby Visitors",
        }
    }

    fn field(self, record: &BookingRecord) -> Option<&str> {
        match self {
            VisitorCategory::Adults => record.adults.as_deref(),
            VisitorCategory::Children => record.children.as_deref(),
            VisitorCategory::Babies => record.babies.as_deref(),
        }
    }
}

/// Aggregation passes over booking records.
pub struct Aggregator;

impl Aggregator {
    fn parse_count(field: Option<&str>) -> Option<u64> {
        field?.trim().parse().ok()
    }

    /// Total visitors of one record (adults + children + babies). `None`
    /// when any of the three fields is absent or not a number; aggregates
    /// skip such records rather than poisoning a sum.
    pub fn sum_visitors(record: &BookingRecord) -> Option<u64> {
        let adults = Self::parse_count(record.adults.as_deref())?;
        let children = Self::parse_count(record.children.as_deref())?;
        let babies = Self::parse_count(record.babies.as_deref())?;
        Some(adults + children + babies)
    }

    /// Total visitors keyed by country code. Records without a country value
    /// form their own group under the empty string.
    pub fn group_by_country(records: &[BookingRecord]) -> BTreeMap<String, u64> {
        records
            .par_iter()
            .fold(BTreeMap::new, |mut acc: BTreeMap<String, u64>, record| {
                if let Some(total) = Self::sum_visitors(record) {
                    let country = record.country.clone().unwrap_or_default();
                    *acc.entry(country).or_insert(0) += total;
                }
                acc
            })
            .reduce(BTreeMap::new, |mut left, right| {
                for (country, total) in right {
                    *left.entry(country).or_insert(0) += total;
                }
                left
            })
    }

    /// Sum of a single visitor column across records. Unparsable cells
    /// contribute nothing.
    pub fn total_for(category: VisitorCategory, records: &[BookingRecord]) -> u64 {
        records
            .par_iter()
            .filter_map(|record| Self::parse_count(category.field(record)))
            .sum()
    }

    /// Per-arrival-date visitor totals, sorted by date. Records without a
    /// constructible date or a clean visitor total are skipped.
    pub fn daily_totals(records: &[BookingRecord]) -> Vec<(NaiveDate, u64)> {
        records
            .par_iter()
            .fold(BTreeMap::new, |mut acc: BTreeMap<NaiveDate, u64>, record| {
                if let (Some(date), Some(total)) =
                    (arrival_date(record), Self::sum_visitors(record))
                {
                    *acc.entry(date).or_insert(0) += total;
                }
                acc
            })
            .reduce(BTreeMap::new, |mut left, right| {
                for (date, total) in right {
                    *left.entry(date).or_insert(0) += total;
                }
                left
            })
            .into_iter()
            .collect()
    }

    /// One visitor column per record in dataset order, for the sparklines.
    pub fn category_series(category: VisitorCategory, records: &[BookingRecord]) -> Vec<u64> {
        records
            .iter()
            .filter_map(|record| Self::parse_count(category.field(record)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, adults: &str, children: &str, babies: &str) -> BookingRecord {
        BookingRecord {
            year: Some("2016".to_string()),
            month: Some("May".to_string()),
            day: Some("1".to_string()),
            country: Some(country.to_string()),
            adults: Some(adults.to_string()),
            children: Some(children.to_string()),
            babies: Some(babies.to_string()),
        }
    }

    #[test]
    fn sums_the_three_visitor_fields() {
        assert_eq!(Aggregator::sum_visitors(&record("PRT", "2", "1", "0")), Some(3));
    }

    #[test]
    fn non_numeric_field_excludes_the_record() {
        assert_eq!(Aggregator::sum_visitors(&record("PRT", "2", "NA", "0")), None);
        let mut missing = record("PRT", "2", "1", "0");
        missing.babies = None;
        assert_eq!(Aggregator::sum_visitors(&missing), None);
    }

    #[test]
    fn groups_totals_by_country() {
        let records = vec![record("PRT", "2", "0", "0"), record("PRT", "1", "0", "0")];
        let grouped = Aggregator::group_by_country(&records);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.get("PRT"), Some(&3));
    }

    #[test]
    fn missing_country_groups_under_empty_string() {
        let mut anonymous = record("PRT", "1", "1", "0");
        anonymous.country = None;
        let records = vec![anonymous, record("GBR", "2", "0", "0")];

        let grouped = Aggregator::group_by_country(&records);
        assert_eq!(grouped.get(""), Some(&2));
        assert_eq!(grouped.get("GBR"), Some(&2));
    }

    #[test]
    fn malformed_records_do_not_poison_country_totals() {
        let records = vec![record("PRT", "2", "0", "0"), record("PRT", "x", "0", "0")];
        let grouped = Aggregator::group_by_country(&records);
        assert_eq!(grouped.get("PRT"), Some(&2));
    }

    #[test]
    fn totals_a_single_category() {
        let records = vec![
            record("PRT", "2", "1", "0"),
            record("GBR", "3", "bad", "0"),
        ];
        assert_eq!(Aggregator::total_for(VisitorCategory::Adults, &records), 5);
        // the malformed children cell is skipped, not zeroed into an error
        assert_eq!(Aggregator::total_for(VisitorCategory::Children, &records), 1);
    }

    #[test]
    fn daily_totals_are_sorted_by_date() {
        let mut june = record("PRT", "1", "0", "0");
        june.month = Some("June".to_string());
        let records = vec![
            june,
            record("PRT", "2", "0", "0"),
            record("GBR", "1", "1", "0"),
        ];

        let daily = Aggregator::daily_totals(&records);
        assert_eq!(
            daily,
            vec![
                (NaiveDate::from_ymd_opt(2016, 5, 1).unwrap(), 4),
                (NaiveDate::from_ymd_opt(2016, 6, 1).unwrap(), 1),
            ]
        );
    }

    #[test]
    fn category_series_keeps_dataset_order() {
        let records = vec![
            record("PRT", "2", "1", "0"),
            record("GBR", "1", "0", "0"),
            record("ESP", "oops", "2", "0"),
        ];
        assert_eq!(
            Aggregator::category_series(VisitorCategory::Adults, &records),
            vec![2, 1]
        );
        assert_eq!(
            Aggregator::category_series(VisitorCategory::Children, &records),
            vec![1, 0, 2]
        );
    }
}
