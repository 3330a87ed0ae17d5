//! CSV Data Loader Module
//! Handles CSV file loading and record extraction using Polars.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Columns consumed from the booking CSV. Extra columns are ignored.
pub const YEAR_COL: &str = "arrival_date_year";
pub const MONTH_COL: &str = "arrival_date_month";
pub const DAY_COL: &str = "arrival_date_day_of_month";
pub const COUNTRY_COL: &str = "country";
pub const ADULTS_COL: &str = "adults";
pub const CHILDREN_COL: &str = "children";
pub const BABIES_COL: &str = "babies";

/// One booking row. Fields hold the raw cell text; an absent column or null
/// cell becomes `None`. Immutable once loaded, identity is positional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRecord {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub country: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub babies: Option<String>,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Read a CSV treating the first row as headers and every cell as text.
    pub fn read_dataframe(file_path: &str) -> Result<DataFrame, LoaderError> {
        // infer_schema_length 0 keeps all columns as strings, so malformed
        // numeric cells survive to the aggregation layer unchanged
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Extract booking records from a loaded DataFrame, in row order.
    pub fn extract_records(df: &DataFrame) -> Vec<BookingRecord> {
        let height = df.height();
        let year = Self::column_text(df, YEAR_COL, height);
        let month = Self::column_text(df, MONTH_COL, height);
        let day = Self::column_text(df, DAY_COL, height);
        let country = Self::column_text(df, COUNTRY_COL, height);
        let adults = Self::column_text(df, ADULTS_COL, height);
        let children = Self::column_text(df, CHILDREN_COL, height);
        let babies = Self::column_text(df, BABIES_COL, height);

        (0..height)
            .map(|i| BookingRecord {
                year: year[i].clone(),
                month: month[i].clone(),
                day: day[i].clone(),
                country: country[i].clone(),
                adults: adults[i].clone(),
                children: children[i].clone(),
                babies: babies[i].clone(),
            })
            .collect()
    }

    /// Load a CSV and return its records directly.
    pub fn load_records(file_path: &str) -> Result<Vec<BookingRecord>, LoaderError> {
        let df = Self::read_dataframe(file_path)?;
        Ok(Self::extract_records(&df))
    }

    /// Cell values of one column as text. A column missing from the header
    /// yields `None` for every row rather than an error.
    fn column_text(df: &DataFrame, name: &str, height: usize) -> Vec<Option<String>> {
        let Ok(col) = df.column(name) else {
            return vec![None; height];
        };

        let series = col.as_materialized_series();
        (0..height)
            .map(|i| match series.get(i) {
                Ok(val) if !val.is_null() => {
                    Some(val.to_string().trim_matches('"').to_string())
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn extracts_consumed_columns() {
        let path = write_temp_csv(
            "bookings_basic.csv",
            "arrival_date_year,arrival_date_month,arrival_date_day_of_month,country,adults,children,babies\n\
             2016,July,1,PRT,2,0,0\n\
             2017,3,15,GBR,1,1,0\n",
        );
        let records = DataLoader::load_records(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year.as_deref(), Some("2016"));
        assert_eq!(records[0].month.as_deref(), Some("July"));
        assert_eq!(records[0].country.as_deref(), Some("PRT"));
        assert_eq!(records[1].day.as_deref(), Some("15"));
        assert_eq!(records[1].children.as_deref(), Some("1"));
    }

    #[test]
    fn missing_column_yields_none_fields() {
        let path = write_temp_csv(
            "bookings_no_country.csv",
            "arrival_date_year,arrival_date_month,arrival_date_day_of_month,adults,children,babies\n\
             2016,July,1,2,0,0\n",
        );
        let records = DataLoader::load_records(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, None);
        assert_eq!(records[0].adults.as_deref(), Some("2"));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let path = write_temp_csv(
            "bookings_extra.csv",
            "hotel,arrival_date_year,arrival_date_month,arrival_date_day_of_month,country,adults,children,babies,lead_time\n\
             Resort Hotel,2015,August,20,ESP,2,1,0,37\n",
        );
        let records = DataLoader::load_records(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year.as_deref(), Some("2015"));
        assert_eq!(records[0].babies.as_deref(), Some("0"));
    }

    #[test]
    fn empty_cells_become_none() {
        let path = write_temp_csv(
            "bookings_empty_cells.csv",
            "arrival_date_year,arrival_date_month,arrival_date_day_of_month,country,adults,children,babies\n\
             2016,July,1,,2,,0\n",
        );
        let records = DataLoader::load_records(path.to_str().unwrap()).unwrap();

        assert_eq!(records[0].country, None);
        assert_eq!(records[0].children, None);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(DataLoader::load_records("/nonexistent/bookings.csv").is_err());
    }
}
