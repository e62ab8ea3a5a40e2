use crate::data::Dataset;
use crate::error::{DashboardError, Result};
use crate::types::FundingRecord;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use super::{
    types::{DatasetMetadata, RequiredColumn},
    validator::DataValidator,
};

/// Tried after the configured date formats.
const DATETIME_FALLBACKS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))
            .map_err(|e| {
                DashboardError::DataLoading(format!(
                    "Failed to open {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .finish()
            .map_err(|e| DashboardError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load, validate and type a funding CSV.
    pub fn load_dataset<P: AsRef<Path>>(
        path: P,
        date_formats: &[String],
    ) -> Result<(Dataset, DatasetMetadata)> {
        let df = Self::load(&path)?;
        log::info!(
            "Read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.as_ref().display()
        );
        Self::from_frame(df, path, date_formats)
    }

    /// Validate an in-memory frame and convert it into typed records.
    pub fn from_frame<P: AsRef<Path>>(
        df: DataFrame,
        path: P,
        date_formats: &[String],
    ) -> Result<(Dataset, DatasetMetadata)> {
        let column_map = DataValidator::validate_schema(&df)?;

        // Warn about nulls but don't fail
        let null_counts = DataValidator::check_nulls(&df)?;
        if !null_counts.is_empty() {
            log::warn!("Null values detected: {:?}", null_counts);
        }

        let (records, unparsed_dates, unparsed_amounts) =
            Self::to_records(&df, &column_map, date_formats)?;
        if unparsed_dates > 0 {
            log::warn!("{} date values could not be parsed and were set to null", unparsed_dates);
        }
        if unparsed_amounts > 0 {
            log::warn!("{} amount values were not numeric and were set to null", unparsed_amounts);
        }

        let date_range = records
            .iter()
            .filter_map(|r| r.date)
            .fold(None, |range: Option<(NaiveDate, NaiveDate)>, d| match range {
                None => Some((d, d)),
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            });

        let metadata = DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns: df.get_column_names().iter().map(|s| s.to_string()).collect(),
            date_range,
            unparsed_dates,
            unparsed_amounts,
            null_counts,
        };

        Ok((Dataset::new(records, path.as_ref()), metadata))
    }

    /// Returns the records plus the number of unparseable date and amount cells.
    fn to_records(
        df: &DataFrame,
        column_map: &HashMap<RequiredColumn, String>,
        date_formats: &[String],
    ) -> Result<(Vec<FundingRecord>, usize, usize)> {
        let text = |required: RequiredColumn| Self::text_column(df, &column_map[&required]);

        let raw_dates = text(RequiredColumn::Date)?;
        let startups = text(RequiredColumn::Startup)?;
        let verticals = text(RequiredColumn::Vertical)?;
        let cities = text(RequiredColumn::City)?;
        let investors = text(RequiredColumn::Investor)?;
        let rounds = text(RequiredColumn::Round)?;
        let (amounts, unparsed_amounts) =
            Self::amount_column(df, &column_map[&RequiredColumn::Amount])?;

        let mut unparsed_dates = 0;
        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let date = match &raw_dates[i] {
                Some(raw) => {
                    let parsed = parse_date(raw, date_formats);
                    if parsed.is_none() {
                        unparsed_dates += 1;
                    }
                    parsed
                }
                None => None,
            };

            records.push(FundingRecord {
                date,
                startup: startups[i].clone(),
                vertical: verticals[i].clone(),
                city: cities[i].clone(),
                investor: investors[i].clone(),
                round: rounds[i].clone(),
                amount: amounts[i],
            });
        }

        Ok((records, unparsed_dates, unparsed_amounts))
    }

    /// Any column as trimmed strings; blank cells become null.
    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
        let column = df.column(name)?.cast(&DataType::String)?;
        let values = column
            .str()?
            .into_iter()
            .map(|v| {
                v.map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .collect();
        Ok(values)
    }

    fn amount_column(df: &DataFrame, name: &str) -> Result<(Vec<Option<f64>>, usize)> {
        let source = df.column(name)?;
        let non_null_before = source.len() - source.null_count();

        let amounts: Vec<Option<f64>> = if source.dtype() == &DataType::String {
            // Raw exports write amounts like "200,000,000".
            source
                .str()?
                .into_iter()
                .map(|v| v.and_then(parse_amount))
                .collect()
        } else {
            let column = source.cast(&DataType::Float64)?;
            column.f64()?.into_iter().collect()
        };
        let non_null_after = amounts.iter().filter(|a| a.is_some()).count();

        Ok((amounts, non_null_before.saturating_sub(non_null_after)))
    }
}

/// A text amount with thousands separators removed; `None` if not numeric.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parse a date cell with each format in turn, then common datetime layouts.
pub fn parse_date(raw: &str, formats: &[String]) -> Option<NaiveDate> {
    let raw = raw.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FALLBACKS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}
