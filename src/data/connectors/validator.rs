use crate::error::{DashboardError, Result};
use polars::prelude::*;
use super::types::RequiredColumn;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Resolve every required column to its header in `df`.
    pub fn validate_schema(df: &DataFrame) -> Result<HashMap<RequiredColumn, String>> {
        let mut column_map = HashMap::new();

        for required in RequiredColumn::all() {
            match Self::find_column(df, &required) {
                Some(col_name) => {
                    column_map.insert(required, col_name);
                }
                None => {
                    return Err(DashboardError::MissingColumn {
                        column: required.as_str().to_string(),
                        aliases: required.aliases(),
                    });
                }
            }
        }

        // Amount must be castable to a float; strings are allowed and
        // non-numeric cells become null.
        let amount_name = &column_map[&RequiredColumn::Amount];
        let amount = df.column(amount_name)?;
        if !Self::is_numeric_or_text(amount.dtype()) {
            return Err(DashboardError::ColumnType {
                column: amount_name.clone(),
                dtype: format!("{:?}", amount.dtype()),
            });
        }

        Ok(column_map)
    }

    /// Find column by checking aliases
    fn find_column(df: &DataFrame, required: &RequiredColumn) -> Option<String> {
        let columns = df.get_column_names();
        for alias in required.aliases() {
            if let Some(col) = columns
                .iter()
                .find(|col| col.as_str().trim().eq_ignore_ascii_case(alias))
            {
                return Some(col.to_string());
            }
        }
        None
    }

    fn is_numeric_or_text(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::UInt64
                | DataType::UInt32
                | DataType::String
                | DataType::Null
        )
    }

    /// Per-column null counts, only for columns that have any
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn cleaned_frame() -> DataFrame {
        df! {
            "date" => &["2020-01-09", "2020-01-13"],
            "startup" => &["BYJU'S", "Shuttl"],
            "vertical" => &["E-Tech", "Transportation"],
            "city" => &["Bengaluru", "Gurgaon"],
            "investor" => &["Tiger Global Management", "Susquehanna Growth Equity"],
            "round" => &["Private Equity Round", "Series C"],
            "amount" => &[1500.0, 60.0],
        }
        .unwrap()
    }

    #[test]
    fn test_validate_good_data() {
        let map = DataValidator::validate_schema(&cleaned_frame()).unwrap();
        assert_eq!(map.len(), RequiredColumn::all().len());
        assert_eq!(map[&RequiredColumn::Amount], "amount");
    }

    #[test]
    fn test_validate_missing_column() {
        let df = cleaned_frame().drop("city").unwrap();

        let err = DataValidator::validate_schema(&df).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { ref column, .. } if column == "city"));
    }

    #[test]
    fn test_column_aliases() {
        let df = df! {
            "Date dd/mm/yyyy" => &["09/01/2020"],
            "Startup Name" => &["BYJU'S"],
            "Industry Vertical" => &["E-Tech"],
            "City  Location" => &["Bengaluru"],
            "Investors Name" => &["Tiger Global Management"],
            "InvestmentnType" => &["Private Equity Round"],
            "Amount in USD" => &["200,000,000"],
        }
        .unwrap();

        let map = DataValidator::validate_schema(&df).unwrap();
        assert_eq!(map[&RequiredColumn::City], "City  Location");
        assert_eq!(map[&RequiredColumn::Round], "InvestmentnType");
    }

    #[test]
    fn test_non_numeric_amount_type_rejected() {
        let mut df = cleaned_frame();
        df.with_column(Series::new("amount".into(), &[true, false]))
            .unwrap();

        let err = DataValidator::validate_schema(&df).unwrap_err();
        assert!(matches!(err, DashboardError::ColumnType { .. }));
    }

    #[test]
    fn test_check_nulls() {
        let df = df! {
            "city" => &[Some("Pune"), None, None],
            "amount" => &[Some(1.0), Some(2.0), None],
        }
        .unwrap();

        let report = DataValidator::check_nulls(&df).unwrap();
        assert_eq!(report, vec![("city".to_string(), 2), ("amount".to_string(), 1)]);
    }
}
