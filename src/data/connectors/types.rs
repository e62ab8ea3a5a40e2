use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Columns every funding CSV must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredColumn {
    Date,
    Startup,
    Vertical,
    City,
    Investor,
    Round,
    Amount,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Startup => "startup",
            Self::Vertical => "vertical",
            Self::City => "city",
            Self::Investor => "investor",
            Self::Round => "round",
            Self::Amount => "amount",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Date,
            Self::Startup,
            Self::Vertical,
            Self::City,
            Self::Investor,
            Self::Round,
            Self::Amount,
        ]
    }

    /// Header names seen in raw and cleaned funding exports.
    /// Compared case-insensitively after trimming.
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Date => vec!["date", "date dd/mm/yyyy", "funding date"],
            Self::Startup => vec!["startup", "startup name", "company"],
            Self::Vertical => vec!["vertical", "industry vertical", "sector", "industry"],
            Self::City => vec!["city", "city  location", "city location", "location"],
            Self::Investor => vec!["investor", "investors", "investors name", "investor name"],
            Self::Round => vec!["round", "investmentntype", "investment type", "stage"],
            Self::Amount => vec!["amount", "amount in usd", "amount in cr"],
        }
    }
}

/// Metadata about a loaded funding CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Non-empty date cells that no configured format could parse.
    pub unparsed_dates: usize,
    /// Non-empty amount cells that were not numeric.
    pub unparsed_amounts: usize,
    pub null_counts: Vec<(String, usize)>,
}
