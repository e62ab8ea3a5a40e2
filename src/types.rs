use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Label used for a null category key (city, vertical, round, investor).
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One funding event, typed once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRecord {
    pub date: Option<NaiveDate>,
    pub startup: Option<String>,
    pub vertical: Option<String>,
    pub city: Option<String>,
    /// Raw investor field; may hold several comma-separated names.
    pub investor: Option<String>,
    pub round: Option<String>,
    /// Amount in Cr.
    pub amount: Option<f64>,
}

impl FundingRecord {
    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Substring match against the raw investor field.
    ///
    /// "Kumar" also matches "Anil Kumar": the field is not tokenized.
    pub fn mentions_investor(&self, name: &str) -> bool {
        self.investor
            .as_deref()
            .map(|field| field.contains(name))
            .unwrap_or(false)
    }
}

/// Aggregation mode for the month-over-month series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MomMode {
    #[default]
    Total,
    Count,
}

impl MomMode {
    pub fn all() -> [Self; 2] {
        [Self::Total, Self::Count]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Count => "Count",
        }
    }
}

/// Aggregation mode for the sector breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectorMode {
    #[default]
    Count,
    Total,
}

impl SectorMode {
    pub fn all() -> [Self; 2] {
        [Self::Count, Self::Total]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Total => "Total",
        }
    }
}
