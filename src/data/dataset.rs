use crate::types::FundingRecord;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable, cheaply cloneable handle to the loaded funding table.
///
/// Every view reads from the same records; nothing ever writes to them.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[FundingRecord]>,
    source: PathBuf,
}

impl Dataset {
    pub fn new(records: Vec<FundingRecord>, source: impl Into<PathBuf>) -> Self {
        Self {
            records: records.into(),
            source: source.into(),
        }
    }

    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct startup names.
    pub fn startups(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.startup.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorted distinct individual investor names, split out of the
    /// comma-separated investor field.
    pub fn investors(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.investor.as_deref())
            .flat_map(|field| field.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Rows whose raw investor field contains `name`, in table order.
    pub fn investor_subset(&self, name: &str) -> Vec<&FundingRecord> {
        self.records
            .iter()
            .filter(|r| r.mentions_investor(name))
            .collect()
    }
}
