use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "startup_cleaned.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub csv_path: PathBuf,
    /// chrono formats tried in order when parsing the `date` column.
    pub date_formats: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            date_formats: ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.csv_path.as_os_str().is_empty() {
            return Err(DashboardError::Configuration(
                "data.csv_path must not be empty".to_string()
            ));
        }
        if self.date_formats.is_empty() {
            return Err(DashboardError::Configuration(
                "data.date_formats needs at least one format".to_string()
            ));
        }
        Ok(())
    }
}
