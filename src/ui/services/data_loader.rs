use crate::data::{CsvConnector, Dataset, DatasetMetadata};
use std::path::{Path, PathBuf};

pub struct DataLoader;

impl DataLoader {
    /// Load and type a funding CSV for the UI, flattening errors to text.
    pub fn load_csv(path: &Path, date_formats: &[String]) -> Result<(Dataset, DatasetMetadata), String> {
        CsvConnector::load_dataset(path, date_formats).map_err(|e| e.to_string())
    }

    /// Ask the user for a CSV file. `None` when the dialog is cancelled.
    pub fn pick_csv() -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
    }
}
