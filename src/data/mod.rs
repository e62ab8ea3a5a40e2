pub mod connectors;
pub mod dataset;

pub use connectors::{CsvConnector, DataValidator, DatasetMetadata, RequiredColumn};
pub use dataset::Dataset;
