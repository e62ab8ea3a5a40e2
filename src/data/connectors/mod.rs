mod csv;
mod types;
mod validator;

pub use csv::{parse_date, CsvConnector};
pub use types::{DatasetMetadata, RequiredColumn};
pub use validator::DataValidator;
