use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Missing required column: {column} (tried aliases: {aliases:?})")]
    MissingColumn {
        column: String,
        aliases: Vec<&'static str>,
    },

    #[error("Column '{column}' has unsupported type {dtype}")]
    ColumnType { column: String, dtype: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
