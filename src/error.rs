use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No data found for station {station_id}")]
    NoDataForStation { station_id: u32 },

    #[error("Invalid date '{0}', expected dd.mm.yyyy")]
    InvalidDate(String),

    #[error("No values available to compute extreme of {0}")]
    EmptySeries(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Worker pool error: {0}")]
    TaskPool(#[from] rayon::ThreadPoolBuildError),
}
