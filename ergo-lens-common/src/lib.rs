pub mod config;
pub use config::{ChartConfig, Config, DisplayConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErgoLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}' in header row")]
    MissingColumn(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ErgoLensError>;
