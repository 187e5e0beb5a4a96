use std::path::PathBuf;
use thiserror::Error;

/// Every way a prediction run can stop early.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Log file not found: {}", .0.display())]
    LogNotFound(PathBuf),

    #[error("Log has no backup rows, not enough data to predict.")]
    EmptyLog,

    #[error("{0} column missing or empty, cannot predict.")]
    MissingColumn(&'static str),

    #[error("Malformed log ({0}), cannot predict.")]
    Malformed(String),

    #[error("Not enough data to predict (num_backups={num_backups}, total_sent={total_sent}).")]
    NotEnoughData { num_backups: usize, total_sent: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
