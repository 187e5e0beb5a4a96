use crate::collectors::usage_log::read_usage_log;
use crate::config::FilePaths;
use crate::error::PredictError;
use crate::models::prediction::SanStatus;
use crate::models::usage_log::UsageLog;
use crate::util::prediction_store;

/// Read the log, treating a missing file as an empty one.
pub fn read_log_or_empty(paths: &FilePaths) -> Result<UsageLog, PredictError> {
    match read_usage_log(&paths.log) {
        Ok(log)                           => Ok(log),
        Err(PredictError::LogNotFound(_)) => Ok(UsageLog::default()),
        Err(e)                            => Err(e),
    }
}

/// Latest log row plus the stored prediction date. None when no backup has
/// been logged yet.
pub fn san_status(log: &UsageLog, prediction_date: Option<String>) -> Option<SanStatus> {
    let last = log.last()?;
    Some(SanStatus {
        timestamp: last.timestamp.clone(),
        used_gb:   last.used_gb,
        total_gb:  last.total_gb,
        prediction_date,
    })
}

pub fn read_status(paths: &FilePaths) -> Result<Option<SanStatus>, PredictError> {
    let log = read_log_or_empty(paths)?;
    Ok(san_status(&log, prediction_store::load_prediction_date(&paths.prediction)))
}
