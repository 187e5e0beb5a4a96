use crate::collectors::usage_log::read_usage_log;
use crate::config::FilePaths;
use crate::error::PredictError;
use crate::models::prediction::{Prediction, UsageSummary};
use crate::models::usage_log::UsageLog;
use crate::util::{debug_file, prediction_store};
use chrono::{Days, NaiveDate};

/// Aggregate the log: row count, total sent volume and the quota from the
/// last row. Fails when there is nothing usable to aggregate.
pub fn summarize(log: &UsageLog) -> Result<UsageSummary, PredictError> {
    if log.is_empty() {
        return Err(PredictError::EmptyLog);
    }
    if !log.has_sent_values() {
        return Err(PredictError::MissingColumn("sent_gb"));
    }
    if !log.has_total_gb {
        return Err(PredictError::Malformed("no total_gb column".into()));
    }
    let total_gb = log
        .last()
        .and_then(|r| r.total_gb)
        .ok_or_else(|| PredictError::Malformed("last row has no numeric total_gb".into()))?;

    Ok(UsageSummary {
        num_backups: log.len(),
        total_sent:  log.total_sent_gb(),
        total_gb,
    })
}

/// Extrapolate from the average volume per backup, assuming one backup per day.
pub fn project(summary: &UsageSummary, today: NaiveDate) -> Result<Prediction, PredictError> {
    let UsageSummary { num_backups, total_sent, total_gb } = *summary;
    if num_backups == 0 || total_sent == 0.0 {
        return Err(PredictError::NotEnoughData { num_backups, total_sent });
    }

    let avg_per_backup = total_sent / num_backups as f64;
    let remaining_gb = total_gb - total_sent;

    let remaining_backups = if avg_per_backup <= 0.0 {
        None
    } else {
        let ratio = (remaining_gb / avg_per_backup).floor();
        if ratio >= i64::MAX as f64 || ratio < i64::MIN as f64 {
            tracing::warn!(ratio, "remaining backup count exceeds i64, saturating");
        }
        // `as` saturates at the i64 bounds
        Some(ratio as i64)
    };

    let prediction_date = match remaining_backups {
        Some(n) if n > 0 => match today.checked_add_days(Days::new(n as u64)) {
            Some(d) => Some(d.format("%Y-%m-%d").to_string()),
            None    => {
                tracing::warn!(remaining_backups = n, "projected date is past the last representable date");
                None
            }
        },
        _ => None,
    };

    Ok(Prediction {
        total_sent_gb:     total_sent,
        total_gb,
        num_backups_done:  num_backups,
        avg_gb_per_backup: avg_per_backup,
        remaining_gb,
        remaining_backups,
        prediction_date,
    })
}

/// Full prediction run: read the log, write the diagnostic file, project,
/// and write the prediction file. Nothing is written past the first failure.
pub fn run(paths: &FilePaths, today: NaiveDate) -> Result<Prediction, PredictError> {
    let log = read_usage_log(&paths.log)?;
    let summary = summarize(&log)?;

    debug_file::write(&paths.debug, &summary)?;
    tracing::debug!(
        num_backups = summary.num_backups,
        total_sent = summary.total_sent,
        total_gb = summary.total_gb,
        "summarized usage log"
    );

    let prediction = project(&summary, today)?;
    prediction_store::save(&paths.prediction, &prediction)?;
    tracing::info!(path = %paths.prediction.display(), "prediction written");
    Ok(prediction)
}
