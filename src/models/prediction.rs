use serde::Serialize;

/// Result of one prediction run, written to the prediction file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub total_sent_gb:     f64,
    pub total_gb:          f64,
    pub num_backups_done:  usize,
    pub avg_gb_per_backup: f64,
    /// `total_gb - total_sent_gb`; negative once the quota is exceeded.
    pub remaining_gb:      f64,
    /// Whole backups that still fit. None when the average is not positive.
    pub remaining_backups: Option<i64>,
    /// `YYYY-MM-DD`, only set when `remaining_backups > 0`.
    pub prediction_date:   Option<String>,
}

/// Aggregate of the log before any projection is made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageSummary {
    pub num_backups: usize,
    pub total_sent:  f64,
    pub total_gb:    f64,
}

/// Latest log row joined with the last written prediction date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanStatus {
    pub timestamp:       Option<String>,
    pub used_gb:         Option<f64>,
    pub total_gb:        Option<f64>,
    pub prediction_date: Option<String>,
}
