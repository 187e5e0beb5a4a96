use serde::Serialize;

/// One row of the backup log: a single completed backup run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogRecord {
    pub timestamp: Option<String>,
    pub used_gb:   Option<f64>,
    pub total_gb:  Option<f64>,
    pub sent_gb:   Option<f64>,
}

/// The whole log, oldest run first.
#[derive(Debug, Clone, Default)]
pub struct UsageLog {
    pub records: Vec<LogRecord>,

    // Which known columns appeared in the header
    pub has_sent_gb:  bool,
    pub has_total_gb: bool,
}

impl UsageLog {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn last(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    /// True when at least one row carries a numeric `sent_gb`.
    pub fn has_sent_values(&self) -> bool {
        self.has_sent_gb && self.records.iter().any(|r| r.sent_gb.is_some())
    }

    /// Sum of `sent_gb` with missing or non-numeric cells counted as zero.
    pub fn total_sent_gb(&self) -> f64 {
        self.records.iter().map(|r| r.sent_gb.unwrap_or(0.0)).sum()
    }

    /// Records newest first, optionally keeping only the newest `limit`.
    pub fn newest_first(&self, limit: Option<usize>) -> Vec<&LogRecord> {
        let n = limit.unwrap_or(self.records.len());
        self.records.iter().rev().take(n).collect()
    }
}
