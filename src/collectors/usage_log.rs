use crate::error::PredictError;
use crate::models::usage_log::{LogRecord, UsageLog};
use std::path::Path;

/// Column indices resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    timestamp: Option<usize>,
    used_gb:   Option<usize>,
    total_gb:  Option<usize>,
    sent_gb:   Option<usize>,
}

/// Read and parse the backup log at `path`.
pub fn read_usage_log(path: &Path) -> Result<UsageLog, PredictError> {
    if !path.exists() {
        return Err(PredictError::LogNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let log = parse_usage_log(&content);
    tracing::debug!(path = %path.display(), rows = log.len(), "read usage log");
    Ok(log)
}

/// Parse comma-separated log text. The first non-blank line is the header;
/// unknown columns are ignored and short rows leave trailing fields empty.
pub fn parse_usage_log(content: &str) -> UsageLog {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let header = match lines.next() {
        Some(h) => split_fields(h.trim_start_matches('\u{feff}')),
        None    => return UsageLog::default(),
    };

    let mut cols = Columns::default();
    for (i, name) in header.iter().enumerate() {
        match name.as_str() {
            "timestamp" => cols.timestamp = Some(i),
            "used_gb"   => cols.used_gb   = Some(i),
            "total_gb"  => cols.total_gb  = Some(i),
            "sent_gb"   => cols.sent_gb   = Some(i),
            _ => {}
        }
    }

    let records = lines
        .map(|line| {
            let fields = split_fields(line);
            let cell = |idx: Option<usize>| idx.and_then(|i| fields.get(i)).map(String::as_str);
            LogRecord {
                timestamp: cell(cols.timestamp).filter(|s| !s.is_empty()).map(str::to_string),
                used_gb:   cell(cols.used_gb).and_then(parse_number),
                total_gb:  cell(cols.total_gb).and_then(parse_number),
                sent_gb:   cell(cols.sent_gb).and_then(parse_number),
            }
        })
        .collect();

    UsageLog {
        records,
        has_sent_gb:  cols.sent_gb.is_some(),
        has_total_gb: cols.total_gb.is_some(),
    }
}

/// Lenient numeric coercion: anything that is not a finite number is None.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split one CSV line, honouring double-quoted fields with `""` escapes.
/// Fields are trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cur.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(cur.trim().to_string());
                cur.clear();
            }
            _ => cur.push(c),
        }
    }
    fields.push(cur.trim().to_string());
    fields
}
