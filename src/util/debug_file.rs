use crate::models::prediction::UsageSummary;
use crate::util::human::fmt_float;
use std::fs;
use std::path::Path;

/// The single diagnostic line for a summary, newline-terminated.
pub fn format_line(summary: &UsageSummary) -> String {
    format!(
        "num_backups={}, total_sent={}\n",
        summary.num_backups,
        fmt_float(summary.total_sent)
    )
}

/// Overwrite the diagnostic file with the line for `summary`.
pub fn write(path: &Path, summary: &UsageSummary) -> std::io::Result<()> {
    fs::write(path, format_line(summary))
}
