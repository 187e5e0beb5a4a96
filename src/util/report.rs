use crate::models::prediction::{Prediction, SanStatus};
use crate::models::usage_log::LogRecord;
use crate::util::human::{fmt_gb, fmt_opt};

/// Human-readable summary of a finished prediction run.
pub fn prediction(p: &Prediction) -> String {
    let mut out = String::new();
    out.push_str("── SAN Usage Prediction ───────────────────────\n");
    out.push_str(&format!("  Backups done      {}\n", p.num_backups_done));
    out.push_str(&format!("  Total sent        {}\n", fmt_gb(Some(p.total_sent_gb))));
    out.push_str(&format!("  Quota             {}\n", fmt_gb(Some(p.total_gb))));
    out.push_str(&format!("  Avg per backup    {}\n", fmt_gb(Some(p.avg_gb_per_backup))));
    out.push_str(&format!("  Remaining         {}\n", fmt_gb(Some(p.remaining_gb))));
    let backups = match p.remaining_backups {
        Some(n) => n.to_string(),
        None    => "unknown".to_string(),
    };
    out.push_str(&format!("  Backups left      {}\n", backups));
    out.push_str(&format!("  Full on           {}\n", fmt_opt(p.prediction_date.as_deref())));
    out
}

pub fn status(s: &SanStatus) -> String {
    let mut out = String::new();
    out.push_str("── SAN Status ─────────────────────────────────\n");
    out.push_str(&format!("  Last backup       {}\n", fmt_opt(s.timestamp.as_deref())));
    out.push_str(&format!("  Used              {}\n", fmt_gb(s.used_gb)));
    out.push_str(&format!("  Total             {}\n", fmt_gb(s.total_gb)));
    out.push_str(&format!("  Predicted full    {}\n", fmt_opt(s.prediction_date.as_deref())));
    out
}

/// Table of log rows in the order given.
pub fn backup_log(rows: &[&LogRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("── Backup Log ({}) ─────────────────────────────\n", rows.len()));
    out.push_str(&format!(
        "  {:<22} {:>12} {:>12} {:>12}\n",
        "Timestamp", "Used", "Total", "Sent"
    ));
    out.push_str(&format!("  {}\n", "─".repeat(61)));
    for r in rows {
        out.push_str(&format!(
            "  {:<22} {:>12} {:>12} {:>12}\n",
            fmt_opt(r.timestamp.as_deref()),
            fmt_gb(r.used_gb),
            fmt_gb(r.total_gb),
            fmt_gb(r.sent_gb),
        ));
    }
    out
}
