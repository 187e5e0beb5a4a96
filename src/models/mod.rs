pub mod prediction;
pub mod usage_log;
