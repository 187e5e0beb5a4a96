pub mod usage_log;
