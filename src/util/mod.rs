pub mod debug_file;
pub mod human;
pub mod prediction_store;
pub mod report;
