use crate::models::prediction::Prediction;
use std::fs;
use std::path::Path;

/// Overwrite `path` with the pretty-printed prediction.
pub fn save(path: &Path, prediction: &Prediction) -> Result<(), crate::error::PredictError> {
    let json = serde_json::to_string_pretty(prediction)?;
    fs::write(path, json)?;
    Ok(())
}

/// Just the `prediction_date` field. Tolerates files written by other tools
/// as long as they are a JSON object; anything else reads as None.
pub fn load_prediction_date(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&text).ok()?;
    value.get("prediction_date")?.as_str().map(str::to_string)
}
