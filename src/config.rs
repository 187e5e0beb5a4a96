use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory holding the log and output files. Unset = next to the executable.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Backup transfer log (CSV, one row per backup run)
    pub log_file: String,
    /// Prediction result (pretty-printed JSON)
    pub prediction_file: String,
    /// One-line diagnostic written on every prediction run
    pub debug_file: String,
}

/// Absolute locations of the three files one run touches.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePaths {
    pub log:        PathBuf,
    pub prediction: PathBuf,
    pub debug:      PathBuf,
}

impl FilePaths {
    pub fn in_dir(dir: &Path, files: &FilesConfig) -> Self {
        Self {
            log:        dir.join(&files.log_file),
            prediction: dir.join(&files.prediction_file),
            debug:      dir.join(&files.debug_file),
        }
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            log_file:        "san_usage_log.csv".into(),
            prediction_file: "san_prediction.json".into(),
            debug_file:      "predict_usage_debug.txt".into(),
        }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Some(p) => p,
            None    => return Config::default(),
        };
        if !path.exists() {
            // Write defaults on first run (best-effort)
            if let Err(e) = try_write_defaults(&path) {
                tracing::debug!("could not write default config to {}: {e}", path.display());
            }
            return Config::default();
        }
        match fs::read_to_string(&path).map_err(anyhow::Error::from).and_then(|t| Self::load_from_str(&t)) {
            Ok(c)  => c,
            Err(e) => {
                tracing::warn!("ignoring config {}: {e:#}", path.display());
                Config::default()
            }
        }
    }

    /// Parse and validate config text.
    pub fn load_from_str(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.files.log_file.trim().is_empty(), "files.log_file must not be empty");
        anyhow::ensure!(!self.files.prediction_file.trim().is_empty(), "files.prediction_file must not be empty");
        anyhow::ensure!(!self.files.debug_file.trim().is_empty(), "files.debug_file must not be empty");
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sanpredict").join("sanpredict.toml"))
    }

    /// Resolve the data directory: explicit override, then config, then the
    /// executable's own directory, then the working directory.
    pub fn data_dir(&self, dir_override: Option<&Path>) -> PathBuf {
        if let Some(d) = dir_override {
            return d.to_path_buf();
        }
        if let Some(d) = &self.general.data_dir {
            return d.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn file_paths(&self, dir_override: Option<&Path>) -> FilePaths {
        FilePaths::in_dir(&self.data_dir(dir_override), &self.files)
    }
}

fn try_write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# sanpredict configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
[general]
data_dir = "/srv/backup"

[files]
log_file = "usage.csv"
prediction_file = "out.json"
debug_file = "debug.txt"
"#;

    #[test]
    fn loads_from_str() {
        let cfg = Config::load_from_str(VALID_CONFIG).expect("load_from_str");
        assert_eq!(cfg.general.data_dir.as_deref(), Some(Path::new("/srv/backup")));
        assert_eq!(cfg.files.log_file, "usage.csv");
        assert_eq!(cfg.files.prediction_file, "out.json");
        assert_eq!(cfg.files.debug_file, "debug.txt");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = Config::load_from_str("").expect("empty config");
        assert!(cfg.general.data_dir.is_none());
        assert_eq!(cfg.files.log_file, "san_usage_log.csv");
        assert_eq!(cfg.files.prediction_file, "san_prediction.json");
        assert_eq!(cfg.files.debug_file, "predict_usage_debug.txt");
    }

    #[test]
    fn rejects_empty_file_name() {
        let bad = VALID_CONFIG.replace("log_file = \"usage.csv\"", "log_file = \"\"");
        let err = Config::load_from_str(&bad).unwrap_err();
        assert!(err.to_string().contains("files.log_file"));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let cfg = Config::load_from_str(&text).unwrap();
        assert_eq!(cfg.files.log_file, "san_usage_log.csv");
    }

    #[test]
    fn override_dir_wins() {
        let cfg = Config::load_from_str(VALID_CONFIG).unwrap();
        let paths = cfg.file_paths(Some(Path::new("/tmp/x")));
        assert_eq!(paths.log, PathBuf::from("/tmp/x/usage.csv"));

        let paths = cfg.file_paths(None);
        assert_eq!(paths.prediction, PathBuf::from("/srv/backup/out.json"));
        assert_eq!(paths.debug, PathBuf::from("/srv/backup/debug.txt"));
    }
}
