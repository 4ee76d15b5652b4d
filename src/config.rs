use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Seconds between sampling cycles. Values below 1 are clamped to 1.
    pub interval_secs: u64,
    /// Log destination, opened in append mode for the process lifetime.
    pub log_file: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            interval_secs: 5,
            log_file: PathBuf::from("system_monitor.log"),
        }
    }
}

impl MonitorConfig {
    pub fn effective_interval_secs(&self) -> u64 {
        self.interval_secs.max(1)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hostwatch").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.monitor.interval_secs, 5);
        assert_eq!(config.monitor.log_file, PathBuf::from("system_monitor.log"));
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[monitor]
interval_secs = 30
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.monitor.interval_secs, 30);
        // Other fields should be defaults
        assert_eq!(config.monitor.log_file, PathBuf::from("system_monitor.log"));
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[monitor]
interval_secs = 10
log_file = "/var/log/hostwatch.log"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.monitor.interval_secs, 10);
        assert_eq!(config.monitor.log_file, PathBuf::from("/var/log/hostwatch.log"));
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.monitor.interval_secs, 5);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("hostwatch_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.monitor.interval_secs, 5);
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn zero_interval_clamps_to_one() {
        let config = MonitorConfig {
            interval_secs: 0,
            ..MonitorConfig::default()
        };
        assert_eq!(config.effective_interval_secs(), 1);
    }
}
