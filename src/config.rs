use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ReportLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub origin: String,
    pub destination: String,
    pub input_path: String,
    pub output_path: String,
    pub language: ReportLanguage,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: "VVO".into(),
            destination: "TLV".into(),
            input_path: "tickets.json".into(),
            output_path: "output.txt".into(),
            language: ReportLanguage::default(),
        }
    }
}

/// Loads the config from `path`; a missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        info!("Config {} not found, using defaults", path);
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"origin": "UFA", "language": "ru"}"#).unwrap();
        assert_eq!(config.origin, "UFA");
        assert_eq!(config.destination, "TLV");
        assert_eq!(config.input_path, "tickets.json");
        assert_eq!(config.language, ReportLanguage::Russian);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(serde_json::from_str::<AppConfig>(r#"{"language": "de"}"#).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config("definitely-not-here/config.json").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_config_from_disk() {
        let path = std::env::temp_dir().join(format!("flight-analyzer-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"origin": "LED", "destination": "SVO", "output_path": "out.txt"}"#).unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.origin, "LED");
        assert_eq!(config.destination, "SVO");
        assert_eq!(config.output_path, "out.txt");
        assert_eq!(config.language, ReportLanguage::English);
    }
}
