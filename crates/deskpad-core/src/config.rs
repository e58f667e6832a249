use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Countdown input preloaded into the timer widget, "hh:mm:ss".
    #[serde(default)]
    pub default_countdown: Option<String>,
    /// Section opened on startup (e.g. "editor", "projects").
    #[serde(default)]
    pub start_section: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/deskpad/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("deskpad/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("deskpad\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_default_countdown(&self) -> &str {
        self.default_countdown.as_deref().unwrap_or("00:05:00")
    }

    pub fn effective_start_section(&self) -> &str {
        self.start_section.as_deref().unwrap_or("editor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_default_countdown(), "00:05:00");
        assert_eq!(config.effective_start_section(), "editor");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = toml::from_str("default_countdown = \"00:10:00\"").unwrap();
        assert_eq!(config.effective_default_countdown(), "00:10:00");
        assert_eq!(config.effective_start_section(), "editor");
    }
}
