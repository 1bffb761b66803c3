/// Navigation configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Largest tab width accepted after sanitizing.
pub const MAX_TAB_SIZE: usize = 64;

const DEFAULT_TAB_SIZE: usize = 4;
const DEFAULT_PAGE_LINES: usize = 20;

/// Read-only settings consulted by cursor navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Width of a tab stop in visible columns. Always at least 1 once sanitized.
    pub tab_size: usize,
    /// Number of lines moved by page up / page down.
    pub page_lines: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            page_lines: DEFAULT_PAGE_LINES,
        }
    }
}

impl NavigationConfig {
    /// Creates a config with the given tab size and default paging.
    pub fn with_tab_size(tab_size: usize) -> Self {
        Self {
            tab_size,
            ..Self::default()
        }
    }

    /// Returns the config file path: `<config dir>/caretnav/caretnav.json`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("caretnav").join("caretnav.json"))
            .unwrap_or_else(|| PathBuf::from("caretnav.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<NavigationConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.tab_size = self.tab_size.clamp(1, MAX_TAB_SIZE);
        self.page_lines = self.page_lines.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavigationConfig::default();
        assert_eq!(config.tab_size, 4);
        assert_eq!(config.page_lines, 20);
    }

    #[test]
    fn test_with_tab_size() {
        let config = NavigationConfig::with_tab_size(8);
        assert_eq!(config.tab_size, 8);
        assert_eq!(config.page_lines, 20);
    }

    #[test]
    fn test_sanitize_zero_tab_size() {
        let mut config = NavigationConfig::with_tab_size(0);
        config.sanitize();
        assert_eq!(config.tab_size, 1);
    }

    #[test]
    fn test_sanitize_huge_tab_size() {
        let mut config = NavigationConfig::with_tab_size(1000);
        config.sanitize();
        assert_eq!(config.tab_size, MAX_TAB_SIZE);
    }

    #[test]
    fn test_sanitize_page_lines() {
        let mut config = NavigationConfig {
            tab_size: 4,
            page_lines: 0,
        };
        config.sanitize();
        assert_eq!(config.page_lines, 1);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let mut config = NavigationConfig {
            tab_size: 2,
            page_lines: 40,
        };
        config.sanitize();
        assert_eq!(config.tab_size, 2);
        assert_eq!(config.page_lines, 40);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = NavigationConfig {
            tab_size: 3,
            page_lines: 7,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: NavigationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = NavigationConfig::config_path();
        assert_eq!(path.file_name().unwrap(), "caretnav.json");
    }
}
