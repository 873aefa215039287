use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiraConfig {
    /// Id of the user treated as "me" on the dashboard
    #[serde(default = "default_current_user")]
    pub current_user: String,
    /// Project id preselected as the board/dashboard scope; absent = all projects
    #[serde(default)]
    pub default_project: Option<String>,
    /// Rows per page on the projects table
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_current_user() -> String {
    "1".to_string()
}

fn default_page_size() -> usize {
    10
}

impl Default for GiraConfig {
    fn default() -> Self {
        Self {
            current_user: default_current_user(),
            default_project: None,
            page_size: default_page_size(),
        }
    }
}

impl GiraConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("gira-tui")
            .join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("gira-tui")
            .join("gira.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: GiraConfig = toml::from_str("").unwrap();
        assert_eq!(config.current_user, "1");
        assert_eq!(config.page_size, 10);
        assert!(config.default_project.is_none());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = GiraConfig {
            current_user: "2".to_string(),
            default_project: Some("1".to_string()),
            page_size: 25,
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: GiraConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.current_user, config.current_user);
        assert_eq!(parsed.default_project, config.default_project);
        assert_eq!(parsed.page_size, config.page_size);
    }
}
