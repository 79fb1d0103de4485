use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub sidebar_width: Option<u16>, // falls back to 26 when None
}

fn default_theme() -> String {
    "dark".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sidebar_width: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// "fixed" keeps the RER axis constant across filter changes,
    /// "extent" follows the filtered data's min/max.
    #[serde(default = "default_domain_mode")]
    pub domain_mode: String,
    #[serde(default = "default_fixed_thresholds")]
    pub fixed_thresholds: usize,
    #[serde(default = "default_extent_thresholds")]
    pub extent_thresholds: usize,
}

fn default_domain_mode() -> String {
    "fixed".into()
}
fn default_fixed_thresholds() -> usize {
    50
}
fn default_extent_thresholds() -> usize {
    30
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            domain_mode: default_domain_mode(),
            fixed_thresholds: default_fixed_thresholds(),
            extent_thresholds: default_extent_thresholds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ergo-lens")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("ERGO_LENS_CONFIG") {
            PathBuf::from(env_path) // $ERGO_LENS_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let cfg: Self =
            toml::from_str(&content).map_err(|e| crate::ErgoLensError::Other(e.to_string()))?;
        Ok(cfg)
    }

    pub fn save(&self) -> crate::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::ErgoLensError::Other(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
