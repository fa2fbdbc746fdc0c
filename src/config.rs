//! Viewfinder configuration: frame presets plus mask/border styles.
//!
//! Loaded once at startup. Lookup priority:
//! 1. CLI `--config` argument
//! 2. `VIEWFINDER_CONFIG` environment variable
//! 3. Platform config file IF it exists (`<config_dir>/viewfinder/viewfinder.json`)
//! 4. Built-in defaults
//!
//! Platform paths (dirs-next):
//! - Linux: ~/.config/viewfinder/viewfinder.json
//! - macOS: ~/Library/Application Support/viewfinder/viewfinder.json
//! - Windows: %APPDATA%\viewfinder\viewfinder.json

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::widgets::viewfinder::{BorderStyle, MaskStyle, OrientedConstraints};

pub const CONFIG_FILE_NAME: &str = "viewfinder.json";
pub const CONFIG_ENV_VAR: &str = "VIEWFINDER_CONFIG";

/// Everything the overlay needs that a host would otherwise look up from resources.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ViewfinderConfig {
    #[serde(flatten)]
    pub constraints: OrientedConstraints,
    pub mask: MaskStyle,
    pub border: BorderStyle,
}

impl ViewfinderConfig {
    pub fn validate(&self) -> Result<()> {
        self.constraints.validate()?;
        anyhow::ensure!(
            self.border.stroke_width >= 0.0,
            "border stroke_width must not be negative, got {}",
            self.border.stroke_width
        );
        anyhow::ensure!(
            self.border.corner_line_length >= 0,
            "border corner_line_length must not be negative, got {}",
            self.border.corner_line_length
        );
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid viewfinder config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config =
            Self::from_json(&json).with_context(|| format!("Bad config: {}", path.display()))?;
        info!("Loaded viewfinder config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Resolve the config path and load it, falling back to defaults when nothing is found.
    ///
    /// An explicitly requested file (CLI or env) that fails to load is an error.
    pub fn load_or_default(cli_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(cli_path) {
            ConfigSource::Explicit(path) => Self::load(&path),
            ConfigSource::Platform(path) => Self::load(&path),
            ConfigSource::Defaults => {
                debug!("No viewfinder config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Platform(PathBuf),
    Defaults,
}

pub fn resolve_config_path(cli_path: Option<&Path>) -> ConfigSource {
    // Priority 1: CLI
    if let Some(path) = cli_path {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    // Priority 2: environment
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.is_empty()
    {
        return ConfigSource::Explicit(PathBuf::from(path));
    }

    // Priority 3: platform config dir, only if the file is there
    if let Some(path) = platform_config_file()
        && path.exists()
    {
        return ConfigSource::Platform(path);
    }

    ConfigSource::Defaults
}

/// Default location for the config file, if the platform has a config dir.
pub fn platform_config_file() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("viewfinder").join(CONFIG_FILE_NAME))
}
