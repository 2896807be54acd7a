//! Configuration file handling for fbscope.
//!
//! Loads settings from `~/.config/fbscope/config.toml` or a custom path.
//! Every key is optional; unset keys fall back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::framebuffer::DEFAULT_DEVICE;
use crate::render::{CharsetMode, ColorMode, DisplayConfig, Region};

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub region: RegionSection,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<CharsetMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionSection {
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    #[serde(default)]
    pub w: u32,
    #[serde(default)]
    pub h: u32,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Device path, or [`DEFAULT_DEVICE`].
    pub fn device_path(&self) -> PathBuf {
        self.device
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE))
    }

    /// File settings layered over [`DisplayConfig::default`].
    pub fn display_config(&self) -> DisplayConfig {
        let defaults = DisplayConfig::default();
        let d = &self.display;
        DisplayConfig {
            output_width: d.width.unwrap_or(defaults.output_width),
            output_height: d.height.unwrap_or(defaults.output_height),
            color_mode: d.color.unwrap_or(defaults.color_mode),
            charset_mode: d.charset.unwrap_or(defaults.charset_mode),
            brightness: d.brightness.unwrap_or(defaults.brightness),
            contrast: d.contrast.unwrap_or(defaults.contrast),
            fps: d.fps.unwrap_or(defaults.fps),
            region: Region {
                x: self.region.x,
                y: self.region.y,
                w: self.region.w,
                h: self.region.h,
            },
        }
    }

    /// A fully populated config describing `device` and `display`.
    pub fn from_settings(device: &Path, display: &DisplayConfig) -> Self {
        Config {
            device: DeviceConfig {
                path: Some(device.to_path_buf()),
            },
            display: DisplaySection {
                width: Some(display.output_width),
                height: Some(display.output_height),
                color: Some(display.color_mode),
                charset: Some(display.charset_mode),
                brightness: Some(display.brightness),
                contrast: Some(display.contrast),
                fps: Some(display.fps),
            },
            region: RegionSection {
                x: display.region.x,
                y: display.region.y,
                w: display.region.w,
                h: display.region.h,
            },
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Write the built-in defaults to `path`, creating parent directories.
    /// Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let content = Config::from_settings(Path::new(DEFAULT_DEVICE), &DisplayConfig::default())
            .to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file '{}' already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("fbscope").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/fbscope/config.toml")
        })
}
