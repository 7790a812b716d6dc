use crate::error::ConfigError;
use crate::history::HistoryMode;
use crate::model::{default_targets, NavigationTarget, TargetList};
use crate::style::{self, Palette};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Content tree to show instead of the built-in portfolio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
    pub window: WindowConfig,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
}

/// Window configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

/// Theme configuration: a preset plus optional per-token overrides
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// "navy", "charcoal", "forest" or "slate"
    pub preset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
}

/// Navigation behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Length of the smooth scroll (in milliseconds, 0 jumps)
    pub scroll_duration_ms: u64,
    /// History write made by the scroll-to-top button: "push" or "replace"
    pub top_history_mode: HistoryMode,
    /// Sidebar entries, in order. The first one is the default screen.
    pub targets: Vec<NavigationTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_path: None,
            window: WindowConfig::default(),
            theme: ThemeConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Portfolio".to_string(),
            width: 1100.0,
            height: 720.0,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            scroll_duration_ms: style::SCROLL_DURATION_MS,
            top_history_mode: HistoryMode::Replace,
            targets: default_targets(),
        }
    }
}

impl ThemeConfig {
    /// Resolve the preset and apply any overrides on top of it.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let preset = if self.preset.is_empty() {
            style::DEFAULT_PRESET
        } else {
            self.preset.as_str()
        };
        let mut palette =
            Palette::preset(preset).ok_or_else(|| ConfigError::UnknownTheme(preset.to_string()))?;

        let overrides: [(&'static str, &Option<String>, &mut Color32); 6] = [
            ("sidebar_bg", &self.sidebar_bg, &mut palette.sidebar_bg),
            ("sidebar_fg", &self.sidebar_fg, &mut palette.sidebar_fg),
            ("hover_bg", &self.hover_bg, &mut palette.hover_bg),
            ("accent", &self.accent, &mut palette.accent),
            ("button_bg", &self.button_bg, &mut palette.button_bg),
            ("button_fg", &self.button_fg, &mut palette.button_fg),
        ];
        for (field, value, slot) in overrides {
            if let Some(value) = value {
                *slot = parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                })?;
            }
        }

        Ok(palette)
    }
}

impl NavigationConfig {
    pub fn target_list(&self) -> Result<TargetList, ConfigError> {
        TargetList::new(self.targets.clone())
    }

    /// Scroll duration in seconds, as the viewport wants it.
    pub fn scroll_duration(&self) -> f32 {
        self.scroll_duration_ms as f32 / 1000.0
    }
}

/// Parse `#rrggbb` or `rrggbb`.
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        // Use directories crate to find config directory
        directories::ProjectDirs::from("", "", "portfolio-shell")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or return defaults if
    /// the file is missing or unusable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    /// Load and validate the configuration at `path`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.navigation.target_list()?;
        self.theme.palette()?;
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default config file if it doesn't exist. Returns its path.
    pub fn create_default() -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(path)
    }
}
