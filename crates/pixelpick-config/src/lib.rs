//! # PixelPick Configuration
//!
//! Configuration for the editor: canvas geometry, palette, and eraser.
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the host)
//! 2. Environment variables (`PIXELPICK_CANVAS__SIZE=10`)
//! 3. Config file (~/.config/pixelpick/config.toml)
//! 4. Built-in defaults

pub mod presets;
pub mod schema;

use anyhow::{bail, Context};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use pixelpick_core::{ChangeSink, ColorSpec, EditorOptions, Surface};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use presets::{PalettePreset, PresetManager, DEFAULT_PRESET};

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "pixelpick", "PixelPick")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/pixelpick"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas and grid geometry
    pub canvas: CanvasConfig,
    /// Colors to paint with
    pub palette: PaletteConfig,
}

/// Canvas and grid geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Cell side length in pixels
    pub size: u32,
    /// Grid outline color
    pub border_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            size: pixelpick_core::DEFAULT_PITCH,
            border_color: ColorSpec::Text("#878787".to_string()),
        }
    }
}

impl CanvasConfig {
    /// The drawing surface, one pixel larger than the canvas on each axis
    pub fn surface(&self) -> Surface {
        Surface::padded(self.width, self.height)
    }
}

/// Palette settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Colors in cycling order
    pub colors: Vec<ColorSpec>,
    /// Color painted while erasing; the first color when unset
    pub eraser_color: Option<ColorSpec>,
    /// Named preset replacing `colors`
    pub preset: Option<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: pixelpick_core::DEFAULT_PALETTE
                .iter()
                .map(|c| ColorSpec::from(*c))
                .collect(),
            eraser_color: None,
            preset: None,
        }
    }
}

impl Config {
    /// Reject settings the editor cannot be built from
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.canvas.size == 0 {
            bail!("canvas.size must be at least 1 pixel");
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            bail!(
                "canvas must not be empty (got {}x{})",
                self.canvas.width,
                self.canvas.height
            );
        }
        Ok(())
    }

    /// Palette colors and eraser after applying the preset, if any.
    ///
    /// An explicit `eraser_color` wins over the preset's own eraser.
    pub fn resolve_palette(
        &self,
        presets: &PresetManager,
    ) -> anyhow::Result<(Vec<ColorSpec>, Option<ColorSpec>)> {
        let Some(name) = self.palette.preset.as_deref() else {
            return Ok((self.palette.colors.clone(), self.palette.eraser_color.clone()));
        };

        let preset = presets.get(name).with_context(|| {
            format!(
                "unknown palette preset {:?} (available: {})",
                name,
                presets.list().join(", ")
            )
        })?;

        let eraser = self
            .palette
            .eraser_color
            .clone()
            .or_else(|| preset.eraser_color.clone());
        Ok((preset.colors.clone(), eraser))
    }

    /// Build editor options, sending updates to `update`
    pub fn editor_options(
        &self,
        presets: &PresetManager,
        update: Option<ChangeSink>,
    ) -> anyhow::Result<EditorOptions> {
        self.validate()?;
        let (palette, eraser_color) = self.resolve_palette(presets)?;

        Ok(EditorOptions {
            size: self.canvas.size,
            palette,
            eraser_color,
            border_color: self.canvas.border_color.clone(),
            surface: self.canvas.surface(),
            update,
        })
    }
}

/// Loads and saves the configuration file
pub struct ConfigManager {
    config: Config,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a config manager for the default location
    pub fn new() -> anyhow::Result<Self> {
        Self::with_path(config_dir().join("config.toml"))
    }

    /// Create a config manager for a specific file.
    ///
    /// A missing file yields the defaults (plus environment overrides).
    pub fn with_path(config_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.into();
        let config = Self::load_from_file(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;

        if config_path.exists() {
            tracing::info!("Configuration loaded from {}", config_path.display());
        } else {
            tracing::debug!("No config at {}, using defaults", config_path.display());
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Load configuration from file
    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("PIXELPICK_").split("__"));

        Ok(figment.extract()?)
    }

    /// Get current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Update configuration
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        f(&mut self.config);
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(&self.config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)?;
        tracing::info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }
}
