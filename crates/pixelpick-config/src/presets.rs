//! Palette presets
//!
//! PixelPick ships a handful of named palettes. Custom presets can be loaded
//! from TOML files with the same shape:
//!
//! ```toml
//! name = "Sunset"
//! description = "Warm evening tones"
//! colors = ["#ffcc88", "#ff8844", "#aa3322"]
//! eraser_color = "#000000"
//! ```

use pixelpick_core::ColorSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the preset used when nothing else is configured
pub const DEFAULT_PRESET: &str = "classic";

/// A named palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalettePreset {
    /// Preset name, used for lookup
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Colors in cycling order
    pub colors: Vec<ColorSpec>,
    /// Eraser override for this preset
    #[serde(default)]
    pub eraser_color: Option<ColorSpec>,
}

impl PalettePreset {
    fn builtin(name: &str, description: &str, colors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            colors: colors.iter().map(|c| ColorSpec::from(*c)).collect(),
            eraser_color: None,
        }
    }

    /// White, black, red, blue, yellow, green
    pub fn classic() -> Self {
        Self::builtin(
            DEFAULT_PRESET,
            "The classic six-color palette",
            &pixelpick_core::DEFAULT_PALETTE,
        )
    }

    /// Four-shade handheld green
    pub fn gameboy() -> Self {
        let mut preset = Self::builtin(
            "gameboy",
            "Four shades of handheld green",
            &["#9bbc0f", "#8bac0f", "#306230", "#0f380f"],
        );
        preset.eraser_color = Some(ColorSpec::from("#9bbc0f"));
        preset
    }

    pub fn grayscale() -> Self {
        Self::builtin(
            "grayscale",
            "White to black in four steps",
            &["#ffffff", "#aaaaaa", "#555555", "#000000"],
        )
    }

    pub fn pico8() -> Self {
        Self::builtin(
            "pico8",
            "The sixteen PICO-8 colors",
            &[
                "#000000", "#1d2b53", "#7e2553", "#008751", "#ab5236", "#5f574f", "#c2c3c7",
                "#fff1e8", "#ff004d", "#ffa300", "#ffec27", "#00e436", "#29adff", "#83769c",
                "#ff77a8", "#ffccaa",
            ],
        )
    }
}

/// Registry of built-in and custom presets
pub struct PresetManager {
    presets: HashMap<String, PalettePreset>,
}

impl PresetManager {
    pub fn new() -> Self {
        let mut presets = HashMap::new();

        let builtins = vec![
            PalettePreset::classic(),
            PalettePreset::gameboy(),
            PalettePreset::grayscale(),
            PalettePreset::pico8(),
        ];

        for preset in builtins {
            presets.insert(preset.name.clone(), preset);
        }

        Self { presets }
    }

    /// List all available presets, sorted by name
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Load custom preset from file
    pub fn load_from_file(&mut self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(path)?;
        let preset: PalettePreset = toml::from_str(&content)?;
        tracing::info!("Loaded palette preset {:?}", preset.name);
        self.presets.insert(preset.name.clone(), preset);
        Ok(())
    }

    /// Get preset by name
    pub fn get(&self, name: &str) -> Option<&PalettePreset> {
        self.presets.get(name)
    }
}

impl Default for PresetManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpick_core::Palette;
    use std::io::Write;

    #[test]
    fn test_builtin_presets() {
        let manager = PresetManager::new();
        assert_eq!(manager.list(), vec!["classic", "gameboy", "grayscale", "pico8"]);
    }

    #[test]
    fn test_builtin_presets_parse() {
        let manager = PresetManager::new();
        for name in manager.list() {
            let preset = manager.get(name).unwrap();
            let palette = Palette::new(&preset.colors, preset.eraser_color.as_ref());
            assert!(palette.is_ok(), "{name}");
        }
    }

    #[test]
    fn test_load_custom_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
name = "sunset"
colors = ["#ffcc88", "rgb(255, 136, 68)", [170, 51, 34]]
eraser_color = "#000000"
"##
        )
        .unwrap();

        let mut manager = PresetManager::new();
        manager.load_from_file(file.path()).unwrap();

        let preset = manager.get("sunset").unwrap();
        assert_eq!(preset.colors.len(), 3);
        assert_eq!(preset.description, None);
        assert_eq!(preset.eraser_color, Some(ColorSpec::from("#000000")));
    }
}
