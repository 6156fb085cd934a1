//! Editor font configuration.
//!
//! A plain value: the selection dialog produces a `FontConfig`, the app
//! hands it to the one editor widget. No shared mutable cells.

use egui::{FontFamily, FontId};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_SIZE: f32 = 8.0;
pub const MAX_SIZE: f32 = 72.0;

/// Sizes offered by the font-size picker.
pub const SIZE_STEPS: &[f32] = &[
    8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0, 36.0, 48.0, 64.0, 72.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontKind {
    Proportional,
    Monospace,
}

impl FontKind {
    pub fn label(&self) -> &'static str {
        match self {
            FontKind::Proportional => "proportional",
            FontKind::Monospace => "monospace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: FontKind,
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: FontKind::Proportional,
            size: 16.0,
        }
    }
}

impl FontConfig {
    /// Clamp the size into the supported range.
    pub fn clamped(mut self) -> Self {
        self.size = self.size.clamp(MIN_SIZE, MAX_SIZE);
        self
    }

    /// The `FontId` the editor widget renders with.
    pub fn font_id(&self) -> FontId {
        let family = match self.family {
            FontKind::Proportional => FontFamily::Proportional,
            FontKind::Monospace => FontFamily::Monospace,
        };
        FontId::new(self.size, family)
    }

    pub fn load(config_path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&contents).map_err(std::io::Error::from)?;
        Ok(config.clamped())
    }

    pub fn save(&self, config_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        std::fs::write(config_path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_range() {
        let config = FontConfig::default();
        assert_eq!(config, config.clamped());
    }

    #[test]
    fn test_clamping() {
        let tiny = FontConfig {
            family: FontKind::Monospace,
            size: 2.0,
        };
        assert_eq!(tiny.clamped().size, MIN_SIZE);

        let huge = FontConfig {
            family: FontKind::Proportional,
            size: 500.0,
        };
        assert_eq!(huge.clamped().size, MAX_SIZE);
    }

    #[test]
    fn test_font_id_mapping() {
        let config = FontConfig {
            family: FontKind::Monospace,
            size: 14.0,
        };
        let id = config.font_id();
        assert_eq!(id.size, 14.0);
        assert_eq!(id.family, FontFamily::Monospace);
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("font.json");

        let config = FontConfig {
            family: FontKind::Monospace,
            size: 20.0,
        };
        config.save(&config_path).unwrap();
        assert_eq!(FontConfig::load(&config_path).unwrap(), config);
    }
}
