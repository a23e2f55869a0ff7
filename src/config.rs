use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::state::{CanvasSize, SceneModel, StyleSettings};
use crate::tool::ToolKind;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SKETCHPAD_CONFIG";

/// Config file looked up in the working directory when `CONFIG_ENV` is unset
pub const DEFAULT_CONFIG_FILE: &str = "sketchpad.json";

/// Startup settings. Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old files
pub struct AppConfig {
    pub tool: ToolKind,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub background_color: Color32,
    pub stroke_width: f32,
    pub canvas: CanvasSize,
    /// Where native builds write exported images
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let style = StyleSettings::default();
        Self {
            tool: ToolKind::default(),
            stroke_color: style.stroke_color,
            fill_color: style.fill_color,
            background_color: style.background_color,
            stroke_width: style.stroke_width,
            canvas: CanvasSize::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn style(&self) -> StyleSettings {
        let mut style = StyleSettings {
            stroke_color: self.stroke_color,
            fill_color: self.fill_color,
            stroke_width: StyleSettings::default().stroke_width,
            background_color: self.background_color,
        };
        style.set_stroke_width(self.stroke_width);
        style
    }

    /// A fresh scene using these settings
    pub fn scene_model(&self) -> SceneModel {
        SceneModel::new(self.tool, self.style(), self.canvas)
    }

    /// Load the config file, falling back to defaults when it is absent or malformed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn try_load() -> Result<Option<Self>, ConfigError> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(None);
                }
                path
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json(
            r#"{ "tool": "ellipse", "stroke_width": 250, "canvas": { "width": 600, "height": 600 } }"#,
        )
        .unwrap();

        assert_eq!(config.tool, ToolKind::Ellipse);
        assert_eq!(config.canvas, CanvasSize::new(600, 600));

        let scene = config.scene_model();
        assert_eq!(scene.tool(), ToolKind::Ellipse);
        assert_eq!(scene.style().stroke_width, 100.0);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(matches!(
            AppConfig::from_json("{ \"tool\": \"spray\" }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
