use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FONT_SIZE: u32 = 180;
pub const DEFAULT_FONT_COLOR: &str = "#86529f";
pub const DEFAULT_OUTPUT_DIR: &str = "certificates";

/// Upward shift applied after vertical centering, in pixels.
pub const DEFAULT_VERTICAL_OFFSET: f32 = 30.0;

/// Everything the renderer needs to know, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub template_path: PathBuf,

    pub font_path: PathBuf,

    /// Em size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// `#rgb`, `#rrggbb`, `#rrggbbaa` or a CSS color name
    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_vertical_offset")]
    pub vertical_offset: f32,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_font_color() -> String {
    DEFAULT_FONT_COLOR.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_vertical_offset() -> f32 {
    DEFAULT_VERTICAL_OFFSET
}

impl RenderConfig {
    pub fn new(template_path: impl Into<PathBuf>, font_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            font_path: font_path.into(),
            font_size: DEFAULT_FONT_SIZE,
            font_color: DEFAULT_FONT_COLOR.to_string(),
            output_dir: default_output_dir(),
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
        }
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_color(mut self, font_color: impl Into<String>) -> Self {
        self.font_color = font_color.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Lädt die Konfiguration aus einer JSON-Datei
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: RenderConfig = serde_json::from_str(
            r#"{ "template_path": "template.png", "font_path": "font.ttf" }"#,
        )
        .unwrap();

        assert_eq!(config, RenderConfig::new("template.png", "font.ttf"));
        assert_eq!(config.font_size, 180);
        assert_eq!(config.font_color, "#86529f");
        assert_eq!(config.output_dir, PathBuf::from("certificates"));
        assert_eq!(config.vertical_offset, 30.0);
    }

    #[test]
    fn test_explicit_fields_win() {
        let config: RenderConfig = serde_json::from_str(
            r#"{
                "template_path": "t.png",
                "font_path": "f.ttf",
                "font_size": 96,
                "font_color": "navy",
                "output_dir": "out"
            }"#,
        )
        .unwrap();

        assert_eq!(config.font_size, 96);
        assert_eq!(config.font_color, "navy");
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_missing_resource_paths_rejected() {
        let result: std::result::Result<RenderConfig, _> =
            serde_json::from_str(r#"{ "font_size": 12 }"#);
        assert!(result.is_err());
    }
}
