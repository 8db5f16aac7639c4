// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::draw::{layout::IntronPen, palette::Palette, DrawSettings, DEFAULT_FONT_FAMILY};
use crate::errors::MotifMarkError;

pub const CONFIG_FILE_NAME: &str = ".motifmarkconfig";

/// Optional JSON settings. Missing keys keep their defaults; unknown keys are ignored.
///
/// ```json
/// { "palette": ["#1f77b4", "#ff7f0ec0"], "intron_pen": "legacy", "font_family": "DejaVu Sans" }
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct MotifMarkConfig {
    #[serde(default)]
    pub palette: Option<Vec<String>>,
    #[serde(default)]
    pub intron_pen: Option<IntronPen>,
    #[serde(default)]
    pub font_family: Option<String>,
}

impl MotifMarkConfig {
    pub fn from_file(path: &Path) -> Result<Self, MotifMarkError> {
        let text = fs::read_to_string(path).map_err(|e| MotifMarkError::open(path, e))?;
        serde_json::from_str(&text).map_err(|e| MotifMarkError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn draw_settings(&self) -> Result<DrawSettings, MotifMarkError> {
        let palette = match &self.palette {
            Some(hexes) => Palette::from_hex_strings(hexes)?,
            None => Palette::default(),
        };
        Ok(DrawSettings {
            palette,
            intron_pen: self.intron_pen.unwrap_or_default(),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| String::from(DEFAULT_FONT_FAMILY)),
        })
    }
}

/// `.motifmarkconfig` in the working directory, if there is one.
pub fn find_config() -> Option<PathBuf> {
    let path = std::env::current_dir().ok()?.join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

/// Loads the explicit config if given, else the one found in the working directory, else
/// the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<MotifMarkConfig, MotifMarkError> {
    match explicit.map(Path::to_path_buf).or_else(find_config) {
        Some(path) => MotifMarkConfig::from_file(&path),
        None => Ok(MotifMarkConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::palette::DEFAULT_COLORS;

    #[test]
    fn test_config_defaults() {
        let cfg: MotifMarkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MotifMarkConfig::default());
        assert_eq!(cfg.draw_settings().unwrap(), DrawSettings::default());
    }

    #[test]
    fn test_config_all_keys() {
        let cfg: MotifMarkConfig = serde_json::from_str(
            r##"{
                "palette": ["#010203", "#04050680"],
                "intron_pen": "legacy",
                "font_family": "DejaVu Sans",
                "unrelated": 1
            }"##,
        )
        .unwrap();
        let settings = cfg.draw_settings().unwrap();
        assert_eq!(settings.palette.len(), 2);
        assert_eq!(settings.palette.color(1).unwrap().hex(), "#040506");
        assert_eq!(settings.intron_pen, IntronPen::Legacy);
        assert_eq!(settings.font_family, "DejaVu Sans");
    }

    #[test]
    fn test_config_bad_color() {
        let cfg: MotifMarkConfig = serde_json::from_str(r#"{"palette": ["blue"]}"#).unwrap();
        assert!(matches!(cfg.draw_settings(), Err(MotifMarkError::Color(_))));
    }

    #[test]
    fn test_config_bad_pen() {
        let res: Result<MotifMarkConfig, _> = serde_json::from_str(r#"{"intron_pen": "wavy"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"intron_pen": "corrected"}"#).unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.intron_pen, Some(IntronPen::Corrected));
        assert_eq!(
            cfg.draw_settings().unwrap().palette.color(0).unwrap(),
            DEFAULT_COLORS[0]
        );
    }

    #[test]
    fn test_malformed_config_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ palette: ").unwrap();
        let err = MotifMarkConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, MotifMarkError::Config { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
