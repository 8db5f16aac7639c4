// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

pub mod layout;
pub mod palette;
pub mod png;
pub mod scene;
pub mod svg;

use std::{fs, path::Path};

use log::info;

use crate::draw::{
    layout::{IntronPen, Layout},
    palette::Palette,
    scene::Scene,
    svg::SvgCanvas,
};
use crate::errors::MotifMarkError;
use crate::features::{motifs::MotifSet, Annotation};

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Everything about the picture that is not data: colors, intron style, font.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSettings {
    pub palette: Palette,
    pub intron_pen: IntronPen,
    pub font_family: String,
}

impl Default for DrawSettings {
    fn default() -> Self {
        DrawSettings {
            palette: Palette::default(),
            intron_pen: IntronPen::default(),
            font_family: String::from(DEFAULT_FONT_FAMILY),
        }
    }
}

pub fn scene(
    annotations: &[Annotation],
    motifs: &MotifSet,
    settings: &DrawSettings,
) -> Result<Scene, MotifMarkError> {
    Layout::new(&settings.palette, settings.intron_pen).scene(annotations, motifs)
}

pub fn to_svg(scene: &Scene, settings: &DrawSettings) -> String {
    let mut canvas = SvgCanvas::new(scene.width, scene.height, &settings.font_family);
    scene.draw(&mut canvas);
    canvas.finish()
}

pub fn write_svg(
    scene: &Scene,
    settings: &DrawSettings,
    path: &Path,
) -> Result<(), MotifMarkError> {
    fs::write(path, to_svg(scene, settings))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// A scene without records has no height and cannot be rasterised.
pub fn write_png(
    scene: &Scene,
    settings: &DrawSettings,
    path: &Path,
) -> Result<(), MotifMarkError> {
    if scene.height <= 0.0 {
        return Err(MotifMarkError::EmptyCanvas);
    }
    self::png::write_png(&to_svg(scene, settings), path)
}
