// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::Path;

use log::info;
use resvg::{tiny_skia, usvg};

use crate::errors::MotifMarkError;

/// Rasterises an SVG document and writes it as a PNG of the document's size.
pub fn write_png(svg: &str, path: &Path) -> Result<(), MotifMarkError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| MotifMarkError::Render(format!("SVG parse error: {}", e)))?;
    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(MotifMarkError::EmptyCanvas)?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .map_err(|e| MotifMarkError::Render(format!("PNG write error: {}", e)))?;
    info!(
        "Wrote {} ({}x{})",
        path.display(),
        size.width(),
        size.height()
    );
    Ok(())
}
