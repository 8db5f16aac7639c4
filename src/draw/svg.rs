// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use crate::draw::palette::{Rgba, BLACK, WHITE};
use crate::draw::scene::{Canvas, TextAnchor};

/// A canvas that serialises every primitive as an SVG element.
pub struct SvgCanvas {
    out: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64, font_family: &str) -> Self {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            width, height, width, height
        ));
        out.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            WHITE.hex()
        ));
        out.push_str(&format!(
            "<g font-family=\"{}\" font-weight=\"bold\">\n",
            escape_svg(font_family)
        ));
        SvgCanvas { out }
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</g>\n</svg>\n");
        self.out
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>\n",
            x,
            y,
            width,
            height,
            paint("fill", color)
        ));
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba) {
        self.out.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke-width=\"{}\"{}/>\n",
            x1,
            y1,
            x2,
            y2,
            width,
            paint("stroke", color)
        ));
    }

    fn text(&mut self, x: f64, y: f64, size: f64, anchor: TextAnchor, text: &str) {
        let anchor = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        };
        self.out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\"{}>{}</text>\n",
            x,
            y,
            size,
            anchor,
            paint("fill", BLACK),
            escape_svg(text)
        ));
    }
}

// ` fill="#rrggbb"` (or stroke), plus an opacity attribute for translucent colors.
fn paint(attr: &str, color: Rgba) -> String {
    if color.is_opaque() {
        format!(" {}=\"{}\"", attr, color.hex())
    } else {
        format!(
            " {}=\"{}\" {}-opacity=\"{}\"",
            attr,
            color.hex(),
            attr,
            color.alpha
        )
    }
}

fn escape_svg(s: &str) -> String {
    s.chars().map(escape_svg_char).collect()
}

fn escape_svg_char(ch: char) -> String {
    match ch {
        '&' => String::from("&amp;"),
        '<' => String::from("&lt;"),
        '>' => String::from("&gt;"),
        '"' => String::from("&quot;"),
        '\'' => String::from("&#39;"),
        _ => ch.to_string(),
    }
}
