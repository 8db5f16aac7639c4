// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fmt;

use hex_color::HexColor;

use crate::errors::MotifMarkError;

/// Default alpha of motif colors; motifs overlap exons and each other.
pub const MOTIF_ALPHA: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, alpha: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Rgba { r, g, b, alpha }
    }

    /// Parses `#RRGGBB` (default motif alpha) or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Result<Self, MotifMarkError> {
        let s = s.trim();
        if let Ok(c) = HexColor::parse_rgb(s) {
            return Ok(Rgba::rgba(c.r, c.g, c.b, MOTIF_ALPHA));
        }
        let c = HexColor::parse_rgba(s).map_err(|_| MotifMarkError::Color(s.to_string()))?;
        Ok(Rgba::rgba(c.r, c.g, c.b, c.a as f32 / 255.0))
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// `#rrggbb`, alpha left out.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.hex())
        } else {
            write!(f, "{}@{}", self.hex(), self.alpha)
        }
    }
}

pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const DARK_GREY: Rgba = Rgba::rgb(90, 90, 90);

pub const DEFAULT_COLORS: [Rgba; 9] = [
    Rgba::rgba(31, 119, 180, MOTIF_ALPHA),  // blue
    Rgba::rgba(255, 127, 14, MOTIF_ALPHA),  // orange
    Rgba::rgba(44, 160, 44, MOTIF_ALPHA),   // green
    Rgba::rgba(214, 39, 40, MOTIF_ALPHA),   // red
    Rgba::rgba(148, 103, 189, MOTIF_ALPHA), // purple
    Rgba::rgba(140, 86, 75, MOTIF_ALPHA),   // brown
    Rgba::rgba(227, 119, 194, MOTIF_ALPHA), // pink
    Rgba::rgba(188, 189, 34, MOTIF_ALPHA),  // olive
    Rgba::rgba(23, 190, 207, MOTIF_ALPHA),  // cyan
];

/// Motif colors, indexed by the motif's position in the motif file. Never cycles: a motif
/// without a color of its own is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Self {
        Palette { colors }
    }

    pub fn from_hex_strings(hexes: &[String]) -> Result<Self, MotifMarkError> {
        let colors = hexes
            .iter()
            .map(|h| Rgba::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> Result<Rgba, MotifMarkError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(MotifMarkError::TooManyMotifs {
                motifs: index + 1,
                colors: self.colors.len(),
            })
    }

    pub fn check_fits(&self, num_motifs: usize) -> Result<(), MotifMarkError> {
        if num_motifs > self.colors.len() {
            return Err(MotifMarkError::TooManyMotifs {
                motifs: num_motifs,
                colors: self.colors.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_palette_has_nine_colors() {
        let p = Palette::default();
        assert_eq!(p.len(), 9);
        assert_eq!(p.color(0).unwrap().hex(), "#1f77b4");
        assert_eq!(p.color(8).unwrap().hex(), "#17becf");
        assert!(p.check_fits(9).is_ok());
    }

    #[test]
    fn test_tenth_motif_is_an_error() {
        let p = Palette::default();
        assert!(matches!(
            p.check_fits(10),
            Err(MotifMarkError::TooManyMotifs {
                motifs: 10,
                colors: 9
            })
        ));
        assert!(p.color(9).is_err());
    }

    #[test]
    fn test_from_hex_default_alpha() {
        let c = Rgba::from_hex("#ff8000").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 128, 0));
        assert_relative_eq!(c.alpha, MOTIF_ALPHA);
    }

    #[test]
    fn test_from_hex_explicit_alpha() {
        let c = Rgba::from_hex("#ff800080").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 128, 0));
        assert_relative_eq!(c.alpha, 128.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bad_hex() {
        assert!(matches!(
            Rgba::from_hex("orange"),
            Err(MotifMarkError::Color(_))
        ));
        assert!(Palette::from_hex_strings(&[String::from("#12345")]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DARK_GREY.to_string(), "#5a5a5a");
        assert_eq!(DEFAULT_COLORS[1].to_string(), "#ff7f0e@0.75");
    }
}
