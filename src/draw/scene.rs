// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fmt;

use crate::draw::palette::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// Anything the layout asks a backend to draw. Text is always bold and black; `y` is its
/// baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Line {
        x1: f64,
        x2: f64,
        y: f64,
        width: f64,
        color: Rgba,
    },
    Text {
        x: f64,
        y: f64,
        size: f64,
        anchor: TextAnchor,
        text: String,
    },
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Rect {
                x,
                y,
                width,
                height,
                color,
            } => write!(f, "rect {},{} {}x{} {}", x, y, width, height, color),
            Mark::Line {
                x1,
                x2,
                y,
                width,
                color,
            } => write!(f, "line {}..{} @{} w{} {}", x1, x2, y, width, color),
            Mark::Text {
                x,
                y,
                size,
                anchor,
                text,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                };
                write!(f, "text {},{} {}pt {} {:?}", x, y, size, anchor, text)
            }
        }
    }
}

/// The drawing capability the layout needs. Implementations only have to put primitives at
/// the given coordinates.
pub trait Canvas {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba);

    fn text(&mut self, x: f64, y: f64, size: f64, anchor: TextAnchor, text: &str);
}

/// A laid-out image: canvas size plus marks in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub marks: Vec<Mark>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Scene {
            width,
            height,
            marks: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Replays the marks, in order, onto a canvas.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        for mark in &self.marks {
            match mark {
                Mark::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => canvas.fill_rect(*x, *y, *width, *height, *color),
                Mark::Line {
                    x1,
                    x2,
                    y,
                    width,
                    color,
                } => canvas.stroke_line(*x1, *y, *x2, *y, *width, *color),
                Mark::Text {
                    x,
                    y,
                    size,
                    anchor,
                    text,
                } => canvas.text(*x, *y, *size, *anchor, text),
            }
        }
    }

    /// One mark per line; handy for logs and tests.
    pub fn listing(&self) -> String {
        let mut out = format!("canvas {}x{}\n", self.width, self.height);
        for mark in &self.marks {
            out.push_str(&mark.to_string());
            out.push('\n');
        }
        out
    }
}
