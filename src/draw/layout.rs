// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Deterministic layout: every coordinate in the image is computed here, from the annotated
// records and the motif set alone.

use log::debug;
use serde::Deserialize;

use crate::draw::palette::{Palette, Rgba, DARK_GREY};
use crate::draw::scene::{Mark, Scene, TextAnchor};
use crate::errors::MotifMarkError;
use crate::features::{motifs::MotifSet, Annotation};

pub const CANVAS_WIDTH: f64 = 1200.0;
/// Canvas height per record.
pub const BAND_HEIGHT: f64 = 175.0;

pub const TITLE: &str = "Sequence Annotations";
const TITLE_Y: f64 = 40.0;
const TITLE_SIZE: f64 = 32.0;

const LEGEND_X: f64 = 1000.0;
const LEGEND_TOP: f64 = 30.0;
const LEGEND_STEP: f64 = 25.0;
const SWATCH: f64 = 20.0;
const LEGEND_TEXT_GAP: f64 = 5.0;
const LEGEND_TEXT_SIZE: f64 = 16.0;

const MARGIN_X: f64 = 50.0;
const FIRST_RECORD_Y: f64 = 150.0;
const GENE_TITLE_SIZE: f64 = 24.0;
const GENE_TITLE_GAP: f64 = 50.0;
const RECORD_STEP: f64 = 100.0;

const FEATURE_HEIGHT: f64 = 20.0;
const INTRON_WIDTH: f64 = 2.0;

/// Where intron strokes start.
///
/// `Corrected` strokes each intron from the end of the exon that precedes it in the
/// sequence (or from the sequence origin). `Legacy` walks a pen along the introns and, after
/// each one, skips the length of the exon at list position `i - 1`, wrapping to the last exon
/// for the first intron. Kept for output parity with older images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntronPen {
    #[default]
    Corrected,
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

impl Cursor {
    fn down(self, dy: f64) -> Self {
        Cursor {
            x: self.x,
            y: self.y + dy,
        }
    }
}

pub fn canvas_height(num_records: usize) -> f64 {
    BAND_HEIGHT * num_records as f64
}

pub struct Layout<'a> {
    palette: &'a Palette,
    intron_pen: IntronPen,
}

impl<'a> Layout<'a> {
    pub fn new(palette: &'a Palette, intron_pen: IntronPen) -> Self {
        Layout {
            palette,
            intron_pen,
        }
    }

    pub fn scene(
        &self,
        annotations: &[Annotation],
        motifs: &MotifSet,
    ) -> Result<Scene, MotifMarkError> {
        self.palette.check_fits(motifs.len())?;

        let mut scene = Scene::new(CANVAS_WIDTH, canvas_height(annotations.len()));
        title(&mut scene);
        self.legend(&mut scene, motifs)?;

        let mut cursor = Cursor {
            x: MARGIN_X,
            y: FIRST_RECORD_Y,
        };
        for ann in annotations {
            cursor = self.record(&mut scene, cursor, ann)?;
        }
        debug!("Laid out {} marks", scene.marks.len());

        Ok(scene)
    }

    fn legend(&self, scene: &mut Scene, motifs: &MotifSet) -> Result<(), MotifMarkError> {
        for motif in motifs.iter() {
            let y = LEGEND_TOP + motif.index() as f64 * LEGEND_STEP;
            scene.push(Mark::Rect {
                x: LEGEND_X,
                y,
                width: SWATCH,
                height: SWATCH,
                color: self.palette.color(motif.index())?,
            });
            scene.push(Mark::Text {
                x: LEGEND_X + SWATCH + LEGEND_TEXT_GAP,
                y: y + SWATCH - LEGEND_TEXT_GAP,
                size: LEGEND_TEXT_SIZE,
                anchor: TextAnchor::Start,
                text: motif.pattern().to_string(),
            });
        }
        Ok(())
    }

    // Draws one record's band and returns the cursor for the next one.
    fn record(
        &self,
        scene: &mut Scene,
        cursor: Cursor,
        ann: &Annotation,
    ) -> Result<Cursor, MotifMarkError> {
        scene.push(Mark::Text {
            x: cursor.x,
            y: cursor.y,
            size: GENE_TITLE_SIZE,
            anchor: TextAnchor::Start,
            text: format!("Gene: {}", ann.gene()),
        });
        let cursor = cursor.down(GENE_TITLE_GAP);

        for (x1, x2) in intron_strokes(ann, self.intron_pen) {
            scene.push(Mark::Line {
                x1: cursor.x + x1,
                x2: cursor.x + x2,
                y: cursor.y,
                width: INTRON_WIDTH,
                color: DARK_GREY,
            });
        }

        for exon in &ann.exons {
            scene.push(feature_rect(cursor, exon.start(), exon.len(), DARK_GREY));
        }

        for hit in &ann.motifs {
            let color = self.palette.color(hit.index)?;
            for &start in hit.interval.starts() {
                scene.push(feature_rect(cursor, start, hit.interval.len(), color));
            }
        }

        Ok(cursor.down(RECORD_STEP))
    }
}

fn title(scene: &mut Scene) {
    scene.push(Mark::Text {
        x: scene.width / 2.0,
        y: TITLE_Y,
        size: TITLE_SIZE,
        anchor: TextAnchor::Middle,
        text: TITLE.to_string(),
    });
}

fn feature_rect(cursor: Cursor, start: usize, length: usize, color: Rgba) -> Mark {
    Mark::Rect {
        x: cursor.x + start as f64,
        y: cursor.y - FEATURE_HEIGHT / 2.0,
        width: length as f64,
        height: FEATURE_HEIGHT,
        color,
    }
}

/// Intron strokes as (from, to) offsets relative to the record's origin. Every stroke ends at
/// the end of its intron.
pub fn intron_strokes(ann: &Annotation, pen: IntronPen) -> Vec<(f64, f64)> {
    match pen {
        IntronPen::Corrected => ann
            .introns
            .iter()
            .map(|intron| {
                let from = ann
                    .exons
                    .iter()
                    .take_while(|exon| exon.start() < intron.start())
                    .last()
                    .map(|exon| exon.stop() + 1)
                    .unwrap_or(0);
                (from as f64, (intron.start() + intron.len()) as f64)
            })
            .collect(),
        IntronPen::Legacy => {
            let mut pen_x = 0.0;
            let mut strokes = Vec::with_capacity(ann.introns.len());
            for (i, intron) in ann.introns.iter().enumerate() {
                let end = (intron.start() + intron.len()) as f64;
                strokes.push((pen_x, end));
                let skipped = if i == 0 {
                    ann.exons.last()
                } else {
                    ann.exons.get(i - 1)
                };
                pen_x = end + skipped.map(|exon| exon.len()).unwrap_or(0) as f64;
            }
            strokes
        }
    }
}
