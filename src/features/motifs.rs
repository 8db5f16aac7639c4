// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use log::warn;
use regex::Regex;

use crate::errors::MotifMarkError;
use crate::features::interval::Interval;

/// A compiled motif. `index` is its position in the motif set, which selects its palette
/// color.
#[derive(Debug, Clone)]
pub struct Motif {
    pattern: String,
    index: usize,
    regex: Regex,
}

/// All hits of one motif in one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifHit {
    pub index: usize,
    pub interval: Interval,
}

impl Motif {
    pub fn new(pattern: &str, index: usize) -> Result<Self, MotifMarkError> {
        let regex = Regex::new(&motif_regex(pattern)).map_err(|e| MotifMarkError::Pattern {
            motif: pattern.to_string(),
            source: e,
        })?;
        Ok(Motif {
            pattern: pattern.to_string(),
            index,
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Non-overlapping hits in a sequence that has already gone through `normalize()`.
    /// Stops are computed from the length of the motif as written.
    pub fn find_normalized(&self, target: &str) -> Option<MotifHit> {
        let starts: Vec<usize> = self.regex.find_iter(target).map(|m| m.start()).collect();
        Interval::occurrences(&self.pattern, starts).map(|interval| MotifHit {
            index: self.index,
            interval,
        })
    }
}

/// Lower case, RNA to DNA. Only ASCII is touched, so byte offsets are unchanged.
pub fn normalize(seq: &str) -> String {
    seq.to_ascii_lowercase().replace('u', "t")
}

/// Regex source for a motif: normalized, with Y (pyrimidine) expanded to [tc]. Every other
/// character, including the other IUPAC codes, matches itself only.
pub fn motif_regex(pattern: &str) -> String {
    normalize(pattern)
        .chars()
        .map(|c| match c {
            'y' => String::from("[tc]"),
            _ => regex::escape(c.encode_utf8(&mut [0; 4])),
        })
        .collect()
}

/// The motifs of one run, in input order.
#[derive(Debug, Clone, Default)]
pub struct MotifSet {
    motifs: Vec<Motif>,
}

impl MotifSet {
    /// Compiles raw motif lines. Blank lines would match everywhere, so they are skipped;
    /// indices are assigned over the motifs that are kept.
    pub fn compile(patterns: &[String]) -> Result<Self, MotifMarkError> {
        let mut motifs = Vec::new();
        for (lineno, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.trim();
            if pattern.is_empty() {
                warn!("Skipping blank motif on line {}", lineno + 1);
                continue;
            }
            motifs.push(Motif::new(pattern, motifs.len())?);
        }
        Ok(MotifSet { motifs })
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Motif> {
        self.motifs.iter()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.motifs.iter().map(Motif::pattern)
    }

    /// One hit entry per motif that occurs at least once, in motif order.
    pub fn scan(&self, body: &str) -> Vec<MotifHit> {
        let target = normalize(body);
        self.motifs
            .iter()
            .filter_map(|m| m.find_normalized(&target))
            .collect()
    }
}
