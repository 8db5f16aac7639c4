// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

/// A feature found in a sequence: an exon or intron run, or all hits of one motif.
///
/// Positions are 0-based and both ends are inclusive. `starts` and `stops` are parallel and
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    text: String,
    length: usize,
    starts: Vec<usize>,
    stops: Vec<usize>,
}

impl Interval {
    /// A single contiguous run, `text` being the run itself.
    pub fn run(text: &str, start: usize) -> Self {
        let length = text.len();
        Interval {
            text: text.to_string(),
            length,
            starts: vec![start],
            stops: vec![start + length - 1],
        }
    }

    /// All occurrences of `pattern`. Returns None if there are none.
    pub fn occurrences(pattern: &str, starts: Vec<usize>) -> Option<Self> {
        if starts.is_empty() {
            return None;
        }
        let length = pattern.len();
        let stops = starts
            .iter()
            .map(|s| (s + length).saturating_sub(1))
            .collect();
        Some(Interval {
            text: pattern.to_string(),
            length,
            starts,
            stops,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// First (for runs: only) start.
    pub fn start(&self) -> usize {
        self.starts[0]
    }

    /// First (for runs: only) stop.
    pub fn stop(&self) -> usize {
        self.stops[0]
    }

    pub fn occurrence_count(&self) -> usize {
        self.starts.len()
    }

    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.starts.iter().copied().zip(self.stops.iter().copied())
    }
}
