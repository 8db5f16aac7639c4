// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::MotifMarkError;

/// Reads one motif pattern per line, in file order. Blank lines come back as empty patterns.
pub fn read_motif_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, MotifMarkError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MotifMarkError::open(path, e))?;
    let reader = BufReader::new(file);
    Ok(reader.lines().collect::<Result<Vec<String>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_motif_file() {
        let motifs = read_motif_file("tests/data/motifs.txt").expect("Test file not found");
        assert_eq!(motifs, vec!["ygcy", "GCAUG", "catag", "YYYYYYYYYY"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let motifs = read_motif_file("tests/data/motifs-blank.txt").expect("Test file not found");
        assert_eq!(motifs, vec!["ygc", "", "tgc"]);
    }
}
