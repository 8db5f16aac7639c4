// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::errors::MotifMarkError;
use crate::seq::file::SeqFile;
use crate::seq::record::{SeqRecord, HEADER_MARKER};

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, MotifMarkError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MotifMarkError::open(path, e))?;
    read_fasta(BufReader::new(file))
}

/// Reads FastA records from any buffered source. Body lines before the first header are
/// dropped; a source without headers yields no records.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, MotifMarkError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;
    let mut orphan_lines = 0;

    for line in reader.lines() {
        let l = line?;
        if l.starts_with(HEADER_MARKER) {
            if let Some(rec) = current_record.take() {
                result.push(rec);
            }
            current_record = Some(SeqRecord::new(&l));
        } else if let Some(rec) = current_record.as_mut() {
            rec.push_line(&l);
        } else {
            orphan_lines += 1;
        }
    }
    if let Some(rec) = current_record {
        result.push(rec);
    }

    if orphan_lines > 0 {
        warn!("Ignored {} line(s) before the first header", orphan_lines);
    }
    Ok(result)
}
