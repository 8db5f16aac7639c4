// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Feature extraction: exon and intron runs (encoded by letter case) and motif occurrences.

pub mod interval;
pub mod motifs;
pub mod runs;

use log::debug;

use crate::features::{
    interval::Interval,
    motifs::{MotifHit, MotifSet},
    runs::{exons, introns},
};
use crate::seq::record::SeqRecord;

/// A sequence record together with everything found in it. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub record: SeqRecord,
    pub exons: Vec<Interval>,
    pub introns: Vec<Interval>,
    pub motifs: Vec<MotifHit>,
}

impl Annotation {
    pub fn new(record: SeqRecord, motifs: &MotifSet) -> Self {
        let introns = introns(&record.sequence);
        let exons = exons(&record.sequence);
        let motifs = motifs.scan(&record.sequence);
        debug!(
            "{}: {} exon(s), {} intron(s), {} motif(s) hit",
            record.gene,
            exons.len(),
            introns.len(),
            motifs.len()
        );
        Annotation {
            record,
            exons,
            introns,
            motifs,
        }
    }

    pub fn gene(&self) -> &str {
        &self.record.gene
    }

    pub fn seq_len(&self) -> usize {
        self.record.sequence.len()
    }
}

/// Annotates every record against the same motif set. Records are independent of each other.
pub fn annotate(records: Vec<SeqRecord>, motifs: &MotifSet) -> Vec<Annotation> {
    records
        .into_iter()
        .map(|rec| Annotation::new(rec, motifs))
        .collect()
}
