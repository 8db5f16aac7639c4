// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A record for sequences: the full header line, the gene name taken from it, and the raw
// sequence. Case in the sequence is meaningful: upper case is exonic, lower case intronic.

pub const HEADER_MARKER: char = '>';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub gene: String,
    pub sequence: String,
}

impl SeqRecord {
    /// Starts a record from its header line (marker included). The body starts out empty.
    pub fn new(header: &str) -> Self {
        SeqRecord {
            header: header.to_string(),
            gene: gene_name(header),
            sequence: String::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.sequence.push_str(line);
    }
}

/// First whitespace-delimited token of the header, without its leading marker character.
pub fn gene_name(header: &str) -> String {
    let token = header.split_whitespace().next().unwrap_or("");
    let mut chars = token.chars();
    chars.next();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_name_strips_marker_and_description() {
        assert_eq!(gene_name(">GENE1 some description"), "GENE1");
        assert_eq!(gene_name(">INSR\tchr19:7150261-7150808"), "INSR");
    }

    #[test]
    fn test_gene_name_degenerate_headers() {
        assert_eq!(gene_name(">"), "");
        assert_eq!(gene_name(""), "");
        assert_eq!(gene_name("> spaced"), "");
    }

    #[test]
    fn test_push_line_appends_in_order() {
        let mut rec = SeqRecord::new(">G1 desc");
        rec.push_line("ACGT");
        rec.push_line("acgt");
        assert_eq!(rec.header, ">G1 desc");
        assert_eq!(rec.gene, "G1");
        assert_eq!(rec.sequence, "ACGTacgt");
    }
}
