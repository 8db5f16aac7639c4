// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records.
//

pub type SeqFile = Vec<SeqRecord>;

/// Basic facts about an input path, shared by the sequence and motif loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub stem: String,
    pub extension: Option<String>,
    pub dir: PathBuf,
}

impl InputFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        InputFile {
            path: path.to_path_buf(),
            stem: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            extension: path
                .extension()
                .map(|s| s.to_string_lossy().into_owned()),
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        }
    }

    /// Name of an output file derived from this input: same stem, new extension, no
    /// directory (outputs go to the working directory).
    pub fn output_name(&self, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.stem, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_parts() {
        let f = InputFile::new("some/dir/Figure_1.fasta");
        assert_eq!(f.stem, "Figure_1");
        assert_eq!(f.extension.as_deref(), Some("fasta"));
        assert_eq!(f.dir, PathBuf::from("some/dir"));
    }

    #[test]
    fn test_output_name_drops_directory() {
        let f = InputFile::new("some/dir/Figure_1.fasta");
        assert_eq!(f.output_name("png"), PathBuf::from("Figure_1.png"));
    }

    #[test]
    fn test_input_file_without_extension() {
        let f = InputFile::new("genes");
        assert_eq!(f.stem, "genes");
        assert_eq!(f.extension, None);
        assert_eq!(f.output_name("svg"), PathBuf::from("genes.svg"));
    }
}
