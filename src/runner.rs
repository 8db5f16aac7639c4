// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::path::{Path, PathBuf};

use clap::Parser;
use itertools::Itertools;
use log::info;

use crate::config::load_config;
use crate::draw::{self, layout::IntronPen, DrawSettings};
use crate::errors::MotifMarkError;
use crate::features::{annotate, motifs::MotifSet, Annotation};
use crate::seq::{fasta::read_fasta_file, file::InputFile, motif::read_motif_file};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Sequence file (FastA; upper case = exon, lower case = intron)
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Motif file, one motif per line
    #[arg(short = 'm', long = "motif")]
    motif: PathBuf,

    /// Config file (JSON); default: ./.motifmarkconfig, if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Info mode: print what was found, draw nothing
    #[arg(short, long)]
    info: bool,

    /// Also write an SVG next to the PNG
    #[arg(short, long)]
    svg: bool,

    /// Draw introns the way older versions did (for comparing images)
    #[arg(long = "legacy-introns")]
    legacy_introns: bool,
}

/// Reads both inputs and finds exons, introns and motifs in every record.
pub fn load_inputs(
    seq_path: &Path,
    motif_path: &Path,
) -> Result<(Vec<Annotation>, MotifSet), MotifMarkError> {
    let patterns = read_motif_file(motif_path)?;
    let records = read_fasta_file(seq_path)?;
    info!(
        "Read {} record(s) from {}, {} motif line(s) from {}",
        records.len(),
        seq_path.display(),
        patterns.len(),
        motif_path.display()
    );
    let motifs = MotifSet::compile(&patterns)?;
    Ok((annotate(records, &motifs), motifs))
}

/// Draws the annotated records of `seq_path` into `out_dir`, named after the sequence file.
/// Returns the paths written (PNG last).
pub fn mark_files(
    seq_path: &Path,
    motif_path: &Path,
    out_dir: &Path,
    settings: &DrawSettings,
    write_svg: bool,
) -> Result<Vec<PathBuf>, MotifMarkError> {
    let (annotations, motifs) = load_inputs(seq_path, motif_path)?;
    let scene = draw::scene(&annotations, &motifs, settings)?;
    let input = InputFile::new(seq_path);

    let mut written = Vec::new();
    if write_svg {
        let svg_path = out_dir.join(input.output_name("svg"));
        draw::write_svg(&scene, settings, &svg_path)?;
        written.push(svg_path);
    }
    let png_path = out_dir.join(input.output_name("png"));
    draw::write_png(&scene, settings, &png_path)?;
    written.push(png_path);

    Ok(written)
}

/// One line per record: gene, length, exon and intron counts, and motif hits.
pub fn summary(annotations: &[Annotation], motifs: &MotifSet) -> String {
    let mut out = format!(
        "{} record(s); {} motif(s): {}\n",
        annotations.len(),
        motifs.len(),
        motifs.patterns().join(", ")
    );
    for ann in annotations {
        let hits = if ann.motifs.is_empty() {
            String::from("-")
        } else {
            ann.motifs
                .iter()
                .map(|h| format!("{} x{}", h.interval.text(), h.interval.occurrence_count()))
                .join(", ")
        };
        out.push_str(&format!(
            "{}\tlen={}\texons={}\tintrons={}\tmotifs: {}\n",
            ann.gene(),
            ann.seq_len(),
            ann.exons.len(),
            ann.introns.len(),
            hits
        ));
    }
    out
}

pub fn run() -> Result<(), MotifMarkError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let mut settings = config.draw_settings()?;
    if cli.legacy_introns {
        settings.intron_pen = IntronPen::Legacy;
    }

    if cli.info {
        info!("Running in info mode.");
        let (annotations, motifs) = load_inputs(&cli.file, &cli.motif)?;
        print!("{}", summary(&annotations, &motifs));
        return Ok(());
    }

    // Outputs go to the working directory, whatever the input's directory.
    mark_files(&cli.file, &cli.motif, Path::new("."), &settings, cli.svg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_both_files() {
        assert!(Cli::try_parse_from(["motif-mark", "-f", "a.fa"]).is_err());
        assert!(Cli::try_parse_from(["motif-mark", "-m", "m.txt"]).is_err());
        let cli = Cli::try_parse_from(["motif-mark", "-f", "a.fa", "--motif", "m.txt", "-s"])
            .expect("valid args");
        assert_eq!(cli.file, PathBuf::from("a.fa"));
        assert_eq!(cli.motif, PathBuf::from("m.txt"));
        assert!(cli.svg && !cli.info && !cli.legacy_introns);
    }

    #[test]
    fn test_summary() {
        let (anns, motifs) =
            load_inputs(Path::new("tests/data/test2.fa"), Path::new("tests/data/motifs.txt"))
                .expect("test data");
        let text = summary(&anns, &motifs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "3 record(s); 4 motif(s): ygcy, GCAUG, catag, YYYYYYYYYY"
        );
        assert_eq!(lines[3], "EMPTY\tlen=0\texons=0\tintrons=0\tmotifs: -");
        // The second GCATG overlaps the first, so only one counts.
        assert_eq!(
            lines[2],
            "MBNL\tlen=21\texons=2\tintrons=3\tmotifs: ygcy x2, GCAUG x1"
        );
    }
}
