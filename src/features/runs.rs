// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use crate::features::interval::Interval;

/// Maximal runs of upper-case letters.
pub fn exons(body: &str) -> Vec<Interval> {
    case_runs(body, |b| b.is_ascii_uppercase())
}

/// Maximal runs of lower-case letters.
pub fn introns(body: &str) -> Vec<Interval> {
    case_runs(body, |b| b.is_ascii_lowercase())
}

// Anything that is not in the run (including non-letters) ends it. Sequences are ASCII, so
// byte indices are residue indices.
fn case_runs(body: &str, in_run: fn(u8) -> bool) -> Vec<Interval> {
    let mut result = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &b) in body.as_bytes().iter().enumerate() {
        match (in_run(b), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                result.push(Interval::run(&body[start..i], start));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        result.push(Interval::run(&body[start..], start));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(ivs: &[Interval]) -> Vec<(usize, usize)> {
        ivs.iter().map(|iv| (iv.start(), iv.stop())).collect()
    }

    #[test]
    fn test_exons_and_introns() {
        let body = "ACGTacgtACGT";
        assert_eq!(spans(&exons(body)), vec![(0, 3), (8, 11)]);
        assert_eq!(spans(&introns(body)), vec![(4, 7)]);
        assert_eq!(introns(body)[0].text(), "acgt");
    }

    #[test]
    fn test_single_run_bodies() {
        assert_eq!(spans(&exons("GATTACA")), vec![(0, 6)]);
        assert!(introns("GATTACA").is_empty());
        assert_eq!(spans(&introns("gattaca")), vec![(0, 6)]);
        assert!(exons("gattaca").is_empty());
    }

    #[test]
    fn test_empty_body() {
        assert!(exons("").is_empty());
        assert!(introns("").is_empty());
    }

    #[test]
    fn test_non_letters_end_runs() {
        let body = "AC-GTnn*a";
        assert_eq!(spans(&exons(body)), vec![(0, 1), (3, 4)]);
        assert_eq!(spans(&introns(body)), vec![(5, 6), (8, 8)]);
    }

    #[test]
    fn test_runs_partition_letter_bodies() {
        let bodies = [
            "a",
            "A",
            "aA",
            "Aa",
            "ACGTacgtACGT",
            "ctgtacATGCATGcatgtttcuacgTAGGGuu",
            "gtcaGCTTTGCATacctgtCATGCGGAAAAAAAtgcAA",
        ];
        for body in bodies {
            let mut owner = vec![0u8; body.len()];
            for iv in exons(body).iter().chain(introns(body).iter()) {
                for i in iv.start()..=iv.stop() {
                    owner[i] += 1;
                }
                assert_eq!(iv.len(), iv.stop() - iv.start() + 1);
                assert_eq!(&body[iv.start()..=iv.stop()], iv.text());
            }
            assert!(owner.iter().all(|&n| n == 1), "not a partition: {}", body);
        }
    }
}
