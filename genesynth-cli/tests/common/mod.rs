#![allow(dead_code)]

use assert_cmd::Command;

/// Runs `genesynth` with the given arguments and returns stdout on success
pub fn run_genesynth(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("genesynth")?;
    cmd.args(args).env_remove("RUST_LOG");

    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Parsed row of a feature track TSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    pub start: usize,
    pub end: usize,
    pub feature: String,
    pub length: usize,
}

/// Parse a feature track TSV, skipping the header line
pub fn parse_track_tsv(text: &str) -> Vec<TrackRow> {
    text.lines()
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 4, "malformed track row: {line}");
            TrackRow {
                start: fields[0].parse().unwrap(),
                end: fields[1].parse().unwrap(),
                feature: fields[2].to_string(),
                length: fields[3].parse().unwrap(),
            }
        })
        .collect()
}

/// Assert that rows tile `[0, gene_length)` with no gaps or overlaps
pub fn assert_contiguous(rows: &[TrackRow], gene_length: usize) {
    assert!(!rows.is_empty());
    assert_eq!(rows[0].start, 0);
    for pair in rows.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap between {pair:?}");
    }
    assert_eq!(rows[rows.len() - 1].end, gene_length);
    assert_eq!(rows.iter().map(|row| row.length).sum::<usize>(), gene_length);
}
