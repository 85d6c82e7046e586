//! Output formatting for simulated genes and motif tables.
//!
//! Downstream plotting reads feature tracks as `(start, end, feature)`
//! columns and overlap tooling reads motif tables as `(start, end, strand)`.
//! Both are written here as TSV or JSON, selected by [`OutputFormat`].
//!
//! ## Examples
//!
//! ### Write a simulated track to stdout
//!
//! ```rust
//! use genesynth_core::GeneSimulator;
//! use genesynth_core::config::{GeneConfig, OutputFormat};
//! use genesynth_core::output::write_track;
//! use std::io::stdout;
//!
//! let config = GeneConfig {
//!     gene_length: 2_000,
//!     n_exons: 3,
//!     max_exon_length: 400,
//!     seed: Some(2),
//!     ..Default::default()
//! };
//! let gene = GeneSimulator::new(config)?.simulate()?;
//!
//! write_track(&mut stdout(), &gene.track, OutputFormat::Tsv)?;
//! # Ok::<(), genesynth_core::types::GeneSynthError>(())
//! ```
//!
//! ### Write a motif table to a file
//!
//! ```rust,no_run
//! use genesynth_core::MotifLocator;
//! use genesynth_core::config::OutputFormat;
//! use genesynth_core::output::write_matches;
//! use std::fs::File;
//!
//! let locator = MotifLocator::default();
//! let table = locator.locate("ACGTACGT", "ACGT");
//!
//! let mut output = File::create("matches.json")?;
//! write_matches(&mut output, &table, &locator.config, OutputFormat::Json)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    GeneSynthError,
    config::{MotifSearchConfig, OutputFormat},
    results::{GeneFeatureTrack, MotifMatchTable},
};
use std::io::Write;

mod formats {
    pub mod fasta;
    pub mod json;
    pub mod tsv;
}

pub use formats::fasta::write_gene_fasta;
use formats::{
    json::{write_matches_json, write_named_matches_json, write_track_json},
    tsv::{write_matches_tsv, write_named_matches_tsv, write_track_tsv},
};

/// Writes a gene feature track in the specified format.
///
/// # Errors
///
/// Returns [`GeneSynthError`] if writing or serialization fails.
pub fn write_track<W: Write>(
    writer: &mut W,
    track: &GeneFeatureTrack,
    format: OutputFormat,
) -> Result<(), GeneSynthError> {
    match format {
        OutputFormat::Tsv => write_track_tsv(writer, track),
        OutputFormat::Json => write_track_json(writer, track),
    }
}

/// Writes a motif match table in the specified format.
///
/// Column names come from `config.motif_key`.
///
/// # Errors
///
/// Returns [`GeneSynthError`] if writing or serialization fails.
pub fn write_matches<W: Write>(
    writer: &mut W,
    table: &MotifMatchTable,
    config: &MotifSearchConfig,
    format: OutputFormat,
) -> Result<(), GeneSynthError> {
    match format {
        OutputFormat::Tsv => write_matches_tsv(writer, table, config),
        OutputFormat::Json => write_matches_json(writer, table, config),
    }
}

/// Writes one match table per sequence record, labelled by record id.
///
/// TSV output introduces each table with a `# <id>` line; JSON output is a
/// single object keyed by record id.
///
/// # Errors
///
/// Returns [`GeneSynthError`] if writing or serialization fails.
pub fn write_named_matches<W: Write>(
    writer: &mut W,
    tables: &[(String, MotifMatchTable)],
    config: &MotifSearchConfig,
    format: OutputFormat,
) -> Result<(), GeneSynthError> {
    match format {
        OutputFormat::Tsv => write_named_matches_tsv(writer, tables, config),
        OutputFormat::Json => write_named_matches_json(writer, tables, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureInterval, FeatureKind, MotifMatch};
    use bio::bio_types::strand::Strand;
    use std::io::Cursor;

    fn create_test_track() -> GeneFeatureTrack {
        GeneFeatureTrack::new(vec![
            FeatureInterval::new(0, 100, FeatureKind::Exon),
            FeatureInterval::new(100, 350, FeatureKind::Intron),
            FeatureInterval::new(350, 400, FeatureKind::Exon),
        ])
    }

    #[test]
    fn test_write_track_tsv_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let result = write_track(&mut cursor, &create_test_track(), OutputFormat::Tsv);
        assert!(result.is_ok());

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("start\tend\tfeature\tlength\n"));
        assert!(output.contains("100\t350\tintron\t250"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_write_track_json_format() {
        let mut buffer = Vec::new();
        let result = write_track(&mut buffer, &create_test_track(), OutputFormat::Json);
        assert!(result.is_ok());

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_write_matches_formats() {
        let table = MotifMatchTable::new(
            "ACGT".to_string(),
            vec![MotifMatch::new(-1, 4, Strand::Forward)],
        );
        let config = MotifSearchConfig::default();

        let mut tsv = Vec::new();
        write_matches(&mut tsv, &table, &config, OutputFormat::Tsv).unwrap();
        assert_eq!(
            String::from_utf8(tsv).unwrap(),
            "motif.start\tmotif.end\tmotif.strand\n-1\t4\t+\n"
        );

        let mut json = Vec::new();
        write_matches(&mut json, &table, &config, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed[0]["motif.start"], -1);
    }
}
