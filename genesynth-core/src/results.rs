use std::ops::Index;

use bio::bio_types::strand::Strand;
use serde::Serialize;

use crate::types::{FeatureInterval, FeatureKind, GeneSynthError, MotifMatch};

/// The ordered feature annotation of one synthetic gene.
///
/// Intervals are sorted by start and tile `[0, gene_length)` without gaps
/// or overlaps. A track is built once per simulation and never mutated.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::results::GeneFeatureTrack;
/// use genesynth_core::types::{FeatureInterval, FeatureKind};
///
/// let track = GeneFeatureTrack::new(vec![
///     FeatureInterval::new(0, 10, FeatureKind::Exon),
///     FeatureInterval::new(10, 30, FeatureKind::Intron),
///     FeatureInterval::new(30, 45, FeatureKind::Exon),
/// ]);
/// assert_eq!(track.total_length(), 45);
/// assert_eq!(track.exons().count(), 2);
/// assert!(track.validate_contiguity(45).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct GeneFeatureTrack {
    intervals: Vec<FeatureInterval>,
}

impl GeneFeatureTrack {
    #[must_use]
    pub const fn new(intervals: Vec<FeatureInterval>) -> Self {
        Self { intervals }
    }

    #[must_use]
    pub fn intervals(&self) -> &[FeatureInterval] {
        &self.intervals
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureInterval> {
        self.intervals.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Intervals of one feature kind, in track order
    pub fn of_kind(&self, kind: FeatureKind) -> impl Iterator<Item = &FeatureInterval> {
        self.intervals.iter().filter(move |interval| interval.kind == kind)
    }

    pub fn exons(&self) -> impl Iterator<Item = &FeatureInterval> {
        self.of_kind(FeatureKind::Exon)
    }

    pub fn introns(&self) -> impl Iterator<Item = &FeatureInterval> {
        self.of_kind(FeatureKind::Intron)
    }

    #[must_use]
    pub fn utr5(&self) -> Option<&FeatureInterval> {
        self.of_kind(FeatureKind::Utr5).next()
    }

    #[must_use]
    pub fn utr3(&self) -> Option<&FeatureInterval> {
        self.of_kind(FeatureKind::Utr3).next()
    }

    /// First start and last end of the track
    #[must_use]
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((self.intervals.first()?.start, self.intervals.last()?.end))
    }

    /// Sum of interval lengths
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.intervals.iter().map(|interval| interval.length).sum()
    }

    /// Checks that the track tiles exactly `[0, gene_length)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::InvalidConfig`] naming the first gap,
    /// overlap or boundary mismatch found.
    pub fn validate_contiguity(&self, gene_length: usize) -> Result<(), GeneSynthError> {
        let Some((start, end)) = self.span() else {
            return Err(GeneSynthError::InvalidConfig("track is empty".to_string()));
        };
        if start != 0 || end != gene_length {
            return Err(GeneSynthError::InvalidConfig(format!(
                "track spans [{start}, {end}) instead of [0, {gene_length})"
            )));
        }
        if let Some(pair) = self
            .intervals
            .windows(2)
            .find(|pair| pair[0].end != pair[1].start)
        {
            return Err(GeneSynthError::InvalidConfig(format!(
                "{} is not followed contiguously by {}",
                pair[0], pair[1]
            )));
        }
        Ok(())
    }
}

impl Index<usize> for GeneFeatureTrack {
    type Output = FeatureInterval;

    fn index(&self, index: usize) -> &Self::Output {
        &self.intervals[index]
    }
}

impl<'a> IntoIterator for &'a GeneFeatureTrack {
    type Item = &'a FeatureInterval;
    type IntoIter = std::slice::Iter<'a, FeatureInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Summary of a simulated gene.
///
/// # Examples
///
/// ```rust
/// # use genesynth_core::results::GeneInfo;
/// let info = GeneInfo {
///     header: "GeneSynth_Seq_1".to_string(),
///     gene_length: 50_000,
///     exon_sum: 18_250,
///     intron_sum: 31_750,
///     gc_content: 0.5,
///     seed: Some(42),
/// };
///
/// println!("{}: {} bp, {} bp exonic", info.header, info.gene_length, info.exon_sum);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneInfo {
    /// Identifier used when the sequence is written as FASTA
    pub header: String,

    /// Configured and realized gene length in base pairs
    pub gene_length: usize,

    /// Sum of the drawn exon lengths.
    ///
    /// Exon space not covered by exon segments becomes UTR donor space.
    pub exon_sum: usize,

    /// `gene_length - exon_sum`
    pub intron_sum: usize,

    /// GC content of the drawn sequence as a fraction (0.0 to 1.0).
    pub gc_content: f64,

    /// Seed the simulator was built with, if any
    pub seed: Option<u64>,
}

/// A simulated gene: its body sequence and feature annotation.
#[derive(Debug, Clone)]
pub struct SyntheticGene {
    /// Gene body drawn from the configured base weights
    pub sequence: String,

    /// Exon/intron/UTR annotation covering the whole sequence
    pub track: GeneFeatureTrack,

    /// Metadata about the simulation
    pub info: GeneInfo,
}

/// All motif occurrences on both strands of one sequence, sorted by start.
///
/// Entries may overlap each other; every matching window is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotifMatchTable {
    motif: String,
    matches: Vec<MotifMatch>,
}

impl MotifMatchTable {
    /// Builds a table, sorting the matches by start.
    ///
    /// The sort is stable, so plus-strand matches precede minus-strand
    /// matches sharing a start when given in that order.
    #[must_use]
    pub fn new(motif: String, mut matches: Vec<MotifMatch>) -> Self {
        matches.sort_by_key(|m| m.start);
        Self { motif, matches }
    }

    /// An empty table for a motif that could not be searched
    #[must_use]
    pub const fn empty(motif: String) -> Self {
        Self {
            motif,
            matches: Vec::new(),
        }
    }

    /// The motif actually searched, after wildcard trimming
    #[must_use]
    pub fn motif(&self) -> &str {
        &self.motif
    }

    #[must_use]
    pub fn matches(&self) -> &[MotifMatch] {
        &self.matches
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotifMatch> {
        self.matches.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn plus_strand(&self) -> impl Iterator<Item = &MotifMatch> {
        self.matches.iter().filter(|m| m.strand == Strand::Forward)
    }

    pub fn minus_strand(&self) -> impl Iterator<Item = &MotifMatch> {
        self.matches.iter().filter(|m| m.strand == Strand::Reverse)
    }
}

impl<'a> IntoIterator for &'a MotifMatchTable {
    type Item = &'a MotifMatch;
    type IntoIter = std::slice::Iter<'a, MotifMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
