use std::fmt;

use bio::bio_types::strand::Strand;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Kinds of feature that tile a synthetic gene body.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::types::FeatureKind;
///
/// assert_eq!(FeatureKind::Utr5.to_string(), "utr5");
/// assert!(FeatureKind::Utr3.is_utr());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Coding segment
    Exon,
    /// Spliced-out segment between two exons
    Intron,
    /// 5' untranslated region at the head of the gene
    Utr5,
    /// 3' untranslated region at the tail of the gene
    Utr3,
}

impl FeatureKind {
    /// Whether this kind is one of the two untranslated regions
    #[must_use]
    pub const fn is_utr(self) -> bool {
        matches!(self, Self::Utr5 | Self::Utr3)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exon => "exon",
            Self::Intron => "intron",
            Self::Utr5 => "utr5",
            Self::Utr3 => "utr3",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open `[start, end)` interval of one feature kind.
///
/// `length` is always `end - start`; use [`FeatureInterval::new`] so the
/// field cannot drift from the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureInterval {
    /// First position covered (0-based)
    pub start: usize,
    /// One past the last position covered
    pub end: usize,
    /// Feature kind of this interval
    #[serde(rename = "feature")]
    pub kind: FeatureKind,
    /// Number of positions covered
    pub length: usize,
}

impl FeatureInterval {
    /// Create an interval, deriving its length.
    ///
    /// `end` is clamped to `start` so a degenerate interval is empty rather
    /// than underflowing.
    #[must_use]
    pub const fn new(start: usize, end: usize, kind: FeatureKind) -> Self {
        let end = if end < start { start } else { end };
        Self {
            start,
            end,
            kind,
            length: end - start,
        }
    }

    /// Same length and kind, re-anchored to begin at `start`
    #[must_use]
    pub const fn anchored_at(&self, start: usize) -> Self {
        Self::new(start, start + self.length, self.kind)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for FeatureInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.kind, self.start, self.end)
    }
}

/// A motif occurrence expressed in the coordinates of the searched sequence.
///
/// Coordinates are signed: under the legacy convention a plus-strand hit at
/// the first base reports `start == -1`, and minus-strand hits report
/// `start > end`. See [`crate::config::MatchCoordinates`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotifMatch {
    pub start: i64,
    pub end: i64,
    /// Strand the occurrence was found on
    #[serde(serialize_with = "serialize_strand")]
    pub strand: Strand,
}

impl MotifMatch {
    #[must_use]
    pub const fn new(start: i64, end: i64, strand: Strand) -> Self {
        Self { start, end, strand }
    }

    /// `+`, `-` or `.` for the match strand
    #[must_use]
    pub fn strand_symbol(&self) -> &str {
        self.strand.strand_symbol()
    }

    /// Lowest and highest coordinate regardless of orientation
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

fn serialize_strand<S: Serializer>(strand: &Strand, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(strand.strand_symbol())
}

/// Error types that can occur while configuring or running a simulation
#[derive(Error, Debug)]
pub enum GeneSynthError {
    /// Base sampling weights do not form a usable simplex
    #[error("Invalid base weights: {0}")]
    InvalidWeights(String),
    /// Non-positive length or count, or an empty draw range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Realized exon and intron sums cannot tile the configured gene length
    #[error(
        "Exon sum {exon_sum} and intron sum {intron_sum} cannot tile a gene of length \
         {gene_length} with {n_introns} introns"
    )]
    UnreconciledSpan {
        exon_sum: usize,
        intron_sum: i64,
        gene_length: usize,
        n_introns: usize,
    },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// JSON serialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GeneSynthError {
    /// Whether this error belongs to the configuration class, as opposed to
    /// an I/O or formatting failure.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWeights(_) | Self::InvalidConfig(_) | Self::UnreconciledSpan { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_interval_length_is_derived() {
        let interval = FeatureInterval::new(10, 25, FeatureKind::Exon);
        assert_eq!(interval.length, 15);
        assert!(!interval.is_empty());
    }

    #[test]
    fn test_feature_interval_inverted_is_empty() {
        let interval = FeatureInterval::new(30, 20, FeatureKind::Intron);
        assert_eq!(interval.start, 30);
        assert_eq!(interval.end, 30);
        assert!(interval.is_empty());
    }

    #[test]
    fn test_feature_interval_anchor() {
        let interval = FeatureInterval::new(5, 9, FeatureKind::Intron);
        assert_eq!(interval.anchored_at(20), FeatureInterval::new(20, 24, FeatureKind::Intron));
        assert_eq!(interval.anchored_at(0), FeatureInterval::new(0, 4, FeatureKind::Intron));
    }

    #[test]
    fn test_feature_kind_display() {
        assert_eq!(FeatureKind::Exon.to_string(), "exon");
        assert_eq!(FeatureKind::Intron.to_string(), "intron");
        assert_eq!(FeatureKind::Utr5.to_string(), "utr5");
        assert_eq!(FeatureKind::Utr3.to_string(), "utr3");
        assert!(!FeatureKind::Exon.is_utr());
    }

    #[test]
    fn test_motif_match_bounds() {
        let plus = MotifMatch::new(-1, 4, Strand::Forward);
        let minus = MotifMatch::new(8, 4, Strand::Reverse);
        assert_eq!(plus.bounds(), (-1, 4));
        assert_eq!(minus.bounds(), (4, 8));
        assert_eq!(plus.strand_symbol(), "+");
        assert_eq!(minus.strand_symbol(), "-");
    }

    #[test]
    fn test_motif_match_serializes_strand_symbol() {
        let json = serde_json::to_string(&MotifMatch::new(3, 8, Strand::Forward)).unwrap();
        assert_eq!(json, r#"{"start":3,"end":8,"strand":"+"}"#);
    }

    #[test]
    fn test_feature_interval_serializes_feature_column() {
        let json = serde_json::to_string(&FeatureInterval::new(0, 4, FeatureKind::Utr5)).unwrap();
        assert_eq!(json, r#"{"start":0,"end":4,"feature":"utr5","length":4}"#);
    }

    #[test]
    fn test_configuration_error_class() {
        assert!(GeneSynthError::InvalidWeights("zero".into()).is_configuration_error());
        assert!(GeneSynthError::InvalidConfig("zero".into()).is_configuration_error());
        assert!(!GeneSynthError::ParseError("bad".into()).is_configuration_error());
    }
}
