use rand::Rng;

use crate::types::{FeatureInterval, FeatureKind, GeneSynthError};

/// Contiguous segments of one feature kind carved out of a local `[0, span)`.
///
/// The segments cover `[leading_slack, span)` without gaps; the uncovered
/// head `[0, leading_slack)` is the space later donated to UTRs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Positions before the first segment
    pub leading_slack: usize,
    /// Segments in ascending order
    pub segments: Vec<FeatureInterval>,
}

impl Partition {
    /// A partition with no segments whose whole span is slack
    #[must_use]
    pub const fn unassigned(span: usize) -> Self {
        Self {
            leading_slack: span,
            segments: Vec::new(),
        }
    }

    /// Total length covered by segments
    #[must_use]
    pub fn covered_length(&self) -> usize {
        self.segments.iter().map(|segment| segment.length).sum()
    }

    /// Slack plus covered length, i.e. the partitioned span
    #[must_use]
    pub fn span(&self) -> usize {
        self.leading_slack + self.covered_length()
    }
}

/// Splits `[0, span)` into `n_features` contiguous segments of `kind`.
///
/// `n_features` dividers are drawn uniformly from `[0, span)` and sorted;
/// segment `i` runs from divider `i` to divider `i + 1` and the last one
/// runs to `span`. With `zero_start` the first divider is pinned to 0 so the
/// segments cover the whole span. Duplicate dividers give zero-length
/// segments.
///
/// # Errors
///
/// Returns [`GeneSynthError::InvalidConfig`] when `n_features` is zero.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::gene::partition::partition_feature_space;
/// use genesynth_core::types::FeatureKind;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(5);
/// let partition = partition_feature_space(1_000, 4, FeatureKind::Exon, true, &mut rng)?;
/// assert_eq!(partition.segments.len(), 4);
/// assert_eq!(partition.segments[0].start, 0);
/// assert_eq!(partition.segments[3].end, 1_000);
/// # Ok::<(), genesynth_core::types::GeneSynthError>(())
/// ```
pub fn partition_feature_space<R: Rng + ?Sized>(
    span: usize,
    n_features: usize,
    kind: FeatureKind,
    zero_start: bool,
    rng: &mut R,
) -> Result<Partition, GeneSynthError> {
    if n_features == 0 {
        return Err(GeneSynthError::InvalidConfig(format!(
            "cannot partition {span} bp into zero {kind} segments"
        )));
    }

    let mut dividers: Vec<usize> = (0..n_features)
        .map(|_| if span == 0 { 0 } else { rng.gen_range(0..span) })
        .collect();
    dividers.sort_unstable();

    if zero_start {
        dividers[0] = 0;
    }

    let segments = dividers
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = dividers.get(i + 1).copied().unwrap_or(span);
            FeatureInterval::new(start, end, kind)
        })
        .collect();

    Ok(Partition {
        leading_slack: dividers[0],
        segments,
    })
}
