use rand::Rng;
use tracing::debug;

use crate::config::GeneConfig;
use crate::constants::{MAX_UTR_DIVISOR, MIN_UTR_DIVISOR};
use crate::gene::partition::{Partition, partition_feature_space};
use crate::results::GeneFeatureTrack;
use crate::types::{FeatureInterval, FeatureKind, GeneSynthError};

/// Exon and intron space drawn for one gene, before interleaving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneBodyLayout {
    pub exon_sum: usize,
    pub intron_sum: usize,
    pub exons: Partition,
    pub introns: Partition,
}

impl GeneBodyLayout {
    /// Space not covered by any exon or intron segment
    #[must_use]
    pub const fn donor_space(&self) -> usize {
        self.exons.leading_slack + self.introns.leading_slack
    }
}

/// Draws `n_exons` lengths uniformly from `[min_exon_length, max_exon_length)`
pub fn draw_exon_lengths<R: Rng + ?Sized>(config: &GeneConfig, rng: &mut R) -> Vec<usize> {
    (0..config.n_exons)
        .map(|_| rng.gen_range(config.min_exon_length..config.max_exon_length))
        .collect()
}

/// Splits `exon_sum` and the remaining intron space into segments.
///
/// # Errors
///
/// Returns [`GeneSynthError::UnreconciledSpan`] when the exons overrun the
/// gene or leave fewer than one base per intron.
pub fn layout_gene_body<R: Rng + ?Sized>(
    config: &GeneConfig,
    exon_sum: usize,
    rng: &mut R,
) -> Result<GeneBodyLayout, GeneSynthError> {
    let n_introns = config.n_introns();
    let unreconciled = || GeneSynthError::UnreconciledSpan {
        exon_sum,
        intron_sum: config.gene_length as i64 - exon_sum as i64,
        gene_length: config.gene_length,
        n_introns,
    };

    let intron_sum = config
        .gene_length
        .checked_sub(exon_sum)
        .ok_or_else(unreconciled)?;
    if intron_sum < n_introns {
        return Err(unreconciled());
    }

    debug!(exon_sum, intron_sum, "Drew gene body");

    let exons = partition_feature_space(
        exon_sum,
        config.n_exons,
        FeatureKind::Exon,
        config.zero_start,
        rng,
    )?;
    let introns = if n_introns == 0 {
        Partition::unassigned(intron_sum)
    } else {
        partition_feature_space(
            intron_sum,
            n_introns,
            FeatureKind::Intron,
            config.zero_start,
            rng,
        )?
    };

    Ok(GeneBodyLayout {
        exon_sum,
        intron_sum,
        exons,
        introns,
    })
}

/// Alternates exons and introns, starting and ending on an exon.
///
/// Segments keep their local coordinates. Surplus segments of either kind
/// are appended in order.
#[must_use]
pub fn interleave_features(
    exons: &[FeatureInterval],
    introns: &[FeatureInterval],
) -> Vec<FeatureInterval> {
    let mut interleaved = Vec::with_capacity(exons.len() + introns.len());
    let mut introns = introns.iter();
    for (i, exon) in exons.iter().enumerate() {
        interleaved.push(*exon);
        if i + 1 == exons.len() {
            break;
        }
        if let Some(intron) = introns.next() {
            interleaved.push(*intron);
        }
    }
    interleaved.extend(introns);
    interleaved
}

/// Re-expresses locally placed segments in one global frame.
///
/// The first segment keeps its local start; every later segment starts
/// where the previous one ends and keeps its own length.
#[must_use]
pub fn chain_global_offsets(segments: &[FeatureInterval]) -> Vec<FeatureInterval> {
    let first_start = segments.first().map_or(0, |first| first.start);
    chain_from(segments, first_start)
}

/// Places the gene body between a 5' and a 3' UTR carved from donor space.
///
/// The body is re-anchored to start at 0. When `donor_space` is zero it is
/// returned unchanged apart from that. Otherwise a divisor `r` is drawn from
/// `2..=5`, the 5' UTR takes `donor_space / r` and the 3' UTR the rest, so
/// the result always ends at `body length + donor_space`.
pub fn annotate_utrs<R: Rng + ?Sized>(
    body: &[FeatureInterval],
    donor_space: usize,
    rng: &mut R,
) -> Vec<FeatureInterval> {
    let rebased = chain_from(body, 0);
    if donor_space == 0 {
        return rebased;
    }

    let divisor = rng.gen_range(MIN_UTR_DIVISOR..=MAX_UTR_DIVISOR);
    let utr5_length = donor_space / divisor;
    let utr3_length = donor_space - utr5_length;
    debug!(donor_space, divisor, utr5_length, utr3_length, "Split donor space into UTRs");

    let mut annotated = Vec::with_capacity(body.len() + 2);
    annotated.push(FeatureInterval::new(0, utr5_length, FeatureKind::Utr5));
    annotated.extend(chain_from(body, utr5_length));
    let body_end = annotated.last().map_or(utr5_length, |last| last.end);
    annotated.push(FeatureInterval::new(
        body_end,
        body_end + utr3_length,
        FeatureKind::Utr3,
    ));
    annotated
}

fn chain_from(segments: &[FeatureInterval], start: usize) -> Vec<FeatureInterval> {
    let mut chained = Vec::with_capacity(segments.len());
    let mut cursor = start;
    for segment in segments {
        let placed = segment.anchored_at(cursor);
        cursor = placed.end;
        chained.push(placed);
    }
    chained
}

/// Builds the complete feature track of one gene.
///
/// Draws exon lengths, partitions exon and intron space, interleaves the
/// segments, chains them into a global frame and annotates UTRs. The
/// returned track always tiles `[0, gene_length)`.
///
/// # Errors
///
/// Returns a configuration error when `config` is invalid or the drawn exon
/// lengths cannot be reconciled with `gene_length`.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::config::GeneConfig;
/// use genesynth_core::gene::assemble_gene_track;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = GeneConfig {
///     gene_length: 5_000,
///     n_exons: 4,
///     max_exon_length: 1_000,
///     ..Default::default()
/// };
/// let mut rng = StdRng::seed_from_u64(42);
/// let (track, _layout) = assemble_gene_track(&config, &mut rng)?;
/// assert_eq!(track.total_length(), 5_000);
/// assert_eq!(track.exons().count(), 4);
/// # Ok::<(), genesynth_core::types::GeneSynthError>(())
/// ```
pub fn assemble_gene_track<R: Rng + ?Sized>(
    config: &GeneConfig,
    rng: &mut R,
) -> Result<(GeneFeatureTrack, GeneBodyLayout), GeneSynthError> {
    config.validate()?;

    let exon_sum: usize = draw_exon_lengths(config, rng).iter().sum();
    let layout = layout_gene_body(config, exon_sum, rng)?;

    let interleaved = interleave_features(&layout.exons.segments, &layout.introns.segments);
    let body = chain_global_offsets(&interleaved);
    let intervals = annotate_utrs(&body, layout.donor_space(), rng);

    let track = GeneFeatureTrack::new(intervals);
    track.validate_contiguity(config.gene_length)?;

    Ok((track, layout))
}
