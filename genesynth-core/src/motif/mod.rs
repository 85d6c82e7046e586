//! Bidirectional motif search.
//!
//! A motif is trimmed of leading and trailing `N` wildcards, searched on the
//! plus strand and on the reverse complement, and every hit is reported in
//! the coordinates of the searched sequence.
//!
//! ## Coordinate conventions
//!
//! For a raw hit `[i, j)`:
//!
//! | strand | [`Legacy`](MatchCoordinates::Legacy) | [`HalfOpen`](MatchCoordinates::HalfOpen) |
//! |--------|---------------------------|--------------------------|
//! | `+`    | `(i - 1, j)`              | `(i, j)`                 |
//! | `-`    | `(len - i, len - j)`      | `(len - j, len - i)`     |
//!
//! On the minus strand `i` and `j` are positions in the reverse complement.
//!
//! ## Examples
//!
//! ```rust
//! use genesynth_core::config::MotifSearchConfig;
//! use genesynth_core::motif::locate_motif;
//!
//! let table = locate_motif("ACGTACGT", "NNACGTN", &MotifSearchConfig::default());
//! assert_eq!(table.motif(), "ACGT");
//! assert_eq!(table.plus_strand().count(), 2);
//! ```

pub mod search;

use bio::alphabets::dna;
use bio::bio_types::strand::Strand;
use tracing::{debug, info};

use crate::config::{MatchCoordinates, MotifSearchConfig};
use crate::constants::MOTIF_WILDCARD;
use crate::results::MotifMatchTable;
use crate::types::MotifMatch;

pub use search::find_overlapping;

/// Strips leading and trailing `N` runs from a motif.
///
/// Interior wildcards are kept and matched literally.
///
/// ```rust
/// use genesynth_core::motif::isolate_searchable_motif;
///
/// assert_eq!(isolate_searchable_motif("NNCANNTGN"), "CANNTG");
/// assert_eq!(isolate_searchable_motif("NNN"), "");
/// ```
#[must_use]
pub fn isolate_searchable_motif(motif: &str) -> &str {
    motif.trim_matches(MOTIF_WILDCARD)
}

/// Maps a raw plus-strand span into reported coordinates
#[must_use]
pub fn plus_strand_match(start: usize, end: usize, coordinates: MatchCoordinates) -> MotifMatch {
    let (start, end) = (start as i64, end as i64);
    match coordinates {
        MatchCoordinates::Legacy => MotifMatch::new(start - 1, end, Strand::Forward),
        MatchCoordinates::HalfOpen => MotifMatch::new(start, end, Strand::Forward),
    }
}

/// Maps a raw span in the reverse complement back onto the plus strand
#[must_use]
pub fn minus_strand_match(
    start: usize,
    end: usize,
    sequence_length: usize,
    coordinates: MatchCoordinates,
) -> MotifMatch {
    let length = sequence_length as i64;
    let remapped = MotifMatch::new(length - start as i64, length - end as i64, Strand::Reverse);
    match coordinates {
        MatchCoordinates::Legacy => remapped,
        MatchCoordinates::HalfOpen => {
            let (low, high) = remapped.bounds();
            MotifMatch::new(low, high, Strand::Reverse)
        }
    }
}

/// Finds every occurrence of `motif` on both strands of `sequence`.
///
/// An empty sequence, or a motif that is empty after trimming, gives an
/// empty table. Plus- and minus-strand hits are merged and sorted by start;
/// overlapping hits are all kept.
#[must_use]
pub fn locate_motif(sequence: &str, motif: &str, config: &MotifSearchConfig) -> MotifMatchTable {
    locate_motif_bytes(sequence.as_bytes(), motif, config)
}

/// Same as [`locate_motif`] over raw sequence bytes.
///
/// Coordinates are byte offsets. Bytes outside the nucleotide alphabet are
/// kept in place on both strands, so they never shift a reported position.
#[must_use]
pub fn locate_motif_bytes(
    sequence: &[u8],
    motif: &str,
    config: &MotifSearchConfig,
) -> MotifMatchTable {
    let searchable = isolate_searchable_motif(motif);
    debug!(motif, searchable, "Searching for motif");

    if searchable.is_empty() || sequence.is_empty() {
        return MotifMatchTable::empty(searchable.to_string());
    }

    let pattern = searchable.as_bytes();
    let mut matches: Vec<MotifMatch> = find_overlapping(sequence, pattern)
        .into_iter()
        .map(|(start, end)| plus_strand_match(start, end, config.coordinates))
        .collect();

    let reverse = dna::revcomp(sequence);
    matches.extend(
        find_overlapping(&reverse, pattern)
            .into_iter()
            .map(|(start, end)| minus_strand_match(start, end, sequence.len(), config.coordinates)),
    );

    let table = MotifMatchTable::new(searchable.to_string(), matches);
    info!(
        "Identified {} instances of the {} motif in the provided sequence",
        table.len(),
        searchable
    );
    table
}
