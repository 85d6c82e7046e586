//! Nucleotide sequence generation and manipulation.
//!
//! ## Modules
//!
//! - [`sampler`]: Weighted random draws over the `A, C, G, T` alphabet
//! - [`io`]: FASTA file reading
//!
//! ## Examples
//!
//! ### Reverse complement
//!
//! ```rust
//! use genesynth_core::sequence::reverse_complement;
//!
//! assert_eq!(reverse_complement("AACGTN"), "NACGTT");
//! ```
//!
//! ### Draw a biased sequence
//!
//! ```rust
//! use genesynth_core::config::BaseWeights;
//! use genesynth_core::sequence::sampler::WeightedBaseSampler;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let sampler = WeightedBaseSampler::new(&BaseWeights { g: 3.0, ..Default::default() })?;
//! let mut rng = StdRng::seed_from_u64(1);
//! let sequence = sampler.sample(100, &mut rng);
//! assert_eq!(sequence.len(), 100);
//! # Ok::<(), genesynth_core::types::GeneSynthError>(())
//! ```

pub mod io;
pub mod sampler;

use bio::alphabets::dna;

pub use io::*;

/// Reverse complement of a nucleotide string.
///
/// Pairs `A↔T` and `C↔G` (case preserved), maps IUPAC ambiguity codes to
/// their complements, leaves `N` as `N`, and reverses the order.
#[must_use]
pub fn reverse_complement(sequence: &str) -> String {
    String::from_utf8_lossy(&dna::revcomp(sequence.as_bytes())).into_owned()
}

/// Fraction of `G` and `C` among all positions (case-insensitive).
///
/// Returns `0.0` for an empty sequence.
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|base| matches!(base.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc as f64 / sequence.len() as f64
}
