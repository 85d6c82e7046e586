use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::WeightedIndex;

use crate::config::BaseWeights;
use crate::constants::DNA_ALPHABET;
use crate::types::GeneSynthError;

/// Draws independent bases from `A, C, G, T` according to a weight simplex.
///
/// The weights are checked once, when the sampler is built; sampling itself
/// cannot fail.
#[derive(Debug, Clone)]
pub struct WeightedBaseSampler {
    distribution: WeightedIndex<f64>,
    simplex: [f64; 4],
}

impl WeightedBaseSampler {
    /// Builds a sampler for the given weights.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::InvalidWeights`] for negative, non-finite
    /// or all-zero weights.
    pub fn new(weights: &BaseWeights) -> Result<Self, GeneSynthError> {
        let simplex = weights.simplex()?;
        let distribution = WeightedIndex::new(simplex)
            .map_err(|e| GeneSynthError::InvalidWeights(e.to_string()))?;
        Ok(Self {
            distribution,
            simplex,
        })
    }

    /// Normalized probabilities in `A, C, G, T` order
    #[must_use]
    pub const fn simplex(&self) -> [f64; 4] {
        self.simplex
    }

    /// Draws a single base
    pub fn sample_base<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        DNA_ALPHABET[self.distribution.sample(rng)]
    }

    /// Draws `count` bases as raw ASCII bytes
    pub fn sample_bytes<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<u8> {
        (0..count).map(|_| self.sample_base(rng)).collect()
    }

    /// Draws a sequence of `count` bases
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> String {
        self.sample_bytes(count, rng)
            .into_iter()
            .map(char::from)
            .collect()
    }
}
