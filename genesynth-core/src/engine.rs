use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::{GeneConfig, MotifSearchConfig};
use crate::constants::DEFAULT_SEQUENCE_HEADER;
use crate::gene::assemble_gene_track;
use crate::motif::{locate_motif, locate_motif_bytes};
use crate::results::{GeneInfo, MotifMatchTable, SyntheticGene};
use crate::sequence::gc_content;
use crate::sequence::read_fasta_sequences;
use crate::sequence::sampler::WeightedBaseSampler;
use crate::types::GeneSynthError;

/// Simulates synthetic genes from a validated configuration.
///
/// The simulator owns its random generator. Building one with a seed makes
/// every subsequent simulation reproducible; each call advances the
/// generator and returns a fresh, independent [`SyntheticGene`].
///
/// # Examples
///
/// ```rust
/// use genesynth_core::GeneSimulator;
/// use genesynth_core::config::GeneConfig;
///
/// let config = GeneConfig {
///     gene_length: 2_000,
///     n_exons: 3,
///     max_exon_length: 400,
///     seed: Some(1),
///     ..Default::default()
/// };
/// let mut simulator = GeneSimulator::new(config)?;
/// let gene = simulator.simulate()?;
///
/// assert_eq!(gene.sequence.len(), 2_000);
/// assert_eq!(gene.track.total_length(), 2_000);
/// # Ok::<(), genesynth_core::types::GeneSynthError>(())
/// ```
#[derive(Debug)]
pub struct GeneSimulator {
    /// Configuration the simulator was validated against
    config: GeneConfig,
    sampler: WeightedBaseSampler,
    rng: StdRng,
}

impl GeneSimulator {
    /// Validates `config` and prepares the sampler and generator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when [`GeneConfig::validate`] fails.
    pub fn new(config: GeneConfig) -> Result<Self, GeneSynthError> {
        config.validate()?;
        let sampler = WeightedBaseSampler::new(&config.base_weights)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            sampler,
            rng,
        })
    }

    /// Configuration every simulation is drawn from
    #[must_use]
    pub const fn config(&self) -> &GeneConfig {
        &self.config
    }

    /// Draws one gene: its body sequence and its feature track.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::UnreconciledSpan`] when the drawn exon
    /// lengths cannot tile `gene_length`.
    pub fn simulate(&mut self) -> Result<SyntheticGene, GeneSynthError> {
        self.simulate_with_header(DEFAULT_SEQUENCE_HEADER.to_string())
    }

    /// Same as [`GeneSimulator::simulate`], labelling the result `header`.
    ///
    /// # Errors
    ///
    /// See [`GeneSimulator::simulate`].
    pub fn simulate_with_header(&mut self, header: String) -> Result<SyntheticGene, GeneSynthError> {
        let sequence = self.sampler.sample(self.config.gene_length, &mut self.rng);
        let (track, layout) = assemble_gene_track(&self.config, &mut self.rng)?;
        debug!(
            features = track.len(),
            donor_space = layout.donor_space(),
            "Assembled gene track"
        );

        let info = GeneInfo {
            header,
            gene_length: self.config.gene_length,
            exon_sum: layout.exon_sum,
            intron_sum: layout.intron_sum,
            gc_content: gc_content(sequence.as_bytes()),
            seed: self.config.seed,
        };

        Ok(SyntheticGene {
            sequence,
            track,
            info,
        })
    }
}

/// Searches sequences for a motif on both strands.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::MotifLocator;
/// use genesynth_core::config::MotifSearchConfig;
///
/// let locator = MotifLocator::new(MotifSearchConfig::default());
/// let table = locator.locate("ACGTACGT", "ACGT");
/// assert_eq!(table.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MotifLocator {
    pub config: MotifSearchConfig,
}

impl MotifLocator {
    #[must_use]
    pub const fn new(config: MotifSearchConfig) -> Self {
        Self { config }
    }

    /// Finds every occurrence of `motif` in `sequence` on either strand
    #[must_use]
    pub fn locate(&self, sequence: &str, motif: &str) -> MotifMatchTable {
        locate_motif(sequence, motif, &self.config)
    }

    /// Same as [`MotifLocator::locate`] for raw sequence bytes.
    ///
    /// Coordinates are byte offsets into `sequence`; bytes outside the
    /// nucleotide alphabet never match but still occupy their position.
    #[must_use]
    pub fn locate_bytes(&self, sequence: &[u8], motif: &str) -> MotifMatchTable {
        locate_motif_bytes(sequence, motif, &self.config)
    }

    /// Searches every record of a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::IoError`] or [`GeneSynthError::ParseError`]
    /// if the file cannot be read.
    pub fn locate_in_fasta<P: AsRef<Path>>(
        &self,
        path: P,
        motif: &str,
    ) -> Result<Vec<(String, MotifMatchTable)>, GeneSynthError> {
        let records = read_fasta_sequences(path)?;
        Ok(records
            .into_iter()
            .map(|(id, _, sequence)| {
                let table = self.locate_bytes(&sequence, motif);
                (id, table)
            })
            .collect())
    }
}
