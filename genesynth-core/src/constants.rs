// =============================================================================
// =============================================================================

/// Version string for GeneSynth
pub const VERSION: &str = "0.1.0";

// =============================================================================
// =============================================================================

/// Default length of a simulated gene body in base pairs
pub const DEFAULT_GENE_LENGTH: usize = 50_000;

/// Default number of exons per simulated gene
pub const DEFAULT_EXON_COUNT: usize = 15;

/// Default inclusive lower bound for a drawn exon length
pub const DEFAULT_MIN_EXON_LENGTH: usize = 50;

/// Default exclusive upper bound for a drawn exon length
pub const DEFAULT_MAX_EXON_LENGTH: usize = 2_500;

/// Smallest divisor used to carve the 5' UTR out of donor space
pub const MIN_UTR_DIVISOR: usize = 2;

/// Largest divisor used to carve the 5' UTR out of donor space
pub const MAX_UTR_DIVISOR: usize = 5;

// =============================================================================
// =============================================================================

/// Nucleotide alphabet sampled by the weighted base sampler, in weight order
pub const DNA_ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Wildcard symbol trimmed from the ends of a motif before searching
pub const MOTIF_WILDCARD: char = 'N';

/// Column prefix used for motif match tables when none is configured
pub const DEFAULT_MOTIF_KEY: &str = "motif";

/// Header used for simulated sequences written as FASTA
pub const DEFAULT_SEQUENCE_HEADER: &str = "GeneSynth_Seq_1";

/// Residues per line when writing FASTA output
pub const FASTA_LINE_WIDTH: usize = 60;
