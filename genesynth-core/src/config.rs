use crate::constants::{
    DEFAULT_EXON_COUNT, DEFAULT_GENE_LENGTH, DEFAULT_MAX_EXON_LENGTH, DEFAULT_MIN_EXON_LENGTH,
    DEFAULT_MOTIF_KEY,
};
use crate::types::GeneSynthError;

/// Output format options for simulated tracks and motif tables.
///
/// # Formats
///
/// - **Tsv**: Tab-separated table with a header row
/// - **Json**: One JSON array of records
///
/// # Examples
///
/// ```rust
/// use genesynth_core::config::OutputFormat;
///
/// assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated columns, one record per line.
    ///
    /// Tracks are written as `start, end, feature, length` and motif tables
    /// as `<key>.start, <key>.end, <key>.strand`.
    #[default]
    Tsv,

    /// JSON array of records with the same fields as the TSV columns.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = GeneSynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" | "table" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(GeneSynthError::InvalidConfig(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// Per-base sampling weights for the nucleotide alphabet.
///
/// Weights are relative; they need not sum to one. `A=2` with the others
/// left at `1` gives the simplex `[0.4, 0.2, 0.2, 0.2]`.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::config::BaseWeights;
///
/// let weights = BaseWeights { a: 2.0, ..Default::default() };
/// assert_eq!(weights.simplex().unwrap(), [0.4, 0.2, 0.2, 0.2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseWeights {
    pub a: f64,
    pub c: f64,
    pub g: f64,
    pub t: f64,
}

impl Default for BaseWeights {
    fn default() -> Self {
        Self {
            a: 1.0,
            c: 1.0,
            g: 1.0,
            t: 1.0,
        }
    }
}

impl BaseWeights {
    /// Weights in alphabet order `A, C, G, T`
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.a, self.c, self.g, self.t]
    }

    /// Checks that every weight is finite and non-negative with a positive sum.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::InvalidWeights`] otherwise.
    pub fn validate(&self) -> Result<(), GeneSynthError> {
        let weights = self.as_array();
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(GeneSynthError::InvalidWeights(format!(
                "weights must be finite and non-negative, got {bad}"
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(GeneSynthError::InvalidWeights(
                "at least one weight must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Normalized per-base probabilities summing to one.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::InvalidWeights`] if the weights fail
    /// [`BaseWeights::validate`].
    pub fn simplex(&self) -> Result<[f64; 4], GeneSynthError> {
        self.validate()?;
        let weights = self.as_array();
        let total: f64 = weights.iter().sum();
        Ok(weights.map(|w| w / total))
    }
}

impl std::str::FromStr for BaseWeights {
    type Err = GeneSynthError;

    /// Parses `A,C,G,T` weights, e.g. `"2,1,1,1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split(',')
            .map(|field| {
                field.trim().parse::<f64>().map_err(|e| {
                    GeneSynthError::InvalidWeights(format!("cannot parse '{field}': {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [a, c, g, t] = parsed[..] else {
            return Err(GeneSynthError::InvalidWeights(format!(
                "expected 4 comma-separated weights, got {}",
                parsed.len()
            )));
        };

        let weights = Self { a, c, g, t };
        weights.validate()?;
        Ok(weights)
    }
}

/// Configuration settings for synthetic gene simulation.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use genesynth_core::config::GeneConfig;
///
/// let config = GeneConfig::default();
/// assert!(config.validate().is_ok());
/// ```
///
/// ## Small, reproducible gene without UTRs
///
/// ```rust
/// use genesynth_core::config::GeneConfig;
///
/// let config = GeneConfig {
///     gene_length: 1_000,
///     n_exons: 3,
///     min_exon_length: 10,
///     max_exon_length: 100,
///     zero_start: true,
///     seed: Some(7),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneConfig {
    /// Total length of the gene body in base pairs.
    ///
    /// **Default**: `50_000`
    pub gene_length: usize,

    /// Number of exons. The gene carries one fewer intron.
    ///
    /// **Default**: `15`
    pub n_exons: usize,

    /// Inclusive lower bound for each drawn exon length.
    ///
    /// **Default**: `50`
    pub min_exon_length: usize,

    /// Exclusive upper bound for each drawn exon length.
    ///
    /// **Default**: `2_500`
    pub max_exon_length: usize,

    /// Force the first exon and first intron to start at local position 0.
    ///
    /// When `true` no donor space is left at the head of the gene, so no
    /// UTRs are annotated (unless a single-exon gene leaves unassigned
    /// intron space).
    ///
    /// **Default**: `false`
    pub zero_start: bool,

    /// Relative weights used to draw the gene body sequence.
    ///
    /// **Default**: uniform
    pub base_weights: BaseWeights,

    /// Seed for the simulator's random generator.
    ///
    /// Identical seeds and configuration yield identical genes. `None`
    /// seeds from OS entropy.
    ///
    /// **Default**: `None`
    pub seed: Option<u64>,
}

impl Default for GeneConfig {
    fn default() -> Self {
        Self {
            gene_length: DEFAULT_GENE_LENGTH,
            n_exons: DEFAULT_EXON_COUNT,
            min_exon_length: DEFAULT_MIN_EXON_LENGTH,
            max_exon_length: DEFAULT_MAX_EXON_LENGTH,
            zero_start: false,
            base_weights: BaseWeights::default(),
            seed: None,
        }
    }
}

impl GeneConfig {
    /// Number of introns separating the exons
    #[must_use]
    pub const fn n_introns(&self) -> usize {
        self.n_exons.saturating_sub(1)
    }

    /// Checks the configuration before any random draw is made.
    ///
    /// # Errors
    ///
    /// Returns [`GeneSynthError::InvalidConfig`] when a length or count is
    /// zero, when `max_exon_length <= min_exon_length`, or when even the
    /// shortest possible exons plus one base per intron exceed
    /// `gene_length`. Returns [`GeneSynthError::InvalidWeights`] for bad
    /// sampling weights.
    pub fn validate(&self) -> Result<(), GeneSynthError> {
        if self.gene_length == 0 {
            return Err(GeneSynthError::InvalidConfig(
                "gene_length must be positive".to_string(),
            ));
        }
        if self.n_exons == 0 {
            return Err(GeneSynthError::InvalidConfig(
                "n_exons must be at least 1".to_string(),
            ));
        }
        if self.min_exon_length == 0 {
            return Err(GeneSynthError::InvalidConfig(
                "min_exon_length must be positive".to_string(),
            ));
        }
        if self.max_exon_length <= self.min_exon_length {
            return Err(GeneSynthError::InvalidConfig(format!(
                "max_exon_length ({}) must exceed min_exon_length ({})",
                self.max_exon_length, self.min_exon_length
            )));
        }

        let smallest_body = self
            .n_exons
            .checked_mul(self.min_exon_length)
            .and_then(|exons| exons.checked_add(self.n_introns()));
        match smallest_body {
            Some(body) if body <= self.gene_length => {}
            _ => {
                return Err(GeneSynthError::InvalidConfig(format!(
                    "{} exons of at least {} bp and {} introns cannot fit in {} bp",
                    self.n_exons,
                    self.min_exon_length,
                    self.n_introns(),
                    self.gene_length
                )));
            }
        }

        self.base_weights.validate()
    }
}

/// Coordinate convention for reported motif matches.
///
/// # Conventions
///
/// - **Legacy**: plus-strand matches start one position left of the raw
///   match, and minus-strand matches are remapped as
///   `(len - i, len - j)`, so `start > end`. Existing overlap tooling reads
///   this layout.
/// - **HalfOpen**: every match is the `[min, max)` span it covers on the
///   plus strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCoordinates {
    #[default]
    Legacy,
    HalfOpen,
}

/// Settings for bidirectional motif search.
///
/// # Examples
///
/// ```rust
/// use genesynth_core::config::{MatchCoordinates, MotifSearchConfig};
///
/// let config = MotifSearchConfig {
///     coordinates: MatchCoordinates::HalfOpen,
///     motif_key: "ctcf".to_string(),
/// };
/// assert_eq!(config.start_column(), "ctcf.start");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSearchConfig {
    /// Coordinate convention applied to every match.
    ///
    /// **Default**: [`MatchCoordinates::Legacy`]
    pub coordinates: MatchCoordinates,

    /// Prefix for the output columns (`<key>.start`, `<key>.end`,
    /// `<key>.strand`).
    ///
    /// **Default**: `"motif"`
    pub motif_key: String,
}

impl Default for MotifSearchConfig {
    fn default() -> Self {
        Self {
            coordinates: MatchCoordinates::Legacy,
            motif_key: DEFAULT_MOTIF_KEY.to_string(),
        }
    }
}

impl MotifSearchConfig {
    #[must_use]
    pub fn start_column(&self) -> String {
        format!("{}.start", self.motif_key)
    }

    #[must_use]
    pub fn end_column(&self) -> String {
        format!("{}.end", self.motif_key)
    }

    #[must_use]
    pub fn strand_column(&self) -> String {
        format!("{}.strand", self.motif_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneConfig::default();
        assert_eq!(config.gene_length, 50_000);
        assert_eq!(config.n_exons, 15);
        assert_eq!(config.n_introns(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_gene_length_rejected() {
        let config = GeneConfig {
            gene_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneSynthError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_exons_rejected() {
        let config = GeneConfig {
            n_exons: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_exon_range_rejected() {
        let config = GeneConfig {
            min_exon_length: 100,
            max_exon_length: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneConfig {
            min_exon_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unfittable_exons_rejected() {
        // 3 * 400 + 2 > 1000
        let config = GeneConfig {
            gene_length: 1_000,
            n_exons: 3,
            min_exon_length: 400,
            max_exon_length: 500,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration_error());

        // 3 * 332 + 2 == 998 fits
        let config = GeneConfig {
            min_exon_length: 332,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overflowing_exon_count_rejected() {
        let config = GeneConfig {
            n_exons: usize::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_weights_simplex() {
        let weights = BaseWeights {
            a: 2.0,
            ..Default::default()
        };
        assert_eq!(weights.simplex().unwrap(), [0.4, 0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_base_weights_rejects_zero_and_negative() {
        let zero = BaseWeights {
            a: 0.0,
            c: 0.0,
            g: 0.0,
            t: 0.0,
        };
        assert!(matches!(
            zero.validate(),
            Err(GeneSynthError::InvalidWeights(_))
        ));

        let negative = BaseWeights {
            g: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = BaseWeights {
            t: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_base_weights_allow_single_positive() {
        let only_gc = BaseWeights {
            a: 0.0,
            c: 1.0,
            g: 1.0,
            t: 0.0,
        };
        assert_eq!(only_gc.simplex().unwrap(), [0.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_base_weights_from_str() {
        let weights: BaseWeights = "2, 1,1,1".parse().unwrap();
        assert_eq!(weights.as_array(), [2.0, 1.0, 1.0, 1.0]);

        assert!("1,1,1".parse::<BaseWeights>().is_err());
        assert!("1,1,x,1".parse::<BaseWeights>().is_err());
        assert!("0,0,0,0".parse::<BaseWeights>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("gff".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_motif_search_columns() {
        let config = MotifSearchConfig::default();
        assert_eq!(config.coordinates, MatchCoordinates::Legacy);
        assert_eq!(config.start_column(), "motif.start");
        assert_eq!(config.end_column(), "motif.end");
        assert_eq!(config.strand_column(), "motif.strand");
    }
}
