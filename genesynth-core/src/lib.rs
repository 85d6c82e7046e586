//! # GeneSynth - Synthetic Gene Structures and Motif Search
//!
//! Simulates eukaryotic gene bodies as a random nucleotide sequence tiled by
//! exon, intron and UTR features, and finds short motifs on both strands of
//! any nucleotide string. The outputs serve as fixtures for genomic overlap
//! tooling.
//!
//! ## Features
//!
//! - **Gene simulation**: Contiguous exon/intron tracks with UTRs carved
//!   from leading slack, covering exactly `[0, gene_length)`
//! - **Weighted sequences**: Gene bodies drawn from a configurable `A, C, G, T`
//!   simplex
//! - **Bidirectional motif search**: Overlapping hits on the plus strand and
//!   the reverse complement, reported in plus-strand coordinates
//! - **Reproducibility**: Every random draw goes through an explicit, seedable
//!   generator
//!
//! ## Quick Start
//!
//! ```rust
//! use genesynth_core::{GeneSimulator, MotifLocator, config::GeneConfig};
//!
//! let config = GeneConfig {
//!     gene_length: 10_000,
//!     n_exons: 5,
//!     max_exon_length: 1_000,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut simulator = GeneSimulator::new(config)?;
//! let gene = simulator.simulate()?;
//!
//! println!("{} features over {} bp", gene.track.len(), gene.sequence.len());
//!
//! let table = MotifLocator::default().locate(&gene.sequence, "NNTATAAANN");
//! println!("Found {} TATA boxes", table.len());
//! # Ok::<(), genesynth_core::types::GeneSynthError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Simulation and search settings
//! - [`engine`]: [`GeneSimulator`] and [`MotifLocator`] entry points
//! - [`gene`]: Feature partitioning and track assembly
//! - [`motif`]: Wildcard trimming and strand-aware search
//! - [`sequence`]: Weighted sampling, reverse complement, FASTA input
//! - [`results`]: Feature tracks, simulated genes, match tables
//! - [`output`]: TSV, JSON and FASTA writers
//! - [`types`]: Core data types and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, GeneSynthError>`](types::GeneSynthError).
//! Configuration problems (bad weights, non-positive lengths, exon draws that
//! cannot tile the gene) are reported as errors; an empty sequence or motif
//! simply yields an empty match table.

pub mod config;
pub mod constants;
pub mod engine;
pub mod gene;
pub mod motif;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::{GeneSimulator, MotifLocator};
pub use types::GeneSynthError;
