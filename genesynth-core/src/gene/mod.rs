//! Synthetic gene feature layout.
//!
//! A gene body of `gene_length` bases is tiled by alternating exons and
//! introns, optionally flanked by a 5' and a 3' UTR:
//!
//! 1. Exon lengths are drawn and summed; the rest of the gene is intron space.
//! 2. [`partition`] splits each space into contiguous segments.
//! 3. [`assembly`] interleaves the segments, chains them into one frame, and
//!    turns unassigned head space into UTRs.

pub mod assembly;
pub mod partition;

pub use assembly::{GeneBodyLayout, assemble_gene_track};
pub use partition::{Partition, partition_feature_space};
