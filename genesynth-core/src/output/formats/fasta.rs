use std::io::Write;

use crate::{constants::FASTA_LINE_WIDTH, results::SyntheticGene, types::GeneSynthError};

/// Write the simulated gene body as a single FASTA record
pub fn write_gene_fasta<W: Write>(
    writer: &mut W,
    gene: &SyntheticGene,
) -> Result<(), GeneSynthError> {
    writeln!(
        writer,
        ">{} length={} exon_sum={} gc_cont={:.3}",
        gene.info.header, gene.info.gene_length, gene.info.exon_sum, gene.info.gc_content
    )?;
    for line in gene.sequence.as_bytes().chunks(FASTA_LINE_WIDTH) {
        writer.write_all(line)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{GeneFeatureTrack, GeneInfo};

    fn gene_with_sequence(sequence: &str) -> SyntheticGene {
        SyntheticGene {
            sequence: sequence.to_string(),
            track: GeneFeatureTrack::default(),
            info: GeneInfo {
                header: "sim".to_string(),
                gene_length: sequence.len(),
                exon_sum: 10,
                intron_sum: sequence.len() - 10,
                gc_content: 0.5,
                seed: None,
            },
        }
    }

    #[test]
    fn test_write_gene_fasta_wraps_lines() {
        let mut buffer = Vec::new();
        let gene = gene_with_sequence(&"ACGT".repeat(30));
        write_gene_fasta(&mut buffer, &gene).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], ">sim length=120 exon_sum=10 gc_cont=0.500");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
    }

    #[test]
    fn test_write_gene_fasta_short_sequence() {
        let mut buffer = Vec::new();
        write_gene_fasta(&mut buffer, &gene_with_sequence("ACGTACGTACGT")).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("\nACGTACGTACGT\n"));
    }
}
