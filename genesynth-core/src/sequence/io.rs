use crate::types::*;
use bio::io::fasta;
use std::fs::File;
use std::path::Path;

/// One FASTA entry as `(id, description, sequence)`
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Read every record of a FASTA file using rust-bio
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, GeneSynthError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| GeneSynthError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}
