use std::io::Write;

use crate::{
    config::MotifSearchConfig,
    results::{GeneFeatureTrack, MotifMatchTable},
    types::GeneSynthError,
};

/// Write a feature track as `start, end, feature, length` rows
pub fn write_track_tsv<W: Write>(
    writer: &mut W,
    track: &GeneFeatureTrack,
) -> Result<(), GeneSynthError> {
    writeln!(writer, "start\tend\tfeature\tlength")?;
    for interval in track {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            interval.start, interval.end, interval.kind, interval.length
        )?;
    }
    Ok(())
}

/// Write a motif match table as `<key>.start, <key>.end, <key>.strand` rows
pub fn write_matches_tsv<W: Write>(
    writer: &mut W,
    table: &MotifMatchTable,
    config: &MotifSearchConfig,
) -> Result<(), GeneSynthError> {
    writeln!(
        writer,
        "{}\t{}\t{}",
        config.start_column(),
        config.end_column(),
        config.strand_column()
    )?;
    for hit in table {
        writeln!(writer, "{}\t{}\t{}", hit.start, hit.end, hit.strand_symbol())?;
    }
    Ok(())
}

/// Write several named match tables, each introduced by a `# <id>` line
pub fn write_named_matches_tsv<W: Write>(
    writer: &mut W,
    tables: &[(String, MotifMatchTable)],
    config: &MotifSearchConfig,
) -> Result<(), GeneSynthError> {
    for (id, table) in tables {
        writeln!(writer, "# {id}")?;
        write_matches_tsv(writer, table, config)?;
    }
    Ok(())
}
