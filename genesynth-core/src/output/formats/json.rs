use std::io::Write;

use serde_json::{Map, Value};

use crate::{
    config::MotifSearchConfig,
    results::{GeneFeatureTrack, MotifMatchTable},
    types::GeneSynthError,
};

/// Write a feature track as a JSON array of interval records
pub fn write_track_json<W: Write>(
    writer: &mut W,
    track: &GeneFeatureTrack,
) -> Result<(), GeneSynthError> {
    serde_json::to_writer_pretty(&mut *writer, track)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a motif match table as a JSON array using the configured keys
pub fn write_matches_json<W: Write>(
    writer: &mut W,
    table: &MotifMatchTable,
    config: &MotifSearchConfig,
) -> Result<(), GeneSynthError> {
    serde_json::to_writer_pretty(&mut *writer, &match_records(table, config))?;
    writeln!(writer)?;
    Ok(())
}

/// Write several named match tables as one JSON object keyed by record id
pub fn write_named_matches_json<W: Write>(
    writer: &mut W,
    tables: &[(String, MotifMatchTable)],
    config: &MotifSearchConfig,
) -> Result<(), GeneSynthError> {
    let mut by_record = Map::new();
    for (id, table) in tables {
        by_record.insert(id.clone(), Value::Array(match_records(table, config)));
    }
    serde_json::to_writer_pretty(&mut *writer, &by_record)?;
    writeln!(writer)?;
    Ok(())
}

fn match_records(table: &MotifMatchTable, config: &MotifSearchConfig) -> Vec<Value> {
    table
        .iter()
        .map(|hit| {
            let mut record = Map::new();
            record.insert(config.start_column(), hit.start.into());
            record.insert(config.end_column(), hit.end.into());
            record.insert(config.strand_column(), hit.strand_symbol().into());
            Value::Object(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureInterval, FeatureKind, MotifMatch};
    use bio::bio_types::strand::Strand;

    #[test]
    fn test_write_track_json() {
        let mut buffer = Vec::new();
        let track = GeneFeatureTrack::new(vec![
            FeatureInterval::new(0, 10, FeatureKind::Exon),
            FeatureInterval::new(10, 25, FeatureKind::Intron),
        ]);
        write_track_json(&mut buffer, &track).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0]["feature"], "exon");
        assert_eq!(parsed[1]["start"], 10);
        assert_eq!(parsed[1]["length"], 15);
    }

    #[test]
    fn test_write_matches_json_uses_motif_key() {
        let mut buffer = Vec::new();
        let table = MotifMatchTable::new(
            "TATA".to_string(),
            vec![MotifMatch::new(6, 2, Strand::Reverse)],
        );
        let config = MotifSearchConfig {
            motif_key: "tata".to_string(),
            ..Default::default()
        };
        write_matches_json(&mut buffer, &table, &config).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0]["tata.start"], 6);
        assert_eq!(parsed[0]["tata.end"], 2);
        assert_eq!(parsed[0]["tata.strand"], "-");
    }

    #[test]
    fn test_write_named_matches_json() {
        let mut buffer = Vec::new();
        let tables = vec![
            (
                "chr1".to_string(),
                MotifMatchTable::new(
                    "ACGT".to_string(),
                    vec![MotifMatch::new(3, 8, Strand::Forward)],
                ),
            ),
            ("chr2".to_string(), MotifMatchTable::default()),
        ];
        write_named_matches_json(&mut buffer, &tables, &MotifSearchConfig::default()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["chr1"][0]["motif.end"], 8);
        assert_eq!(parsed["chr2"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_write_empty_matches_json() {
        let mut buffer = Vec::new();
        write_matches_json(
            &mut buffer,
            &MotifMatchTable::default(),
            &MotifSearchConfig::default(),
        )
        .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
