//! # GeneSynth CLI - Synthetic Genes and Motif Tables
//!
//! A command-line interface for simulating gene structures and locating
//! motifs on both strands of a sequence.
//!
//! ## Usage
//!
//! ```bash
//! # Simulate a gene with default settings
//! genesynth simulate -o track.tsv
//!
//! # Reproducible GC-rich gene, sequence saved as FASTA
//! genesynth simulate --seed 7 --weights 1,2,2,1 --fasta gene.fasta -o track.tsv
//!
//! # Find a TATA box in a literal sequence
//! genesynth motif --sequence GGTATAAAGG --motif TATAAA
//!
//! # Search every record of a FASTA file, JSON output
//! genesynth motif -i contigs.fasta --motif NNCACGTGNN -f json -o ebox.json
//! ```
//!
//! ## Subcommands
//!
//! - `simulate`: Write a Gene Feature Track, optionally with its sequence
//! - `motif`: Write a Motif Match Table
//!
//! Log verbosity follows `RUST_LOG` (default `info`, `warn` with `--quiet`).
//! Logs go to stderr so tables on stdout stay machine-readable.

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, value_parser};
use genesynth_core::config::{
    BaseWeights, GeneConfig, MatchCoordinates, MotifSearchConfig, OutputFormat,
};
use genesynth_core::constants::DEFAULT_MOTIF_KEY;
use genesynth_core::output::{write_gene_fasta, write_matches, write_named_matches, write_track};
use genesynth_core::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("simulate", sub_matches)) => run_simulate(sub_matches),
        Some(("motif", sub_matches)) => run_motif(sub_matches),
        _ => Err("No subcommand given".into()),
    }
}

fn cli() -> Command {
    Command::new("genesynth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Synthetic gene structures and bidirectional motif search")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("simulate")
                .about("Simulate a gene body and write its feature track")
                .arg(
                    Arg::new("gene-length")
                        .short('l')
                        .long("gene-length")
                        .value_name("BP")
                        .value_parser(value_parser!(usize))
                        .help("Gene length in base pairs (default: 50000)"),
                )
                .arg(
                    Arg::new("exons")
                        .short('e')
                        .long("exons")
                        .value_name("COUNT")
                        .value_parser(value_parser!(usize))
                        .help("Number of exons (default: 15)"),
                )
                .arg(
                    Arg::new("min-exon")
                        .long("min-exon")
                        .value_name("BP")
                        .value_parser(value_parser!(usize))
                        .help("Minimum exon length, inclusive (default: 50)"),
                )
                .arg(
                    Arg::new("max-exon")
                        .long("max-exon")
                        .value_name("BP")
                        .value_parser(value_parser!(usize))
                        .help("Maximum exon length, exclusive (default: 2500)"),
                )
                .arg(
                    Arg::new("zero-start")
                        .short('z')
                        .long("zero-start")
                        .action(ArgAction::SetTrue)
                        .help("Start the first exon at position 0"),
                )
                .arg(
                    Arg::new("weights")
                        .short('w')
                        .long("weights")
                        .value_name("A,C,G,T")
                        .help("Relative base weights (default: 1,1,1,1)"),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .value_name("SEED")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducible output"),
                )
                .arg(format_arg())
                .arg(output_arg())
                .arg(
                    Arg::new("fasta")
                        .long("fasta")
                        .value_name("FILE")
                        .help("Also write the gene sequence as FASTA"),
                )
                .arg(quiet_arg()),
        )
        .subcommand(
            Command::new("motif")
                .about("Locate a motif on both strands of a sequence")
                .arg(
                    Arg::new("sequence")
                        .long("sequence")
                        .value_name("SEQ")
                        .help("Literal nucleotide sequence to search"),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .help("Input FASTA file; every record is searched"),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["sequence", "input"])
                        .required(true),
                )
                .arg(
                    Arg::new("motif")
                        .short('m')
                        .long("motif")
                        .value_name("MOTIF")
                        .required(true)
                        .help("Motif to search; leading and trailing N's are trimmed"),
                )
                .arg(
                    Arg::new("key")
                        .short('k')
                        .long("key")
                        .value_name("KEY")
                        .default_value(DEFAULT_MOTIF_KEY)
                        .help("Column prefix for the match table"),
                )
                .arg(
                    Arg::new("half-open")
                        .long("half-open")
                        .action(ArgAction::SetTrue)
                        .help("Report matches as [min, max) plus-strand intervals"),
                )
                .arg(format_arg())
                .arg(output_arg())
                .arg(quiet_arg()),
        )
}

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .help("Output format: tsv, json")
        .default_value("tsv")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help("Output file (default: stdout)")
}

fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Only report warnings and errors")
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn open_output(matches: &ArgMatches) -> io::Result<Box<dyn Write>> {
    Ok(match matches.get_one::<String>("output") {
        Some(output_file) => Box::new(BufWriter::new(File::create(output_file)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

fn output_format(matches: &ArgMatches) -> Result<OutputFormat, GeneSynthError> {
    matches
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::default()), |format| format.parse())
}

fn run_simulate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(matches.get_flag("quiet"));

    let defaults = GeneConfig::default();
    let config = GeneConfig {
        gene_length: matches
            .get_one::<usize>("gene-length")
            .copied()
            .unwrap_or(defaults.gene_length),
        n_exons: matches
            .get_one::<usize>("exons")
            .copied()
            .unwrap_or(defaults.n_exons),
        min_exon_length: matches
            .get_one::<usize>("min-exon")
            .copied()
            .unwrap_or(defaults.min_exon_length),
        max_exon_length: matches
            .get_one::<usize>("max-exon")
            .copied()
            .unwrap_or(defaults.max_exon_length),
        zero_start: matches.get_flag("zero-start"),
        base_weights: match matches.get_one::<String>("weights") {
            Some(weights) => weights.parse::<BaseWeights>()?,
            None => BaseWeights::default(),
        },
        seed: matches.get_one::<u64>("seed").copied(),
    };
    let format = output_format(matches)?;

    let mut simulator = GeneSimulator::new(config)?;
    let gene = simulator.simulate()?;

    let mut writer = open_output(matches)?;
    write_track(&mut writer, &gene.track, format)?;
    writer.flush()?;

    if let Some(fasta_file) = matches.get_one::<String>("fasta") {
        let mut fasta_writer = BufWriter::new(File::create(fasta_file)?);
        write_gene_fasta(&mut fasta_writer, &gene)?;
        fasta_writer.flush()?;
    }

    let config = simulator.config();
    info!(
        "Simulation complete! {} features over {} bp ({} exons of {}..{} bp, GC content {:.3}).",
        gene.track.len(),
        config.gene_length,
        config.n_exons,
        config.min_exon_length,
        config.max_exon_length,
        gene.info.gc_content
    );

    Ok(())
}

fn run_motif(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(matches.get_flag("quiet"));

    let motif = matches
        .get_one::<String>("motif")
        .ok_or("A motif is required")?;
    let config = MotifSearchConfig {
        coordinates: if matches.get_flag("half-open") {
            MatchCoordinates::HalfOpen
        } else {
            MatchCoordinates::Legacy
        },
        motif_key: matches
            .get_one::<String>("key")
            .cloned()
            .unwrap_or_else(|| DEFAULT_MOTIF_KEY.to_string()),
    };
    let format = output_format(matches)?;
    let locator = MotifLocator::new(config);

    let mut writer = open_output(matches)?;
    let total_matches = if let Some(sequence) = matches.get_one::<String>("sequence") {
        let table = locator.locate(sequence, motif);
        write_matches(&mut writer, &table, &locator.config, format)?;
        table.len()
    } else if let Some(input_file) = matches.get_one::<String>("input") {
        let tables = locator.locate_in_fasta(input_file, motif)?;
        write_named_matches(&mut writer, &tables, &locator.config, format)?;
        tables.iter().map(|(_, table)| table.len()).sum()
    } else {
        return Err("Either --sequence or --input is required".into());
    };
    writer.flush()?;

    info!("Search complete! Found {} matches.", total_matches);

    Ok(())
}
