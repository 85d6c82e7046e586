use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use genesynth_core::config::{BaseWeights, GeneConfig};
use genesynth_core::sequence::sampler::WeightedBaseSampler;
use genesynth_core::{GeneSimulator, MotifLocator};
use rand::SeedableRng;
use rand::rngs::StdRng;

use criterion_config::configure_criterion;

fn bench_gene_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gene_simulation");

    for gene_length in [10_000usize, 50_000, 250_000] {
        // Keep exons from overrunning the shorter genes
        let config = GeneConfig {
            gene_length,
            max_exon_length: gene_length / 20,
            seed: Some(42),
            ..Default::default()
        };
        group.throughput(Throughput::Bytes(gene_length as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(gene_length),
            &config,
            |b, config| {
                let mut simulator = GeneSimulator::new(config.clone()).unwrap();
                b.iter(|| black_box(simulator.simulate().unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_motif_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("motif_search");
    let sampler = WeightedBaseSampler::new(&BaseWeights::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let locator = MotifLocator::default();

    for sequence_length in [10_000usize, 1_000_000] {
        let sequence = sampler.sample(sequence_length, &mut rng);
        group.throughput(Throughput::Bytes(sequence_length as u64));
        for motif in ["TATAAA", "NNCACGTGNN", "GG"] {
            group.bench_with_input(
                BenchmarkId::new(motif, sequence_length),
                &sequence,
                |b, sequence| b.iter(|| black_box(locator.locate(sequence, motif))),
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_gene_simulation, bench_motif_search
}
criterion_main!(benches);
