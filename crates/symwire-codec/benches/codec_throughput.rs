use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symwire_codec::{decode, encode};
use symwire_core::{SamplerConfig, TermSampler};

fn codec_bench(c: &mut Criterion) {
    let config = SamplerConfig {
        max_depth: 6,
        max_operands: 5,
        ..SamplerConfig::default()
    };
    let mut sampler = TermSampler::from_seed(7, config);
    let terms: Vec<_> = (0..256).map(|_| sampler.sample_term()).collect();
    let payloads: Vec<_> = terms.iter().map(|term| encode(term).unwrap()).collect();

    c.bench_function("encode_sampled_trees", |b| {
        b.iter(|| {
            for term in &terms {
                black_box(encode(term).unwrap());
            }
        });
    });

    c.bench_function("decode_sampled_trees", |b| {
        b.iter(|| {
            for bytes in &payloads {
                black_box(decode(bytes).unwrap());
            }
        });
    });
}

criterion_group!(benches, codec_bench);
criterion_main!(benches);
