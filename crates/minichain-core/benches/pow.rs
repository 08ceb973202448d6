use criterion::{criterion_group, criterion_main, Criterion};
use minichain_core::chain::Chain;
use minichain_core::mine::generate_next_block;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_pow(c: &mut Criterion) {
    c.bench_function("generate_next_block_difficulty_3", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let chain = Chain::new();
        let tip = chain.tip().expect("genesis present").clone();

        b.iter(|| {
            let data = format!("payload-{}", rng.gen::<u64>());
            let _mined = generate_next_block(&tip, &data, 3);
        });
    });
}

criterion_group!(benches, bench_pow);
criterion_main!(benches);
