use criterion::{Criterion, criterion_group, criterion_main};
use pallet_rs::entities::{Carton, LayerInstance, Pallet};
use pallet_rs::packing::MaxRectsPacker;
use pallet_rs::util::PackConfig;
use std::hint::black_box;

fn layer(carton: (u64, u64), spacing: u64) -> LayerInstance {
    LayerInstance::try_new(
        Pallet::try_new(1200, 1000).unwrap(),
        Carton::try_new(carton.0, carton.1).unwrap(),
        true,
        spacing,
    )
    .unwrap()
}

fn pack_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_layer");
    for (name, instance) in [
        ("euro_carton", layer((300, 200), 0)),
        ("small_carton_spaced", layer((123, 77), 7)),
        ("tiny_carton", layer((40, 30), 0)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let solution = MaxRectsPacker::new(black_box(instance), PackConfig::default()).solve();
                black_box(solution.n_placed())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, pack_bench);
criterion_main!(benches);
