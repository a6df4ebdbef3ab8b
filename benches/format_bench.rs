// Size formatting benchmarks

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dirscope::util::{SizeFormatter, format_size};

fn bench_format_size(c: &mut Criterion) {
    let values: Vec<u64> = (0..16).map(|i| 1u64 << (i * 4)).collect();

    c.bench_function("format_size_default_table", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(format_size(black_box(v)));
            }
        });
    });

    let formatter = SizeFormatter::default();
    c.bench_function("format_size_injected_table", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(formatter.format(black_box(v)));
            }
        });
    });
}

criterion_group!(benches, bench_format_size);
criterion_main!(benches);
