use criterion::{Criterion, black_box, criterion_group, criterion_main};
use policy_content::normalize::normalize;
use policy_content::structural::canonicalize;
use policy_content::{NormalizationProfile, equivalent_entity_aware, equivalent_whitespace_only};
use policy_test_utils::fixtures;

fn structural_benchmark(c: &mut Criterion) {
    c.bench_function("structural::canonicalize", |b| {
        b.iter(|| canonicalize(black_box(fixtures::POLICY)).unwrap())
    });

    c.bench_function("equivalent_whitespace_only (structural)", |b| {
        b.iter(|| {
            equivalent_whitespace_only(
                black_box(fixtures::POLICY),
                black_box(fixtures::POLICY_REFORMATTED),
            )
        })
    });
}

fn fallback_benchmark(c: &mut Criterion) {
    c.bench_function("normalize (entity-aware)", |b| {
        b.iter(|| {
            normalize(
                black_box(fixtures::INTERPOLATED_POLICY_ESCAPED),
                NormalizationProfile::EntityAware,
            )
        })
    });

    c.bench_function("equivalent_entity_aware (textual)", |b| {
        b.iter(|| {
            equivalent_entity_aware(
                black_box(fixtures::INTERPOLATED_POLICY),
                black_box(fixtures::INTERPOLATED_POLICY_ESCAPED),
            )
        })
    });
}

criterion_group!(benches, structural_benchmark, fallback_benchmark);
criterion_main!(benches);
