use std::hint::black_box;

use bodega::{Catalog, Inventory, ProductRecord};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const NOUNS: [&str; 8] = [
    "Tornillo", "Clavo", "Tuerca", "Arandela", "Martillo", "Cable", "Pintura", "Llave",
];
const UNITS: [&str; 5] = ["mm", "cm", "g", "kg", "L"];
const BRANDS: [&str; 4] = ["Fixa", "AcmeTools", "Colorex", "Conducel"];

/// Deterministic synthetic catalog of `size` rows.
fn synthetic_catalog(size: usize) -> Catalog {
    Catalog::from_records((0..size).map(|i| {
        ProductRecord::new(
            format!("{:06}", i),
            format!(
                "{} {}{} acero {}",
                NOUNS[i % NOUNS.len()],
                i % 50 + 1,
                UNITS[i % UNITS.len()],
                i % 7
            ),
            BRANDS[i % BRANDS.len()],
            "Ferreteria",
            (i % 40) as u64,
        )
    }))
}

/// Catalog with long, realistic descriptions (around 100 chars each).
fn verbose_catalog(size: usize) -> Catalog {
    Catalog::from_records((0..size).map(|i| {
        ProductRecord::new(
            format!("{:06}", i),
            format!(
                "{} hexagonal galvanizado {}{} de acero inoxidable para uso industrial, caja x{} unidades, ref {}",
                NOUNS[i % NOUNS.len()],
                i % 50 + 1,
                UNITS[i % UNITS.len()],
                (i % 9 + 1) * 10,
                i
            ),
            BRANDS[i % BRANDS.len()],
            "Ferreteria",
            (i % 40) as u64,
        )
    }))
}

fn bench_need_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("need_query");

    for size in [1_000usize, 10_000] {
        let inventory = Inventory::from_catalog(synthetic_catalog(size))
            .expect("default settings are valid");
        group.throughput(Throughput::Elements(size as u64));

        for query in ["tornillo 10mm", "cable acero 20cm", "25"] {
            group.bench_with_input(BenchmarkId::new(query, size), &query, |b, q| {
                b.iter(|| inventory.search_by_need(black_box(q), "cliente"))
            });
        }
    }

    group.finish();
}

fn bench_field_search(c: &mut Criterion) {
    let inventory =
        Inventory::from_catalog(synthetic_catalog(10_000)).expect("default settings are valid");
    let mut group = c.benchmark_group("field_search");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("brand", |b| {
        b.iter(|| inventory.search_by_brand(black_box("acme"), "vendedor"))
    });
    group.bench_function("code", |b| {
        b.iter(|| inventory.lookup_by_code(black_box("004242"), "vendedor"))
    });

    group.finish();
}

fn bench_description_search(c: &mut Criterion) {
    let size = 5_000usize;
    let inventory =
        Inventory::from_catalog(verbose_catalog(size)).expect("default settings are valid");
    let mut group = c.benchmark_group("description_search");
    group.throughput(Throughput::Elements(size as u64));

    for query in ["tornillo hexagonal galvanizado 10mm acero", "martillo"] {
        group.bench_with_input(BenchmarkId::new(query, size), &query, |b, q| {
            b.iter(|| inventory.lookup_by_description(black_box(q), "vendedor"))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_need_query,
    bench_field_search,
    bench_description_search
);
criterion_main!(benches);
