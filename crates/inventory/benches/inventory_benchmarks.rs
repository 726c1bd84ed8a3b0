use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_inventory::Inventory;
use stockroom_products::Product;

fn products(n: usize) -> Vec<Product> {
    // Deterministic spread of stock levels (no RNG dependency).
    (0..n)
        .map(|i| {
            let stock = ((i as u64 * 2_654_435_761) % 10_000) as u32;
            Product::new(format!("SKU-{i:06}"), 9.99, "Bench", stock).unwrap()
        })
        .collect()
}

fn bench_add_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_product");
    for size in [100usize, 1_000, 10_000] {
        let input = products(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut inventory = Inventory::new();
                for product in input.iter().cloned() {
                    inventory.add_product(product).unwrap();
                }
                black_box(inventory.len())
            });
        });
    }
    group.finish();
}

fn bench_drain_low_stock(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_low_stock_product");
    for size in [100usize, 1_000, 10_000] {
        let mut seeded = Inventory::new();
        for product in products(size) {
            seeded.add_product(product).unwrap();
        }
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &seeded, |b, seeded| {
            b.iter(|| {
                let mut inventory = seeded.clone();
                while let Some(product) = inventory.get_low_stock_product() {
                    black_box(product);
                }
            });
        });
    }
    group.finish();
}

fn bench_restock_cycle(c: &mut Criterion) {
    let input = products(1_000);
    c.bench_function("restock_enqueue_process_1000", |b| {
        b.iter(|| {
            let mut inventory = Inventory::new();
            for product in input.iter().cloned() {
                inventory.enqueue_restock(product);
            }
            while let Some(product) = inventory.process_restock() {
                black_box(product);
            }
        });
    });
}

criterion_group!(benches, bench_add_products, bench_drain_low_stock, bench_restock_cycle);
criterion_main!(benches);
