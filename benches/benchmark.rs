// Benchmarks for vectorization, matrix build and same-category queries
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prodsim::{Catalog, Engine, EngineConfig, Product, SimilarityMatrix, TfidfVectorizer};
use rand::prelude::*;

const WORDS: &[&str] = &[
    "cotton", "silk", "wireless", "bluetooth", "leather", "steel", "ceramic", "running",
    "shoe", "kurti", "saree", "earbuds", "bottle", "wallet", "printed", "casual", "formal",
    "women", "men", "kids", "black", "blue", "red", "premium", "combo", "pack", "water",
];
const CATEGORIES: &[&str] = &["Clothing", "Footwear", "Electronics", "Kitchen", "Bags"];

fn generate_catalog(size: usize) -> Catalog {
    let mut rng = StdRng::seed_from_u64(42);
    let products = (0..size)
        .map(|i| {
            let len = rng.random_range(4..16);
            let description: Vec<&str> = (0..len)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
            Product::new(format!("product {}", i), description.join(" "), category)
        })
        .collect();
    Catalog::new(products).unwrap()
}

fn benchmark_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");

    for size in [100, 1000, 5000].iter() {
        let catalog = generate_catalog(*size);
        let descriptions = catalog.descriptions();
        group.bench_with_input(BenchmarkId::new("tfidf", size), size, |b, _| {
            b.iter(|| {
                let mut vectorizer = TfidfVectorizer::default();
                black_box(vectorizer.fit_transform(&descriptions).unwrap());
            });
        });
    }

    group.finish();
}

fn benchmark_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    group.sample_size(10);

    for size in [100, 1000, 3000].iter() {
        let catalog = generate_catalog(*size);
        let vectors = TfidfVectorizer::default()
            .fit_transform(&catalog.descriptions())
            .unwrap();
        group.bench_with_input(BenchmarkId::new("build", size), size, |b, _| {
            b.iter(|| black_box(SimilarityMatrix::build(&vectors)));
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let engine = Engine::construct(generate_catalog(3000), EngineConfig::default()).unwrap();
    for top_n in [5, 20].iter() {
        group.bench_with_input(BenchmarkId::new("get_similar", top_n), top_n, |b, &top_n| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % engine.len();
                black_box(engine.get_similar(i, top_n).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_vectorize, benchmark_matrix, benchmark_query);
criterion_main!(benches);
