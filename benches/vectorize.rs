//! Benchmarks for vectorization, evaluation, and cross-validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tweetsense::prelude::*;

const WORDS: [&str; 16] = [
    "love", "hate", "great", "awful", "day", "game", "so", "happy", "sad", "this", "that",
    "movie", "phone", "news", "best", "worst",
];

/// Deterministic synthetic tweets; positives lean on the first half of `WORDS`.
fn synthetic_corpus(n: usize) -> (Vec<String>, Vector<f32>) {
    let mut tweets = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let positive = i % 2 == 0;
        let offset = if positive { 0 } else { 8 };
        let tweet = (0..6)
            .map(|j| WORDS[(offset + (i * 7 + j * 3) % 8) % WORDS.len()])
            .collect::<Vec<_>>()
            .join(" ");
        tweets.push(format!("{tweet} #{}!", i % 50));
        labels.push(if positive { 1.0 } else { -1.0 });
    }
    (tweets, Vector::from_vec(labels))
}

fn bench_fit_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_transform");

    for size in [100, 630, 2000].iter() {
        let (tweets, _) = synthetic_corpus(*size);
        let vectorizer = BinaryVectorizer::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| vectorizer.fit_transform(black_box(&tweets)).unwrap());
        });
    }

    group.finish();
}

fn bench_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("performance");
    let (_, y) = synthetic_corpus(1000);
    let scores: Vec<f32> = (0..1000).map(|i| ((i * 37) % 101) as f32 / 50.0 - 1.0).collect();

    for metric in Metric::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(metric), &metric, |b, &m| {
            b.iter(|| performance(black_box(y.as_slice()), black_box(&scores), m));
        });
    }

    group.finish();
}

fn bench_cv_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("cv_performance");
    group.sample_size(10);

    let (tweets, y) = synthetic_corpus(630);
    let (_, x) = BinaryVectorizer::new().fit_transform(&tweets).unwrap();
    let folds = StratifiedKFold::new(5).split(&y).unwrap();

    group.bench_function("linear_svm_c1", |b| {
        b.iter(|| {
            let mut svm = LinearSVM::new().with_max_iter(100);
            cv_performance(&mut svm, black_box(&x), &y, &folds, Metric::Accuracy).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit_transform, bench_performance, bench_cv_performance);
criterion_main!(benches);
