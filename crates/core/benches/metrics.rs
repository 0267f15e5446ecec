use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lexis_core::tokenize::{sentences, words};
use lexis_core::{Document, LexiconPaths, Lexicons, score_text};

fn article_text() -> String {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    Document::parse(&html).paragraph_text()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = article_text();
    let mut group = c.benchmark_group("tokenize");

    group.bench_with_input(BenchmarkId::new("sentences", "article"), &text, |b, text| {
        b.iter(|| sentences(black_box(text)))
    });

    group.bench_with_input(BenchmarkId::new("words", "article"), &text, |b, text| {
        b.iter(|| words(black_box(text)))
    });

    group.finish();
}

fn bench_paragraph_extraction(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();

    c.bench_function("paragraph_extraction", |b| {
        b.iter(|| Document::parse(black_box(&html)).paragraph_text())
    });
}

fn bench_metrics(c: &mut Criterion) {
    let lexicons = Lexicons::load(&LexiconPaths::in_dir("../../tests/fixtures/lexicon")).unwrap();
    let small = article_text();
    let large = small.repeat(50);

    let mut group = c.benchmark_group("metrics");

    group.bench_with_input(BenchmarkId::new("score", "1x"), &small, |b, text| {
        b.iter(|| score_text(black_box(text), &lexicons))
    });

    group.bench_with_input(BenchmarkId::new("score", "50x"), &large, |b, text| {
        b.iter(|| score_text(black_box(text), &lexicons))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_paragraph_extraction, bench_metrics);
criterion_main!(benches);
