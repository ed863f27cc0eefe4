//! Performance benchmarks for rs-readable.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - The full pipeline on a small synthetic article
//! - The decode cascade alone, per winning signal
//! - The full pipeline on a large generated page

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_readable::encoding::decode;
use rs_readable::extract;
use url::Url;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should be picked as the main block.</p>
        <p>Here is a second paragraph with a <a href="/more">link</a> and some
        <strong>bold</strong> words.</p>
        <pre>let answer = 42;</pre>
    </article>
    <aside>
        <h3>Related Articles</h3>
        <ul>
            <li>Related article 1</li>
            <li>Related article 2</li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

#[allow(clippy::unwrap_used)]
fn base() -> Url {
    Url::parse("https://example.com/articles/sample").unwrap()
}

fn bench_extract_sample(c: &mut Criterion) {
    let base = base();
    c.bench_function("extract_sample", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML.as_bytes()), None, black_box(&base)));
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut bom = vec![0xEF, 0xBB, 0xBF];
    bom.extend_from_slice(SAMPLE_HTML.as_bytes());
    let latin1: Vec<u8> = SAMPLE_HTML.replace("UTF-8", "ISO-8859-1").into_bytes();

    let mut group = c.benchmark_group("decode");
    group.bench_function("bom", |b| b.iter(|| decode(black_box(&bom), None)));
    group.bench_function("header", |b| {
        b.iter(|| decode(black_box(SAMPLE_HTML.as_bytes()), Some("text/html; charset=utf-8")));
    });
    group.bench_function("meta", |b| b.iter(|| decode(black_box(&latin1), None)));
    group.finish();
}

/// Pages of growing size, many competing candidates each
fn bench_large_pages(c: &mut Criterion) {
    let base = base();
    let mut group = c.benchmark_group("large_pages");

    for sections in [10_usize, 100, 500] {
        let body: String = (0..sections)
            .map(|i| {
                format!(
                    "<section><h2>Part {i}</h2><div><p>Paragraph {i} with <a href='/{i}'>a link</a> \
                     and enough words to count as content.</p></div></section>"
                )
            })
            .collect();
        let html = format!("<html><head><title>Big</title></head><body><article>{body}</article></body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &html, |b, html| {
            b.iter(|| extract(black_box(html.as_bytes()), None, &base));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract_sample, bench_decode, bench_large_pages);
criterion_main!(benches);
