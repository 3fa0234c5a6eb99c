use criterion::{black_box, criterion_group, criterion_main, Criterion};

use loctag::header::parse_accept_language;
use loctag::parser::{parse_language_id, parse_locale_id};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("language_id_simple", |b| {
        b.iter(|| parse_language_id(black_box("en-US")))
    });

    group.bench_function("language_id_full", |b| {
        b.iter(|| parse_language_id(black_box("sl-Latn-IT-rozaj-biske")))
    });

    group.bench_function("locale_id_with_extensions", |b| {
        b.iter(|| parse_locale_id(black_box("en-US-u-ca-buddhist-t-en-h0-hybrid-x-foo")))
    });

    group.bench_function("locale_id_malformed", |b| {
        b.iter(|| parse_locale_id(black_box("de-1901-1901-u")))
    });

    group.bench_function("accept_language_header", |b| {
        b.iter(|| {
            parse_accept_language(black_box("fr-CH, fr;q=0.9, en;q=0.8, de;q=0.7, *;q=0.5"))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
