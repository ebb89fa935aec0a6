use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geocrawl::filtering::LineFilter;
use geocrawl::processing::fingerprint;

const LINES: [&str; 6] = [
    "Welcome to our site!",
    "The committee met on Tuesday to discuss the new regional plan",
    "<p>Read more at https://example.org/news and follow @council #vote</p> for the full regional plan",
    "Home | Contact | About us | Legal notice | Privacy",
    "今日は東京で大切な会議が開かれました。",
    "1234 5678 9012 3456 7890 1234 5678 9012 3456 7890 1",
];

pub fn filter(c: &mut Criterion) {
    let f = LineFilter::default();
    c.bench_function("line_filter", |b| {
        b.iter(|| {
            for line in LINES {
                if f.pre_filter(line) {
                    black_box(f.filter(black_box(line)));
                }
            }
        })
    });
}

pub fn fingerprints(c: &mut Criterion) {
    c.bench_function("fingerprint", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(fingerprint(black_box(line)));
            }
        })
    });
}

criterion_group!(benches, filter, fingerprints);
criterion_main!(benches);
