use criterion::{criterion_group, criterion_main};

mod gstin_checksum_benchmark {
    use criterion::{black_box, Criterion};
    use gstin_verify::{GstinChecksum, GstinComposite, Validator};

    const GSTINS: &[&str] = &[
        "27AAPFU0939F1ZV",
        "29AAGCB7383J1Z4",
        "24AAACC1206D1ZM",
        "19AAACI1681G1ZM",
        // wrong check character
        "22AAAAA0000A1Z5",
        // wrong length
        "27AAPFU0939F1Z",
    ];

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("gstin-checksum", |b| {
            b.iter(|| {
                for gstin in GSTINS {
                    GstinChecksum.is_valid_match(black_box(gstin));
                }
            })
        });

        let composite = GstinComposite::default();
        c.bench_function("gstin-composite", |b| {
            b.iter(|| {
                for gstin in GSTINS {
                    composite.is_valid_match(black_box(gstin));
                }
            })
        });
    }
}

mod gstin_parse_benchmark {
    use criterion::{black_box, Criterion};
    use gstin_verify::Gstin;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let inputs = vec![
            "27AAPFU0939F1ZV",
            "  27aapfu0939f1zv  ",
            "27 AAPFU 0939 F1Z V",
            "  22aaaaa0000a1z5  ",
        ];
        c.bench_function("gstin-parse", |b| {
            b.iter(|| {
                for input in &inputs {
                    let _ = Gstin::parse(black_box(input));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    gstin_checksum_benchmark::criterion_benchmark,
    gstin_parse_benchmark::criterion_benchmark
);
criterion_main!(benches);
