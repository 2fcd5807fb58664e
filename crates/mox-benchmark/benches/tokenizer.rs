use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static OPERATORS: &str = "
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
(+ ++ = == === => <=> |> ?: && || ~ ! @ # $ % ^ & * : < > ? / \\ | -)
";

static IDENTIFIERS: &str =
    "It was the year when they finally immanentized the Eschaton It was the year when they \
     finally immanentized the Eschaton It was the year when they finally immanentized the \
     Eschaton It was the year when they finally immanentized the Eschaton It was the year when \
     they finally immanentized the Eschaton It was the year when they finally immanentized the \
     Eschaton";

fn iterate(s: &str) {
    use mox_tokenizer::{SyntaxKind, Tokenizer};

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let Ok(next_token) = tokenizer.next_token() else {
            break;
        };

        if next_token.kind == SyntaxKind::EOF {
            break;
        }

        black_box(next_token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let nested = mox_benchmark::repeated(16);

    let candidates = [
        ("identifiers", IDENTIFIERS),
        ("operators_and_delimiters", OPERATORS),
        ("nested", nested.as_str()),
    ];

    for (name, source) in candidates {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
