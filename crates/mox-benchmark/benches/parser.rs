use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use mox_inputs::File;
use salsa::Setter as _;

fn benchmark_parser(c: &mut Criterion) {
    let inputs = [("Simple", mox_benchmark::repeated(1)), ("Large", mox_benchmark::repeated(64))];

    let mut group = c.benchmark_group("Parser Benchmark");

    for (name, code) in &inputs {
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_all", name), code, |b, code| {
            b.iter(|| black_box(mox_parse::parse_all(code)));
        });
    }

    let mut db = salsa::DatabaseImpl::new();
    let file = File::new(&db, "bench.mox".into(), String::new());

    for (name, code) in &inputs {
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::new("check_file", name), code, |b, code| {
            b.iter(|| {
                file.set_text(&mut db).to(code.clone());
                mox_db::check_file(&db, file);
                black_box(mox_db::parse(&db, file).nodes().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
