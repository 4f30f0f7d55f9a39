use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use nb64::{URL_SAFE, decode, encode};

const ASCII_LINE: &str = "I feel so alone, I've been missing you so long. ";
const CJK_LINE: &str = "我感到如此孤单，已错过你太久。";

fn sample(kind: &str, size: usize) -> Vec<u8> {
    let unit = match kind {
        "ascii" => ASCII_LINE.to_string(),
        "cjk" => CJK_LINE.to_string(),
        _ => format!("{}（{}）\n", ASCII_LINE, CJK_LINE),
    };
    let mut data = unit.repeat(size / unit.len() + 1);
    // cut on a char boundary so the sample stays valid UTF-8
    let mut end = size;
    while !data.is_char_boundary(end) {
        end -= 1;
    }
    data.truncate(end);
    data.into_bytes()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for kind in ["ascii", "cjk", "mixed"] {
        for size in [64, 1024, 16384] {
            let data = sample(kind, size);
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(kind, size),
                &data,
                |b, data| b.iter(|| encode(black_box(data), black_box(&URL_SAFE)).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for kind in ["ascii", "cjk", "mixed"] {
        for size in [64, 1024, 16384] {
            let data = sample(kind, size);
            let encoded = encode(&data, &URL_SAFE).unwrap();
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(kind, size),
                &encoded,
                |b, encoded| b.iter(|| decode(black_box(encoded), black_box(&URL_SAFE)).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
