use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use md5::StreamHasher;

fn whole_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    for &len in &[10usize, 1000, 65_536] {
        let data = vec![0x5au8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| md5::digest_bytes(black_box(data)))
        });
    }
    group.finish();
}

fn chunk_sizes(c: &mut Criterion) {
    let data = vec![0xa5u8; 1 << 20];
    let mut group = c.benchmark_group("digest_stream");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for &chunk in &[64usize, 1024, 8192, 65_536] {
        let hasher = StreamHasher::with_chunk_size(chunk).unwrap();
        group.bench_function(BenchmarkId::from_parameter(chunk), |b| {
            b.iter(|| hasher.digest(black_box(&data[..])).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, whole_buffer, chunk_sizes);
criterion_main!(benches);
