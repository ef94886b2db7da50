use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lzwbench::config::{BenchConfig, Method};
use lzwbench::{encode, harness};

fn csv_data(rows: usize) -> String {
	let mut text = String::from("ts,sensor,reading,status\n");
	for i in 0..rows {
		text.push_str(&format!("{},s{},{}.{},{}\n", 1_700_000_000 + i, i % 16, i % 40, i % 10, if i % 7 == 0 { "WARN" } else { "OK" }));
	}
	text
}

fn bench_compress(c: &mut Criterion) {
	let text = csv_data(50_000);
	let config = BenchConfig::default();
	let mut group = c.benchmark_group("compression");
	group.throughput(Throughput::Bytes(text.len() as u64));
	group.bench_function("lzw_encode", |b| {
		b.iter(|| encode(&text).unwrap());
	});
	for method in Method::ALL {
		group.bench_function(format!("measure_{}", method), |b| {
			b.iter(|| harness::measure(&text, method, &config).unwrap());
		});
	}
	group.finish();
}

criterion_group!(benches, bench_compress);
criterion_main!(benches);
