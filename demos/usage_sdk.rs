use lzwbench::{compare, download_filename, encode, report, BenchConfig, Method};

fn main() {
	let codes = encode("TOBEORNOTTOBEORTOBEORNOT").unwrap();
	println!("lzw codes: {:?}", codes);

	let text = "id,city,temp\n1,Oslo,4\n2,Lima,19\n3,Oslo,5\n".repeat(100);
	let cfg = BenchConfig::default();
	let comparison = compare(&text, &cfg).unwrap();
	print!("{}", report::render_table(comparison.iter().map(|(_, m)| &m.stats)));

	let best = comparison.best();
	println!("best: {} -> {}", best.label(), download_filename("weather.csv", best));

	let lzw = &comparison.get(Method::Lzw).stats;
	println!("lzw {} -> {} ({})", lzw.original_size, lzw.compressed_size, lzw.ratio_display());
}
