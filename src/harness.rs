//! Measurement harness: runs one compression method over a text and reports
//! sizes, elapsed time and ratio.
//!
//! Only the core transform is timed. For LZW that is dictionary construction
//! and code emission; packing the codes to bytes happens afterwards. For the
//! reference compressor it is the single zstd compress call.

use crate::codec::{lzw, packing, reference};
use crate::config::{BenchConfig, Method};
use crate::error::Result;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionStats {
	pub method: String,
	pub original_size: u64,
	pub compressed_size: u64,
	#[serde(rename = "time")]
	pub elapsed_secs: f64,
	pub ratio: f64,
}

impl CompressionStats {
	pub fn new(method: Method, original_size: u64, compressed_size: u64, elapsed: Duration) -> Self {
		Self {
			method: method.label().to_string(),
			original_size,
			compressed_size,
			elapsed_secs: elapsed.as_secs_f64(),
			ratio: compression_ratio(original_size, compressed_size),
		}
	}

	/// Ratio as shown to users, e.g. `"3.41:1"`.
	pub fn ratio_display(&self) -> String {
		format!("{:.2}:1", self.ratio)
	}

	/// Elapsed time as shown to users, e.g. `"0.0123 s"`.
	pub fn time_display(&self) -> String {
		format!("{:.4} s", self.elapsed_secs)
	}

	pub fn space_saved(&self) -> u64 {
		self.original_size.saturating_sub(self.compressed_size)
	}
}

/// `original / compressed`, or zero when nothing was produced.
pub fn compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
	if compressed_size > 0 { original_size as f64 / compressed_size as f64 } else { 0.0 }
}

/// Compress `text` with `method` and report on it.
///
/// Returns the statistics together with the compressed bytes. Nothing is
/// returned on failure; the underlying error is propagated as is.
pub fn measure(text: &str, method: Method, config: &BenchConfig) -> Result<(CompressionStats, Vec<u8>)> {
	let original_size = text.len() as u64;

	let (compressed, elapsed) = match method {
		Method::Lzw => {
			let start = Instant::now();
			let codes = lzw::encode_with(text, config.alphabet)?;
			let elapsed = start.elapsed();
			(packing::pack(&codes, config.code_encoding)?, elapsed)
		}
		Method::Reference => {
			let start = Instant::now();
			let frame = reference::compress(text.as_bytes(), config.zstd_level)?;
			(frame, start.elapsed())
		}
	};

	let stats = CompressionStats::new(method, original_size, compressed.len() as u64, elapsed);
	Ok((stats, compressed))
}

/// `measure` driven by a selector string such as `"lzw"` or `"reference"`.
pub fn measure_by_name(text: &str, selector: &str, config: &BenchConfig) -> Result<(CompressionStats, Vec<u8>)> {
	let method = selector.parse::<Method>()?;
	measure(text, method, config)
}

#[derive(Debug, Clone)]
pub struct Measurement {
	pub stats: CompressionStats,
	pub compressed: Vec<u8>,
}

impl From<(CompressionStats, Vec<u8>)> for Measurement {
	fn from((stats, compressed): (CompressionStats, Vec<u8>)) -> Self {
		Self { stats, compressed }
	}
}

/// Both methods measured over the same text.
#[derive(Debug, Clone)]
pub struct Comparison {
	pub lzw: Measurement,
	pub reference: Measurement,
}

impl Comparison {
	pub fn get(&self, method: Method) -> &Measurement {
		match method {
			Method::Lzw => &self.lzw,
			Method::Reference => &self.reference,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (Method, &Measurement)> + '_ {
		Method::ALL.into_iter().map(move |m| (m, self.get(m)))
	}

	/// Method with the higher ratio. Ties go to LZW.
	pub fn best(&self) -> Method {
		if self.reference.stats.ratio > self.lzw.stats.ratio { Method::Reference } else { Method::Lzw }
	}
}

/// Measure LZW, then the reference compressor, over `text`.
pub fn compare(text: &str, config: &BenchConfig) -> Result<Comparison> {
	let lzw = measure(text, Method::Lzw, config)?.into();
	let reference = measure(text, Method::Reference, config)?.into();
	Ok(Comparison { lzw, reference })
}
