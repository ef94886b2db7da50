//! # lzw-bench
//!
//! Benchmarks a textbook LZW dictionary compressor against Zstandard on
//! tabular text data such as CSV exports.
//!
//! ## Encoding
//!
//! ```rust
//! use lzwbench::encode;
//!
//! let codes = encode("AAAABBBCCD").unwrap();
//! assert_eq!(codes, vec![65, 256, 65, 66, 259, 67, 67, 68]);
//! ```
//!
//! ## Measuring
//!
//! ```rust
//! use lzwbench::{measure, BenchConfig, Method};
//!
//! let text = "id,name\n1,alice\n2,bob\n".repeat(50);
//! let config = BenchConfig::default();
//!
//! let (stats, compressed) = measure(&text, Method::Reference, &config).unwrap();
//! assert_eq!(stats.compressed_size, compressed.len() as u64);
//! println!("{} {} {}", stats.method, stats.ratio_display(), stats.time_display());
//! ```
//!
//! ## Comparing
//!
//! ```rust
//! use lzwbench::{compare, report, BenchConfig};
//!
//! let text = "id,name\n1,alice\n2,bob\n".repeat(50);
//! let comparison = compare(&text, &BenchConfig::default()).unwrap();
//! print!("{}", report::comparison_csv([&comparison]));
//! ```

pub mod artifact;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod harness;
pub mod report;

// Re-export commonly used types for convenience
pub use artifact::{download_filename, ArtifactStore, Download};
pub use codec::{encode, encode_with, Dictionary};
pub use config::{AlphabetPolicy, BenchConfig, CodeEncoding, Method, DEFAULT_ZSTD_LEVEL};
pub use error::{BenchError, Result};
pub use harness::{compare, measure, measure_by_name, Comparison, CompressionStats, Measurement};

/// Validate uploaded bytes as UTF-8 text before they reach the encoder.
pub fn decode_input(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
