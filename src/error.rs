use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
	#[error("Input is not valid UTF-8 text: {0}")]
	Decode(#[from] std::str::Utf8Error),

	#[error("Unsupported symbol {symbol:?} at position {position}: outside the seed alphabet")]
	UnsupportedSymbol { symbol: char, position: usize },

	#[error("Unknown compression method: {0}")]
	UnknownMethod(String),

	#[error("Reference compressor failed: {0}")]
	Compressor(String),

	#[error("Failed to serialize code sequence: {0}")]
	Serialization(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("No stored artifact for session {session:?} and method {method}")]
	ArtifactNotFound { session: String, method: String },
}

pub type Result<T> = std::result::Result<T, BenchError>;
