use crate::error::BenchError;
use std::fmt;
use std::str::FromStr;

/// Compression level the reference compressor runs at unless told otherwise.
pub const DEFAULT_ZSTD_LEVEL: i32 = 5;

/// Closed set of methods the harness can measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Lzw,
    Reference,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Lzw, Method::Reference];

    /// Selector accepted by `FromStr`.
    pub fn selector(self) -> &'static str {
        match self {
            Method::Lzw => "lzw",
            Method::Reference => "reference",
        }
    }

    /// Human-readable label reported in statistics.
    pub fn label(self) -> &'static str {
        match self {
            Method::Lzw => "LZW (Existing)",
            Method::Reference => "Z-Standard (Proposed)",
        }
    }

    /// Extension given to downloaded artifacts.
    pub fn extension(self) -> &'static str {
        match self {
            Method::Lzw => "lzw",
            Method::Reference => "zst",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Method {
    type Err = BenchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lzw" => Ok(Method::Lzw),
            "reference" | "z-standard" | "zstd" => Ok(Method::Reference),
            _ => Err(BenchError::UnknownMethod(s.to_string())),
        }
    }
}

/// What the encoder does with symbols above U+00FF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphabetPolicy {
    /// Reject the input with `BenchError::UnsupportedSymbol`.
    #[default]
    Strict,
    /// Seed the dictionary with the extra symbols found in the input.
    Extend,
}

impl FromStr for AlphabetPolicy {
    type Err = BenchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(AlphabetPolicy::Strict),
            "extend" => Ok(AlphabetPolicy::Extend),
            _ => Err(BenchError::Config(format!("Invalid alphabet policy: {}", s))),
        }
    }
}

/// Byte layout used to size an LZW code sequence. See `codec::packing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeEncoding {
    #[default]
    Bincode,
    Fixed,
    Varint,
}

impl FromStr for CodeEncoding {
    type Err = BenchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bincode" => Ok(CodeEncoding::Bincode),
            "fixed" => Ok(CodeEncoding::Fixed),
            "varint" | "leb128" => Ok(CodeEncoding::Varint),
            _ => Err(BenchError::Config(format!("Invalid code encoding: {}", s))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub zstd_level: i32,
    pub code_encoding: CodeEncoding,
    pub alphabet: AlphabetPolicy,
    pub threads: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            zstd_level: DEFAULT_ZSTD_LEVEL,
            code_encoding: CodeEncoding::default(),
            alphabet: AlphabetPolicy::default(),
            threads: num_cpus::get(),
        }
    }
}

impl BenchConfig {
    pub fn with_level(mut self, level: i32) -> Self {
        self.zstd_level = level;
        self
    }

    pub fn with_encoding(mut self, encoding: CodeEncoding) -> Self {
        self.code_encoding = encoding;
        self
    }

    pub fn with_alphabet(mut self, alphabet: AlphabetPolicy) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        crate::codec::reference::check_level(self.zstd_level)?;
        if self.threads == 0 {
            return Err(BenchError::Config("thread count must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_selectors() {
        assert_eq!("lzw".parse::<Method>().unwrap(), Method::Lzw);
        assert_eq!("reference".parse::<Method>().unwrap(), Method::Reference);
        assert_eq!("Z-Standard".parse::<Method>().unwrap(), Method::Reference);
        assert_eq!("zstd".parse::<Method>().unwrap(), Method::Reference);
    }

    #[test]
    fn test_unknown_method() {
        match "gzip".parse::<Method>() {
            Err(BenchError::UnknownMethod(sel)) => assert_eq!(sel, "gzip"),
            other => panic!("expected UnknownMethod, got {:?}", other),
        }
    }

    #[test]
    fn test_selector_roundtrip() {
        for method in Method::ALL {
            assert_eq!(method.selector().parse::<Method>().unwrap(), method);
        }
        assert_eq!(Method::Lzw.extension(), "lzw");
        assert_eq!(Method::Reference.extension(), "zst");
    }

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.zstd_level, 5);
        assert_eq!(config.code_encoding, CodeEncoding::Bincode);
        assert_eq!(config.alphabet, AlphabetPolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_level() {
        let config = BenchConfig::default().with_level(1000);
        assert!(matches!(config.validate(), Err(BenchError::Config(_))));
    }

    #[test]
    fn test_zero_threads() {
        let config = BenchConfig::default().with_threads(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!("extend".parse::<AlphabetPolicy>().unwrap(), AlphabetPolicy::Extend);
        assert_eq!("LEB128".parse::<CodeEncoding>().unwrap(), CodeEncoding::Varint);
        assert!("latin9".parse::<AlphabetPolicy>().is_err());
        assert!("msgpack".parse::<CodeEncoding>().is_err());
    }
}
