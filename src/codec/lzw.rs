//! LZW encoder over `char` symbols.

use super::dictionary::Dictionary;
use crate::config::AlphabetPolicy;
use crate::error::{BenchError, Result};

/// Encode `text` against the Latin-1 seed alphabet, rejecting anything above U+00FF.
pub fn encode(text: &str) -> Result<Vec<u32>> {
    encode_with(text, AlphabetPolicy::Strict)
}

/// Encode `text` with an explicit policy for symbols outside Latin-1.
pub fn encode_with(text: &str, policy: AlphabetPolicy) -> Result<Vec<u32>> {
    let mut dict = match policy {
        AlphabetPolicy::Strict => Dictionary::latin1(),
        AlphabetPolicy::Extend => Dictionary::seeded_for(text),
    };
    encode_with_dictionary(text, &mut dict)
}

/// Run the encoder against a caller-supplied dictionary, growing it in place.
///
/// The working string `w` is tracked by its code; `None` is the empty string.
pub fn encode_with_dictionary(text: &str, dict: &mut Dictionary) -> Result<Vec<u32>> {
    let mut codes = Vec::new();
    let mut current: Option<u32> = None;

    for (position, c) in text.chars().enumerate() {
        let seed = dict
            .seed_code(c)
            .ok_or(BenchError::UnsupportedSymbol { symbol: c, position })?;

        current = Some(match current {
            None => seed,
            Some(w) => match dict.lookup(w, c) {
                Some(wc) => wc,
                None => {
                    codes.push(w);
                    dict.insert(w, c);
                    seed
                }
            },
        });
    }

    if let Some(w) = current {
        codes.push(w);
    }

    Ok(codes)
}
