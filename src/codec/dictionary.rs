//! LZW string table.
//!
//! A string `w + c` is keyed by `(code(w), c)`. Every prefix of a stored
//! string is itself stored, so the pair identifies exactly one string and
//! lookups stay O(1) no matter how long the run grows.

use std::collections::HashMap;

/// Number of single-symbol seed entries (Latin-1, U+0000..=U+00FF).
pub const SEED_SIZE: u32 = 256;

/// First code handed out to an entry that is not a Latin-1 seed.
pub const FIRST_DYNAMIC_CODE: u32 = SEED_SIZE;

#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Single symbols above U+00FF, only populated by `seeded_for`.
    extra_seeds: HashMap<char, u32>,
    entries: HashMap<(u32, char), u32>,
    next_code: u32,
}

impl Dictionary {
    /// Dictionary holding the 256 Latin-1 seeds, codes equal to scalar values.
    pub fn latin1() -> Self {
        Self {
            extra_seeds: HashMap::new(),
            entries: HashMap::new(),
            next_code: FIRST_DYNAMIC_CODE,
        }
    }

    /// Latin-1 seeds plus one entry for every distinct symbol above U+00FF in
    /// `text`, numbered in order of first appearance.
    pub fn seeded_for(text: &str) -> Self {
        let mut dict = Self::latin1();
        for c in text.chars() {
            if (c as u32) < SEED_SIZE || dict.extra_seeds.contains_key(&c) {
                continue;
            }
            let code = dict.allocate();
            dict.extra_seeds.insert(c, code);
        }
        dict
    }

    /// Code of the single-symbol string `c`, if it is part of the alphabet.
    pub fn seed_code(&self, c: char) -> Option<u32> {
        let scalar = c as u32;
        if scalar < SEED_SIZE {
            Some(scalar)
        } else {
            self.extra_seeds.get(&c).copied()
        }
    }

    /// Code of the string `code(prefix) + c`.
    pub fn lookup(&self, prefix: u32, c: char) -> Option<u32> {
        self.entries.get(&(prefix, c)).copied()
    }

    /// Store `code(prefix) + c` under the next free code and return that code.
    pub fn insert(&mut self, prefix: u32, c: char) -> u32 {
        let code = self.allocate();
        self.entries.insert((prefix, c), code);
        code
    }

    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// Total number of strings held, the 256 Latin-1 seeds included, so
    /// never less than `SEED_SIZE`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        SEED_SIZE as usize + self.extra_seeds.len() + self.entries.len()
    }

    fn allocate(&mut self) -> u32 {
        let code = self.next_code;
        self.next_code += 1;
        code
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::latin1()
    }
}
