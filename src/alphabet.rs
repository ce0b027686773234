// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, IdResult};

pub const MAX_ALPHABET_LEN: usize = 255;

/// Ordered set of unique symbols an id is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &[char]) -> IdResult<Self> {
        if symbols.is_empty() {
            return Err(IdError::InvalidAlphabet("Alphabet cannot be empty".to_string()));
        }

        if symbols.len() > MAX_ALPHABET_LEN {
            return Err(IdError::InvalidAlphabet(format!(
                "Alphabet has {} symbols, at most {} are supported",
                symbols.len(),
                MAX_ALPHABET_LEN
            )));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &ch in symbols {
            if !seen.insert(ch) {
                return Err(IdError::InvalidAlphabet(format!(
                    "Alphabet contains duplicate symbol '{}'",
                    ch
                )));
            }
        }

        Ok(Self { symbols: symbols.to_vec() })
    }

    // Caller guarantees the symbols are unique and within length bounds.
    pub(crate) fn from_trusted(symbols: &str) -> Self {
        Self { symbols: symbols.chars().collect() }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(&ch)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl FromStr for Alphabet {
    type Err = IdError;

    fn from_str(s: &str) -> IdResult<Self> {
        let symbols: Vec<char> = s.chars().collect();
        Self::new(&symbols)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = IdError;

    fn try_from(s: &str) -> IdResult<Self> {
        s.parse()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
