// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use crate::alphabet::Alphabet;
use crate::error::{IdError, IdResult};
use crate::mask::{init_masks, select_mask, DEFAULT_MASK_TABLE_SIZE};
use crate::sampler::check_size;
use crate::source::{OsSource, RandomSource};

/// URL-safe alphabet of 64 symbols, six bits each.
pub const DEFAULT_ALPHABET: &str =
    "_~0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DEFAULT_SIZE: usize = 22;

/// Immutable settings for the fast id path.
///
/// The alphabet length is always `mask + 1` for an entry of the mask table
/// (16, 32, 64 or 128 symbols), so a single masked byte indexes it directly
/// and no byte is ever rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    alphabet: Alphabet,
    size: usize,
    mask: u8,
}

impl Defaults {
    pub fn builtin() -> Self {
        Self {
            alphabet: Alphabet::from_trusted(DEFAULT_ALPHABET),
            size: DEFAULT_SIZE,
            mask: 63,
        }
    }

    pub fn new(alphabet: Alphabet, size: usize) -> IdResult<Self> {
        Self::with_mask_table(alphabet, size, DEFAULT_MASK_TABLE_SIZE)
    }

    pub fn with_mask_table(
        alphabet: Alphabet,
        size: usize,
        mask_table_size: usize,
    ) -> IdResult<Self> {
        check_size(size)?;

        let masks = init_masks(mask_table_size);
        let mask = select_mask(&masks, alphabet.len())?;
        if mask as usize + 1 != alphabet.len() {
            return Err(IdError::InvalidAlphabet(format!(
                "Default alphabet must have exactly {} symbols to be indexed \
                 without rejection, got {}",
                mask as usize + 1,
                alphabet.len()
            )));
        }

        Ok(Self { alphabet, size, mask })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Generates an id from the default alphabet, one random byte per symbol.
///
/// A `size` of 0 selects `defaults.size()`.
pub fn default_id<S: RandomSource + ?Sized>(
    source: &mut S,
    defaults: &Defaults,
    size: usize,
) -> IdResult<String> {
    let size = if size == 0 { defaults.size } else { size };
    check_size(size)?;

    let mut bytes = vec![0u8; size];
    source.fill(&mut bytes).map_err(IdError::SourceFailure)?;

    Ok(bytes
        .iter()
        .map(|&byte| defaults.alphabet.symbol((byte & defaults.mask) as usize))
        .collect())
}

/// Secure URL-friendly id from the built-in alphabet. A `size` of 0 yields
/// the default length of 22.
pub fn nanoid(size: usize) -> IdResult<String> {
    default_id(&mut OsSource, &Defaults::builtin(), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::MAX_SIZE;
    use crate::source::ReplaySource;

    #[test]
    fn builtin_alphabet_is_valid() {
        let parsed: Alphabet = DEFAULT_ALPHABET.parse().unwrap();
        assert_eq!(parsed.len(), 64);
        assert_eq!(Defaults::new(parsed, DEFAULT_SIZE).unwrap(), Defaults::builtin());
    }

    #[test]
    fn builtin_mask_matches_mask_builder() {
        let masks = init_masks(DEFAULT_MASK_TABLE_SIZE);
        assert_eq!(select_mask(&masks, 64).unwrap(), Defaults::builtin().mask());
    }

    #[test]
    fn zero_means_default_length() {
        assert_eq!(nanoid(0).unwrap().len(), DEFAULT_SIZE);
        assert_eq!(nanoid(5).unwrap().len(), 5);
    }

    #[test]
    fn indexes_with_low_six_bits() {
        let mut source = ReplaySource::new(vec![0, 1, 2, 64, 255, 12]);
        let id = default_id(&mut source, &Defaults::builtin(), 6).unwrap();
        assert_eq!(id, "_~0_Za");
        assert_eq!(source.consumed(), 6);
    }

    #[test]
    fn custom_defaults() {
        let alphabet: Alphabet = "0123456789abcdef".parse().unwrap();
        let defaults = Defaults::new(alphabet, 8).unwrap();
        assert_eq!(defaults.mask(), 15);

        let id = default_id(&mut OsSource, &defaults, 0).unwrap();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn rejects_alphabet_needing_rejection() {
        let alphabet: Alphabet = "0123456789".parse().unwrap();
        assert!(matches!(Defaults::new(alphabet, 8), Err(IdError::InvalidAlphabet(_))));
    }

    #[test]
    fn rejects_zero_default_size() {
        let alphabet: Alphabet = DEFAULT_ALPHABET.parse().unwrap();
        assert!(matches!(Defaults::new(alphabet, 0), Err(IdError::InvalidSize(_))));
    }

    #[test]
    fn oversized_request_is_rejected() {
        let mut source = ReplaySource::new(vec![7]);

        let result = default_id(&mut source, &Defaults::builtin(), usize::MAX);
        assert!(matches!(result, Err(IdError::InvalidSize(_))));
        assert!(matches!(nanoid(usize::MAX), Err(IdError::InvalidSize(_))));
        assert_eq!(source.consumed(), 0);

        let alphabet: Alphabet = DEFAULT_ALPHABET.parse().unwrap();
        let result = Defaults::new(alphabet, MAX_SIZE + 1);
        assert!(matches!(result, Err(IdError::InvalidSize(_))));
    }
}
