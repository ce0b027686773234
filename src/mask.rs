// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use crate::error::{IdError, IdResult};

pub const DEFAULT_MASK_TABLE_SIZE: usize = 5;
pub const MAX_MASK_TABLE_SIZE: usize = 28;

/// Builds the ascending table of all-ones masks `15, 31, 63, 127, 255, ...`.
///
/// Entry `i` is `(2 << (3 + i)) - 1`, a mask `4 + i` bits wide. Counts above
/// [`MAX_MASK_TABLE_SIZE`] are clamped so every entry fits in a `u32`.
pub fn init_masks(count: usize) -> Vec<u32> {
    (0..count.min(MAX_MASK_TABLE_SIZE) as u32)
        .map(|i| (2u32 << (3 + i)) - 1)
        .collect()
}

/// Picks the smallest mask in `masks` that covers every index of an alphabet
/// with `alphabet_len` symbols.
pub fn select_mask(masks: &[u32], alphabet_len: usize) -> IdResult<u8> {
    if alphabet_len == 0 {
        return Err(IdError::InvalidAlphabet("Alphabet cannot be empty".to_string()));
    }

    let highest_index = (alphabet_len - 1) as u64;

    match masks.iter().find(|&&mask| mask as u64 >= highest_index) {
        Some(&mask) => u8::try_from(mask).map_err(|_| {
            IdError::InvalidAlphabet(format!(
                "Alphabet of {} symbols needs a mask of {} which does not fit in a byte",
                alphabet_len, mask
            ))
        }),
        None => Err(IdError::InvalidAlphabet(format!(
            "Alphabet of {} symbols is not covered by the mask table (largest mask: {})",
            alphabet_len,
            masks.last().copied().unwrap_or(0)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        assert_eq!(init_masks(DEFAULT_MASK_TABLE_SIZE), vec![15, 31, 63, 127, 255]);
    }

    #[test]
    fn table_is_clamped() {
        let masks = init_masks(1000);
        assert_eq!(masks.len(), MAX_MASK_TABLE_SIZE);
        assert_eq!(*masks.last().unwrap(), u32::MAX >> 1);
    }

    #[test]
    fn selects_smallest_covering_mask() {
        let masks = init_masks(DEFAULT_MASK_TABLE_SIZE);
        assert_eq!(select_mask(&masks, 1).unwrap(), 15);
        assert_eq!(select_mask(&masks, 10).unwrap(), 15);
        assert_eq!(select_mask(&masks, 16).unwrap(), 15);
        assert_eq!(select_mask(&masks, 17).unwrap(), 31);
        assert_eq!(select_mask(&masks, 37).unwrap(), 63);
        assert_eq!(select_mask(&masks, 64).unwrap(), 63);
        assert_eq!(select_mask(&masks, 65).unwrap(), 127);
        assert_eq!(select_mask(&masks, 255).unwrap(), 255);
    }

    #[test]
    fn exhausted_table_is_an_error() {
        let masks = init_masks(2);
        assert!(matches!(select_mask(&masks, 33), Err(IdError::InvalidAlphabet(_))));
        assert!(matches!(select_mask(&[], 2), Err(IdError::InvalidAlphabet(_))));
    }

    #[test]
    fn empty_alphabet_is_an_error() {
        let masks = init_masks(DEFAULT_MASK_TABLE_SIZE);
        assert!(matches!(select_mask(&masks, 0), Err(IdError::InvalidAlphabet(_))));
    }
}
