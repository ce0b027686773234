// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use crate::alphabet::Alphabet;
use crate::error::{IdError, IdResult};
use crate::mask::{init_masks, select_mask, DEFAULT_MASK_TABLE_SIZE};
use crate::source::{OsSource, RandomSource};

const OVERSAMPLING: f64 = 1.6;

/// Longest id either generation path accepts, in symbols.
pub const MAX_SIZE: usize = 1 << 20;

/// Fails with `InvalidSize` unless `size` is in `1..=MAX_SIZE`.
pub fn check_size(size: usize) -> IdResult<()> {
    if size == 0 {
        return Err(IdError::InvalidSize("Id size must be at least 1".to_string()));
    }

    if size > MAX_SIZE {
        return Err(IdError::InvalidSize(format!(
            "Id size {} exceeds the maximum of {}",
            size, MAX_SIZE
        )));
    }

    Ok(())
}

/// Number of random bytes requested per sampling round.
pub fn step_size(mask: u8, size: usize, alphabet_len: usize) -> usize {
    let step = (OVERSAMPLING * mask as f64 * size as f64 / alphabet_len as f64).ceil();
    (step as usize).max(1)
}

/// Generates an id of `size` symbols from `alphabet` using bytes from `source`.
///
/// Each byte is masked down to the smallest all-ones width covering the
/// alphabet and rejected when it lands past the last symbol, so every symbol
/// is equally likely regardless of the alphabet size.
pub fn format<S: RandomSource + ?Sized>(
    source: &mut S,
    alphabet: &Alphabet,
    size: usize,
    mask_table_size: usize,
) -> IdResult<String> {
    check_size(size)?;

    let masks = init_masks(mask_table_size);
    let mask = select_mask(&masks, alphabet.len())?;
    let step = step_size(mask, size, alphabet.len());

    let mut id = String::with_capacity(size);
    let mut accepted = 0;
    let mut batch = vec![0u8; step];

    loop {
        source.fill(&mut batch).map_err(IdError::SourceFailure)?;

        for &byte in &batch {
            let index = (byte & mask) as usize;
            if index < alphabet.len() {
                id.push(alphabet.symbol(index));
                accepted += 1;
                if accepted == size {
                    return Ok(id);
                }
            }
        }
    }
}

/// Generates an id over `alphabet` from operating system randomness.
pub fn generate(alphabet: &Alphabet, size: usize) -> IdResult<String> {
    format(&mut OsSource, alphabet, size, DEFAULT_MASK_TABLE_SIZE)
}
