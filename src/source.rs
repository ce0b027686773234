// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

use crate::error::SourceError;

/// A supplier of random bytes. This is the only entropy input of the generators.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes, or fails without a usable result.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill(dest)
    }
}

/// Cryptographically secure bytes from the operating system.
///
/// Safe for session tokens and other security-sensitive identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl RandomSource for OsSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        OsRng.try_fill_bytes(dest).map_err(|e| Box::new(e) as SourceError)
    }
}

/// Fast, NON-cryptographic source.
///
/// Its output is predictable to anyone who learns the generator state. Only
/// use it for ids that carry no security meaning (test fixtures, log
/// correlation, sharding keys).
#[derive(Debug, Clone)]
pub struct InsecureSource {
    rng: SmallRng,
}

impl InsecureSource {
    pub fn from_entropy() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl RandomSource for InsecureSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        self.rng.try_fill_bytes(dest).map_err(|e| Box::new(e) as SourceError)
    }
}

/// Deterministic source replaying a fixed byte sequence, wrapping around at
/// the end. The cursor carries over between fills.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    bytes: Vec<u8>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), cursor: 0 }
    }

    /// Total number of bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplaySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        if self.bytes.is_empty() {
            return Err("Replay source has no bytes to replay".into());
        }

        for byte in dest.iter_mut() {
            *byte = self.bytes[self.cursor % self.bytes.len()];
            self.cursor += 1;
        }

        Ok(())
    }
}

/// Fetches `n` cryptographically secure random bytes.
pub fn random_bytes(n: usize) -> crate::IdResult<Vec<u8>> {
    let mut bytes = vec![0u8; n];
    OsSource.fill(&mut bytes).map_err(crate::IdError::SourceFailure)?;
    Ok(bytes)
}
