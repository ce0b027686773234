// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

//! Short, URL-safe random identifiers over any alphabet of up to 255 symbols.
//!
//! ```
//! let id = tinyid::nanoid(0).unwrap();
//! assert_eq!(id.len(), 22);
//!
//! let digits: tinyid::Alphabet = "0123456789".parse().unwrap();
//! let pin = tinyid::generate(&digits, 6).unwrap();
//! assert_eq!(pin.len(), 6);
//! ```

pub mod alphabet;
pub mod configuration;
pub mod defaults;
pub mod error;
pub mod mask;
pub mod sampler;
pub mod source;

pub use alphabet::Alphabet;
pub use configuration::{ConfigError, GeneratorConfig};
pub use defaults::{default_id, nanoid, Defaults, DEFAULT_ALPHABET, DEFAULT_SIZE};
pub use error::{IdError, IdResult, SourceError};
pub use sampler::{format, generate, MAX_SIZE};
pub use source::{random_bytes, InsecureSource, OsSource, RandomSource, ReplaySource};

/// Generates an id from operating system randomness.
///
/// - `tinyid!()`: 22 symbols from the built-in alphabet
/// - `tinyid!(size)`: `size` symbols from the built-in alphabet
/// - `tinyid!(size, alphabet)`: `size` symbols from `alphabet` (a `&str`)
///
/// Evaluates to an [`IdResult<String>`].
#[macro_export]
macro_rules! tinyid {
    () => {
        $crate::nanoid(0)
    };
    ($size:expr) => {
        $crate::nanoid($size)
    };
    ($size:expr, $alphabet:expr) => {
        $alphabet
            .parse::<$crate::Alphabet>()
            .and_then(|alphabet| $crate::generate(&alphabet, $size))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macro_forms() {
        assert_eq!(tinyid!().unwrap().len(), 22);
        assert_eq!(tinyid!(9).unwrap().len(), 9);

        let id = tinyid!(12, "xyz").unwrap();
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| "xyz".contains(c)));

        assert!(tinyid!(4, "").is_err());
    }
}
