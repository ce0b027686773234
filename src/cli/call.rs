// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use tinyid::{
    default_id, format, Alphabet, ConfigError, Defaults, GeneratorConfig, InsecureSource, OsSource,
    RandomSource,
};
use tracing::{debug, warn};

use crate::parser::GenerateOptions;

/// Alphabets of 16, 32, 64 or 128 symbols take the one-byte-per-symbol path,
/// anything else goes through the rejection sampler.
pub fn generate_ids<S: RandomSource + ?Sized>(
    source: &mut S,
    options: &GenerateOptions,
    config: &GeneratorConfig,
) -> Result<Vec<String>, ConfigError> {
    let alphabet = match &options.alphabet {
        Some(symbols) => symbols.parse::<Alphabet>()?,
        None => config.alphabet()?,
    };
    let size = if options.size == 0 { config.size } else { options.size };
    let fast_path =
        Defaults::with_mask_table(alphabet.clone(), size, config.mask_table_size).ok();

    let mut ids = Vec::new();
    for _ in 0..options.count {
        let id = match &fast_path {
            Some(defaults) => default_id(&mut *source, defaults, 0)?,
            None => format(&mut *source, &alphabet, size, config.mask_table_size)?,
        };
        ids.push(id);
    }

    Ok(ids)
}

pub fn execute_command(options: &GenerateOptions, config: &GeneratorConfig) -> bool {
    let result = if options.insecure {
        warn!("Using a non-cryptographic random source, ids must not be used as secrets");
        generate_ids(&mut InsecureSource::from_entropy(), options, config)
    } else {
        generate_ids(&mut OsSource, options, config)
    };

    let ids = match result {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("Error: {}", e);
            return false;
        }
    };

    debug!("Generated {} id(s)", ids.len());

    if options.json {
        match serde_json::to_string(&ids) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return false;
            }
        }
    } else {
        for id in ids {
            println!("{}", id);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyid::{IdError, ReplaySource, DEFAULT_SIZE};

    #[test]
    fn default_options_use_fast_path() {
        let mut source = ReplaySource::new(vec![0, 1, 2]);
        let options = GenerateOptions::default();
        let ids = generate_ids(&mut source, &options, &GeneratorConfig::default()).unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].len(), DEFAULT_SIZE);
        assert!(ids[0].starts_with("_~0_~0"));
        assert_eq!(source.consumed(), DEFAULT_SIZE);
    }

    #[test]
    fn custom_alphabet_uses_sampler() {
        let options = GenerateOptions {
            size: 6,
            alphabet: Some("0123456789".to_string()),
            count: 2,
            ..GenerateOptions::default()
        };
        let mut source = ReplaySource::new(vec![5, 200, 12, 64, 9, 250, 3]);
        let ids = generate_ids(&mut source, &options, &GeneratorConfig::default()).unwrap();
        assert_eq!(ids[0], "580935");
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn invalid_alphabet_is_reported() {
        let options = GenerateOptions {
            alphabet: Some("aa".to_string()),
            ..GenerateOptions::default()
        };
        let result = generate_ids(&mut OsSource, &options, &GeneratorConfig::default());
        assert!(matches!(result, Err(ConfigError::Id(IdError::InvalidAlphabet(_)))));
    }

    #[test]
    fn huge_count_fails_on_first_id() {
        let options = GenerateOptions {
            size: usize::MAX,
            count: usize::MAX,
            ..GenerateOptions::default()
        };
        let result = generate_ids(&mut OsSource, &options, &GeneratorConfig::default());
        assert!(matches!(result, Err(ConfigError::Id(IdError::InvalidSize(_)))));
    }

    #[test]
    fn oversized_size_is_reported() {
        for alphabet in [None, Some("0123456789".to_string())] {
            let options = GenerateOptions {
                size: usize::MAX,
                alphabet,
                ..GenerateOptions::default()
            };
            let result = generate_ids(&mut OsSource, &options, &GeneratorConfig::default());
            assert!(matches!(result, Err(ConfigError::Id(IdError::InvalidSize(_)))));
        }
    }
}
