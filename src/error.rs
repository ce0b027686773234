// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

/// Error type returned by random byte sources.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("Random source failure: {0}")]
    SourceFailure(#[source] SourceError),
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("Invalid size: {0}")]
    InvalidSize(String),
}

pub type IdResult<T> = Result<T, IdError>;
