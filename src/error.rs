use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("could not allocate a trie node: {0}")]
    AllocationFailure(#[from] TryReserveError),
    #[error("`{word}` is longer than {max} characters")]
    OversizedInput { word: String, max: usize },
    #[error("invalid character {character:?} at position {position}; only 'a' to 'z' are allowed")]
    InvalidCharacter { character: char, position: usize },
    #[error("cannot insert an empty word")]
    EmptyWord,
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not write verdict: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}
