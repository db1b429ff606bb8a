pub mod trie;
pub mod search;

mod node;

pub use trie::{Insertion, TrieStore, MAX_WORD_LENGTH};
