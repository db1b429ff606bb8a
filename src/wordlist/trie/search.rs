use metrics::increment_counter;
use tracing::debug;

use crate::alphabet::{letters, Letter};
use crate::error::TrieError;
use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::TrieStore;

#[derive(Debug, PartialEq, Eq)]
enum SearchState<'w> {
    Walking(NodeId, &'w [Letter]),
    Matched,
    NotFound,
}

impl TrieStore {
    /// True iff `word` was inserted; a live path that ends on a non-terminal
    /// node is not a match.
    pub fn contains(&self, word: &str) -> Result<bool, TrieError> {
        let letters = letters(word)?;
        if letters.len() > self.max_word_length() {
            debug!(word, max = self.max_word_length(), "query exceeds maximum length");
            return Ok(false);
        }

        let mut state = match self.root() {
            Some(root) => SearchState::Walking(root, &letters[..]),
            None => SearchState::NotFound,
        };
        loop {
            state = match state {
                SearchState::Walking(node, []) => {
                    if self.node(node).is_terminal {
                        SearchState::Matched
                    } else {
                        SearchState::NotFound
                    }
                }
                SearchState::Walking(node, [next, rest @ ..]) => {
                    match self.node(node).get_child(*next) {
                        Some(child) => {
                            debug!(letter = %next.as_char(), "alphabet match");
                            SearchState::Walking(child, rest)
                        }
                        None => SearchState::NotFound,
                    }
                }
                SearchState::Matched => {
                    increment_counter!("dictionary.queries", "outcome" => "match");
                    return Ok(true);
                }
                SearchState::NotFound => {
                    increment_counter!("dictionary.queries", "outcome" => "no_match");
                    return Ok(false);
                }
            }
        }
    }
}
