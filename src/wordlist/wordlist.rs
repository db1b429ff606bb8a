use delegate::delegate;
use metrics::increment_counter;
use tracing::warn;

use crate::error::TrieError;
use crate::wordlist::trie::{Insertion, TrieStore};

/// The dictionary as the driver sees it: a [`TrieStore`] that refuses
/// oversized words up front instead of truncating them.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: TrieStore,
}

impl Wordlist {
    pub fn new(max_word_length: usize) -> Wordlist {
        Wordlist { trie: TrieStore::with_max_word_length(max_word_length) }
    }

    pub fn add(&mut self, word: &str) -> Result<Insertion, TrieError> {
        let max = self.trie.max_word_length();
        if word.chars().count() > max {
            warn!(word, max, "rejecting oversized dictionary word");
            increment_counter!("dictionary.rejected_tokens", "reason" => "oversized");
            return Err(TrieError::OversizedInput { word: word.to_string(), max });
        }
        self.trie.insert(word).map_err(|e| {
            increment_counter!("dictionary.rejected_tokens", "reason" => "invalid");
            e
        })
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> Result<bool, TrieError>;
            pub fn max_word_length(&self) -> usize;
            pub fn node_count(&self) -> usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TrieError;
    use crate::wordlist::wordlist::Wordlist;

    #[test]
    fn rejects_oversized_words_without_inserting() {
        let mut wl = Wordlist::new(4);
        assert_eq!(wl.add("horse"),
                   Err(TrieError::OversizedInput { word: "horse".to_string(), max: 4 }));
        assert_eq!(wl.node_count(), 0);

        wl.add("hors").unwrap();
        assert!(wl.contains("hors").unwrap());
        assert!(!wl.contains("horse").unwrap());
    }

    #[test]
    fn passes_through_store_errors() {
        let mut wl = Wordlist::default();
        assert_eq!(wl.max_word_length(), 15);
        assert_eq!(wl.add(""), Err(TrieError::EmptyWord));
        assert!(matches!(wl.add("Dog"), Err(TrieError::InvalidCharacter { .. })));
    }
}
