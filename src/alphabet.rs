use crate::error::TrieError;

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// A validated lowercase letter, stored as its position in [`ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub fn idx(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        ALPHABET[self.idx()] as char
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c as u8 - b'a'))
        } else {
            Err(c)
        }
    }
}

pub fn get_idx(c: char) -> Option<usize> {
    Letter::try_from(c).ok().map(Letter::idx)
}

/// Splits `word` into letters, rejecting the first character outside 'a'..='z'.
pub fn letters(word: &str) -> Result<Vec<Letter>, TrieError> {
    word.chars()
        .enumerate()
        .map(|(position, c)| {
            Letter::try_from(c).map_err(|character| TrieError::InvalidCharacter { character, position })
        })
        .collect()
}
