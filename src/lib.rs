pub mod alphabet;
pub mod driver;
pub mod error;
pub mod wordlist;

pub use driver::{Driver, Outcome, Session, Verdict};
pub use driver::config::{DriverConfig, OutputFormat};
pub use error::{DriverError, TrieError};
pub use wordlist::trie::{Insertion, TrieStore, MAX_WORD_LENGTH};
