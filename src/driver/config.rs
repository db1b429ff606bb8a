use typed_builder::TypedBuilder;

use crate::wordlist::trie::MAX_WORD_LENGTH;

pub const DEFAULT_SENTINEL: &str = ":q";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct DriverConfig {
    /// Any token starting with this ends the current phase.
    #[builder(default = DEFAULT_SENTINEL.to_string(), setter(into))]
    pub sentinel: String,
    #[builder(default = MAX_WORD_LENGTH)]
    pub max_word_length: usize,
    #[builder(default = true)]
    pub prompts: bool,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig::builder().build()
    }
}
