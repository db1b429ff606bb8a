use std::fmt::{Debug, Formatter};

use metrics::{counter, increment_counter};
use tracing::{debug, warn};

use crate::alphabet::{letters, Letter};
use crate::error::TrieError;
use crate::wordlist::trie::node::{NodeId, TrieNode};

pub const MAX_WORD_LENGTH: usize = 15;

/// Prefix tree over the lowercase alphabet.
///
/// Nodes live in a single arena and refer to their children by index, so every
/// node is owned by the store and reachable from exactly one parent slot. The
/// root is allocated on the first insertion.
pub struct TrieStore {
    pub(crate) nodes: Vec<TrieNode>,
    max_word_length: usize,
}

/// What a single [`TrieStore::insert`] did to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insertion {
    pub nodes_created: usize,
    pub truncated: bool,
    pub newly_terminal: bool,
}

impl Default for TrieStore {
    fn default() -> Self {
        TrieStore::new()
    }
}

impl TrieStore {
    pub fn new() -> Self {
        Self::with_max_word_length(MAX_WORD_LENGTH)
    }

    pub fn with_max_word_length(max_word_length: usize) -> Self {
        TrieStore {
            nodes: Vec::new(),
            max_word_length,
        }
    }

    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `word`, reusing every node already on its path.
    ///
    /// Words longer than the bound stop extending at the bound and are not
    /// marked terminal.
    pub fn insert(&mut self, word: &str) -> Result<Insertion, TrieError> {
        let letters = letters(word)?;
        if letters.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let truncated = letters.len() > self.max_word_length;
        if truncated {
            warn!(word, max = self.max_word_length, "word exceeds maximum length, truncating");
        }
        let bounded = &letters[..letters.len().min(self.max_word_length)];

        let mut insertion = Insertion { truncated, ..Default::default() };
        let mut current = self.root_or_create()?;
        for &letter in bounded {
            current = match self.node(current).get_child(letter) {
                Some(child) => child,
                None => {
                    let depth = self.node(current).depth + 1;
                    let child = self.alloc(TrieNode::new(letter, depth))?;
                    self.node_mut(current).set_child(letter, child);
                    insertion.nodes_created += 1;
                    debug!(letter = %letter.as_char(), depth, "inserted letter");
                    child
                }
            };
        }

        if !truncated {
            let end = self.node_mut(current);
            insertion.newly_terminal = !end.is_terminal;
            end.is_terminal = true;
            debug!(word, "end-of-word flag set");
        }

        counter!("dictionary.nodes_created", insertion.nodes_created as u64);
        if insertion.newly_terminal {
            increment_counter!("dictionary.words_inserted");
        }
        Ok(insertion)
    }

    pub fn insert_all<'f, I>(&mut self, items: I) -> Result<usize, TrieError>
        where I: IntoIterator<Item=&'f str> {
        let mut created = 0;
        for word in items {
            created += self.insert(word)?.nodes_created;
        }
        Ok(created)
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() { None } else { Some(NodeId::ROOT) }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    fn root_or_create(&mut self) -> Result<NodeId, TrieError> {
        match self.root() {
            Some(root) => Ok(root),
            None => self.alloc(TrieNode::root()),
        }
    }

    fn alloc(&mut self, node: TrieNode) -> Result<NodeId, TrieError> {
        self.nodes.try_reserve(1)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// Follows `letters` from the root without checking terminal flags.
    pub(crate) fn get_node(&self, letters: &[Letter]) -> Option<NodeId> {
        letters.iter()
            .try_fold(self.root()?, |node, &letter| self.node(node).get_child(letter))
    }
}

impl Debug for TrieStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            l.entry(node);
            node.iter_children().for_each(|(_, child)| stack.push(child));
        }
        l.finish()
    }
}
