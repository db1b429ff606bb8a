use std::fmt::{Debug, Formatter};

use crate::alphabet::{Letter, ALPHABET};

/// Position of a node in its store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
}

#[derive(Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<NodeId>; ALPHABET.len()],
    /// `None` only for the root.
    pub(crate) letter: Option<Letter>,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl TrieNode {
    pub(crate) fn root() -> TrieNode {
        Default::default()
    }

    pub(crate) fn new(letter: Letter, depth: usize) -> TrieNode {
        TrieNode {
            children: Default::default(),
            letter: Some(letter),
            is_terminal: false,
            depth,
        }
    }

    pub(crate) fn get_child(&self, letter: Letter) -> Option<NodeId> {
        self.children[letter.idx()]
    }

    pub(crate) fn set_child(&mut self, letter: Letter, child: NodeId) {
        self.children[letter.idx()] = Some(child);
    }

    /// Children in alphabetical order, paired with their letter.
    pub(crate) fn iter_children(&self) -> impl Iterator<Item=(char, NodeId)> + '_ {
        self.children.iter()
            .enumerate()
            .filter_map(|(idx, child)| child.map(|id| (ALPHABET[idx] as char, id)))
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter.map(Letter::as_char))
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.iter_children()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
