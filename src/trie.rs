use std::collections::BTreeMap;
use std::path::Path;
use tracing::trace;

/// A path component in the token tree.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<String, TrieNode>,
    pub token_count: Option<usize>,
}

impl TrieNode {
    /// Tokens of this node plus everything below it.
    pub fn total_tokens(&self) -> usize {
        self.token_count.unwrap_or(0)
            + self
                .children
                .values()
                .map(TrieNode::total_tokens)
                .sum::<usize>()
    }
}

/// Token counts keyed by path, one node per path component.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Adds `token_count` to the leaf for `path`. A file merged twice counts twice.
    pub fn insert(&mut self, path: &Path, token_count: usize) {
        trace!("Inserting path: {:?} with token count: {}", path, token_count);
        let mut current_node = &mut self.root;
        for component in path.iter() {
            current_node = current_node
                .children
                .entry(component.to_string_lossy().into_owned())
                .or_default();
        }
        *current_node.token_count.get_or_insert(0) += token_count;
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
