use std::collections::HashMap;
use std::path::{Component, Path};
use tracing::trace;

/// A path component in the token tree. Leaves carry a file's token count.
#[derive(Default)]
pub struct TrieNode {
    pub children: HashMap<String, TrieNode>,
    pub token_count: Option<usize>,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Calculates the total number of tokens in the subtree.
    pub fn calculate_total_tokens(&self) -> usize {
        self.token_count.unwrap_or(0)
            + self
                .children
                .values()
                .map(|child| child.calculate_total_tokens())
                .sum::<usize>()
    }

    /// Children ordered by name.
    pub fn sorted_children(&self) -> Vec<(&String, &TrieNode)> {
        let mut children: Vec<_> = self.children.iter().collect();
        children.sort_by(|a, b| a.0.cmp(b.0));
        children
    }
}

#[derive(Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Inserts a path with its token count into the trie.
    pub fn insert(&mut self, path: &Path, token_count: usize) {
        let mut current_node = &mut self.root;
        let components = path.components().filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_owned()),
            _ => None,
        });
        for component_str in components {
            current_node = current_node
                .children
                .entry(component_str)
                .or_insert_with(TrieNode::new);
        }
        if current_node.token_count.is_some() {
            trace!("Overwriting existing token count for path: {:?}", path);
        }
        current_node.token_count = Some(token_count);
    }

    pub fn get_root(&self) -> &TrieNode {
        &self.root
    }
}
