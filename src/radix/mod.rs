//! Compact prefix trie whose per-node child stores are nested AVL trees.

pub mod node;
pub mod tree;

pub use node::{ChildRef, RadixNode};
pub use tree::{Existence, RadixTree, SearchOutcome};
