//! Compact prefix trie with AVL-ordered children.
//!
//! Words are grouped into independent buckets by their first code unit;
//! each bucket is a tree of labeled nodes where concatenating labels from
//! the bucket root to a leaf spells a stored word. A node whose path
//! spells a word while longer words continue below it carries an
//! empty-label terminator child. Per-node children live in a nested
//! [`AvlTree`] keyed by the child's leading code unit.

use std::collections::HashMap;

use crate::print::{PrintNode, Printable};
use crate::types::Traversal;

use super::node::{char_rank, child_store, ChildRef, RadixNode};

/// Outcome category of a [`RadixTree::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Existence {
    /// The entire needle matched, landing on a node boundary or inside a
    /// node's label.
    Exists,
    /// The needle diverged mid-label or ran out of matching children;
    /// the reported node is the insertion anchor.
    CanExist,
    /// No bucket exists for the needle's first code unit.
    NotFound,
}

/// Full search record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub existence: Existence,
    /// Concatenated labels from the bucket root through the matched
    /// node; `None` when nothing matched.
    pub word: Option<String>,
    /// How many characters of the last visited node's label matched.
    pub last_similarity: usize,
    /// Index into the needle one past the last matched character.
    pub next_position: usize,
    /// The needle ended strictly inside the matched node's label.
    pub is_substring: bool,
    pub(crate) node: Option<u32>,
}

impl SearchOutcome {
    fn not_found() -> Self {
        Self {
            existence: Existence::NotFound,
            word: None,
            last_similarity: 0,
            next_position: 0,
            is_substring: false,
            node: None,
        }
    }
}

/// Radix tree over strings.
pub struct RadixTree {
    nodes: Vec<RadixNode>,
    free: Vec<u32>,
    buckets: HashMap<char, u32>,
    len: usize,
}

impl RadixTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            buckets: HashMap::new(),
            len: 0,
        }
    }

    fn push_node(&mut self, label: String, parent: Option<u32>) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.nodes[i as usize] = RadixNode::new(label, parent);
                i
            }
            None => {
                self.nodes.push(RadixNode::new(label, parent));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    /// Child of `node` whose label starts with `head`, found by a BST
    /// descent over the children store.
    fn child_by_head(&self, node: u32, head: Option<char>) -> Option<u32> {
        let rank = char_rank(head);
        self.nodes[node as usize]
            .children
            .first_where(|c| {
                let rc = char_rank(c.head);
                if rc == rank {
                    0
                } else if rc > rank {
                    1
                } else {
                    -1
                }
            })
            .map(|c| c.node)
    }

    fn children_of(&self, node: u32) -> Vec<u32> {
        self.nodes[node as usize]
            .children
            .ordered(Traversal::InOrder)
            .iter()
            .map(|c| c.node)
            .collect()
    }

    fn add_child(&mut self, parent: u32, label: String) -> u32 {
        let idx = self.push_node(label, Some(parent));
        let head = self.nodes[idx as usize].label.chars().next();
        self.nodes[parent as usize]
            .children
            .insert(ChildRef { head, node: idx });
        idx
    }

    fn remove_child_entry(&mut self, parent: u32, head: Option<char>) -> Option<ChildRef> {
        let rank = char_rank(head);
        self.nodes[parent as usize].children.remove_first_where(|c| {
            let rc = char_rank(c.head);
            if rc == rank {
                0
            } else if rc > rank {
                1
            } else {
                -1
            }
        })
    }

    /// Walks the needle down its bucket, reporting how far it matched.
    pub fn search(&self, needle: &str) -> SearchOutcome {
        let chars: Vec<char> = needle.chars().collect();
        let Some(&first) = chars.first() else {
            return SearchOutcome::not_found();
        };
        let Some(&root) = self.buckets.get(&first) else {
            return SearchOutcome::not_found();
        };

        let mut node = root;
        let mut pos = 0usize;
        let mut word = String::new();
        loop {
            let label = &self.nodes[node as usize].label;
            let mut m = 0usize;
            for (lc, nc) in label.chars().zip(chars[pos..].iter()) {
                if lc != *nc {
                    break;
                }
                m += 1;
            }
            let label_len = label.chars().count();
            pos += m;
            word.push_str(label);

            if m < label_len {
                // The needle ended or diverged inside this label.
                let consumed = pos == chars.len();
                return SearchOutcome {
                    existence: if consumed {
                        Existence::Exists
                    } else {
                        Existence::CanExist
                    },
                    word: Some(word),
                    last_similarity: m,
                    next_position: pos,
                    is_substring: consumed,
                    node: Some(node),
                };
            }
            if pos == chars.len() {
                return SearchOutcome {
                    existence: Existence::Exists,
                    word: Some(word),
                    last_similarity: m,
                    next_position: pos,
                    is_substring: false,
                    node: Some(node),
                };
            }
            match self.child_by_head(node, Some(chars[pos])) {
                Some(c) => node = c,
                None => {
                    return SearchOutcome {
                        existence: Existence::CanExist,
                        word: Some(word),
                        last_similarity: m,
                        next_position: pos,
                        is_substring: false,
                        node: Some(node),
                    }
                }
            }
        }
    }

    /// Like [`RadixTree::search`], but inserts the needle as a side
    /// effect when the outcome matches `insert_on` and the word was not
    /// already there.
    pub fn search_or_insert(&mut self, needle: &str, insert_on: Existence) -> SearchOutcome {
        let out = self.search(needle);
        if out.existence == insert_on && out.existence != Existence::Exists {
            self.insert(needle);
        }
        out
    }

    /// True when the needle is a stored word or a prefix of one.
    pub fn contains(&self, needle: &str) -> bool {
        self.search(needle).existence == Existence::Exists
    }

    /// Inserts the trimmed word; empty or whitespace-only input is a
    /// no-op.
    pub fn insert(&mut self, word: &str) {
        self.insert_impl(word);
    }

    /// Inserts like [`RadixTree::insert`] and returns the labels from
    /// the bucket root down to the node where the word terminates.
    pub fn insert_with_path(&mut self, word: &str) -> Vec<String> {
        let Some(terminal) = self.insert_impl(word) else {
            return Vec::new();
        };
        let mut labels = vec![self.nodes[terminal as usize].label.clone()];
        let mut curr = self.nodes[terminal as usize].parent;
        while let Some(p) = curr {
            labels.push(self.nodes[p as usize].label.clone());
            curr = self.nodes[p as usize].parent;
        }
        labels.reverse();
        labels
    }

    fn insert_impl(&mut self, word: &str) -> Option<u32> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        let chars: Vec<char> = word.chars().collect();
        let bucket = chars[0];
        if !self.buckets.contains_key(&bucket) {
            let idx = self.push_node(word.to_string(), None);
            self.buckets.insert(bucket, idx);
            self.len += 1;
            return Some(idx);
        }

        let out = self.search(word);
        let node = out.node.expect("bucket is non-empty");
        let label_len = self.nodes[node as usize].label.chars().count();

        if out.existence == Existence::Exists && !out.is_substring {
            // Landed exactly on a node boundary.
            if self.nodes[node as usize].is_leaf() || self.child_by_head(node, None).is_some() {
                return Some(node);
            }
            // Known prefix, not yet a word: mark it with a terminator.
            self.add_child(node, String::new());
            self.len += 1;
            return Some(node);
        }

        if out.is_substring || out.last_similarity < label_len {
            return Some(self.split_label(node, &chars, out.last_similarity, out.next_position, bucket));
        }

        // Label fully consumed and no child continues the needle.
        let was_leaf = self.nodes[node as usize].is_leaf();
        if was_leaf {
            // Keep the word that used to end here.
            self.add_child(node, String::new());
        }
        let tail: String = chars[out.next_position..].iter().collect();
        let idx = self.add_child(node, tail);
        self.len += 1;
        Some(idx)
    }

    /// Splits `node` at `m` characters into its label: a new internal
    /// node takes the common prefix and `node` keeps the old tail, with
    /// the needle's tail as a new sibling (empty for a terminator).
    fn split_label(&mut self, node: u32, chars: &[char], m: usize, pos: usize, bucket: char) -> u32 {
        let label = self.nodes[node as usize].label.clone();
        let common: String = label.chars().take(m).collect();
        let tail_old: String = label.chars().skip(m).collect();
        let tail_new: String = chars[pos..].iter().collect();

        let parent = self.nodes[node as usize].parent;
        let fork = self.push_node(common, parent);
        match parent {
            None => {
                self.buckets.insert(bucket, fork);
            }
            Some(p) => {
                let head = label.chars().next();
                let _ = self.remove_child_entry(p, head);
                self.nodes[p as usize]
                    .children
                    .insert(ChildRef { head, node: fork });
            }
        }

        self.nodes[node as usize].label = tail_old;
        self.nodes[node as usize].parent = Some(fork);
        let old_head = self.nodes[node as usize].label.chars().next();
        self.nodes[fork as usize]
            .children
            .insert(ChildRef {
                head: old_head,
                node,
            });

        let sibling = self.push_node(tail_new, Some(fork));
        let sib_head = self.nodes[sibling as usize].label.chars().next();
        self.nodes[fork as usize]
            .children
            .insert(ChildRef {
                head: sib_head,
                node: sibling,
            });
        self.len += 1;

        if self.nodes[sibling as usize].label.is_empty() {
            fork
        } else {
            sibling
        }
    }

    /// All stored words beginning with `prefix`. Within a bucket the
    /// results come out in ascending label order; with an empty prefix
    /// the buckets appear in map order.
    pub fn suffixes(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if prefix.is_empty() {
            for &root in self.buckets.values() {
                self.collect_words(root, "", &mut out);
            }
            return out;
        }

        let found = self.search(prefix);
        if found.existence != Existence::Exists {
            return out;
        }
        let node = found.node.expect("match reported");
        let above = self.prefix_above(node);
        self.collect_words(node, &above, &mut out);
        out
    }

    fn prefix_above(&self, node: u32) -> String {
        let mut labels = Vec::new();
        let mut curr = self.nodes[node as usize].parent;
        while let Some(p) = curr {
            labels.push(self.nodes[p as usize].label.as_str());
            curr = self.nodes[p as usize].parent;
        }
        labels.into_iter().rev().collect()
    }

    fn collect_words(&self, node: u32, prefix: &str, out: &mut Vec<String>) {
        let mut word = String::with_capacity(prefix.len() + self.nodes[node as usize].label.len());
        word.push_str(prefix);
        word.push_str(&self.nodes[node as usize].label);
        if self.nodes[node as usize].is_leaf() {
            out.push(word);
            return;
        }
        for child in self.children_of(node) {
            self.collect_words(child, &word, out);
        }
    }

    /// Removes the word equal to `needle`, or with `delete_if_substring`
    /// the whole subtree rooted where the needle terminates. A needle
    /// that is only a strict prefix of stored words is refused unless
    /// `delete_if_substring` is set.
    pub fn delete(&mut self, needle: &str, delete_if_substring: bool) -> bool {
        let out = self.search(needle);
        if out.existence != Existence::Exists {
            return false;
        }
        if out.is_substring && !delete_if_substring {
            return false;
        }

        let node = out.node.expect("match reported");
        let removed_words = self.leaf_count(node);
        match self.nodes[node as usize].parent {
            None => {
                let bucket = needle.chars().next().expect("non-empty needle");
                self.buckets.remove(&bucket);
                self.free_subtree(node);
            }
            Some(p) => {
                let head = self.nodes[node as usize].label.chars().next();
                let _ = self.remove_child_entry(p, head);
                self.free_subtree(node);
                self.compact(p);
            }
        }
        self.len -= removed_words;
        true
    }

    /// Merges `p`'s only remaining child into `p`: labels concatenate,
    /// grandchildren are adopted. A lone terminator child collapses `p`
    /// back into a leaf.
    fn compact(&mut self, p: u32) {
        if self.nodes[p as usize].children.len() != 1 {
            return;
        }
        let lone = *self
            .nodes[p as usize]
            .children
            .lowest()
            .expect("single child");
        let child = lone.node;

        let child_label = std::mem::take(&mut self.nodes[child as usize].label);
        let grands = std::mem::replace(&mut self.nodes[child as usize].children, child_store());
        let grand_ids: Vec<u32> = grands
            .ordered(Traversal::InOrder)
            .iter()
            .map(|c| c.node)
            .collect();

        self.nodes[p as usize].label.push_str(&child_label);
        self.nodes[p as usize].children = grands;
        for g in grand_ids {
            self.nodes[g as usize].parent = Some(p);
        }

        self.nodes[child as usize].parent = None;
        self.free.push(child);
    }

    fn leaf_count(&self, node: u32) -> usize {
        let mut count = 0;
        let mut stack = vec![node];
        while let Some(i) = stack.pop() {
            let kids = self.children_of(i);
            if kids.is_empty() {
                count += 1;
            } else {
                stack.extend(kids);
            }
        }
        count
    }

    fn free_subtree(&mut self, node: u32) {
        let mut stack = vec![node];
        while let Some(i) = stack.pop() {
            stack.extend(self.children_of(i));
            let slot = &mut self.nodes[i as usize];
            slot.label.clear();
            slot.parent = None;
            slot.children = child_store();
            self.free.push(i);
        }
    }

    /// Every stored word in ascending order.
    pub fn words(&self) -> Vec<String> {
        let mut out = self.suffixes("");
        out.sort();
        out
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.buckets.clear();
        self.len = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks every structural invariant; returns the first violation.
    pub fn assert_valid(&self) -> Result<(), String> {
        let mut leaves = 0usize;
        for (&bucket, &root) in self.buckets.iter() {
            if self.nodes[root as usize].parent.is_some() {
                return Err("Bucket root has parent".to_string());
            }
            if self.nodes[root as usize].label.chars().next() != Some(bucket) {
                return Err(format!("Bucket root label does not start with {bucket:?}"));
            }

            let mut stack = vec![root];
            while let Some(i) = stack.pop() {
                self.nodes[i as usize].children.assert_valid()?;
                let entries: Vec<ChildRef> = self.nodes[i as usize]
                    .children
                    .ordered(Traversal::InOrder)
                    .iter()
                    .map(|c| **c)
                    .collect();
                if entries.len() == 1 && i != root {
                    return Err("Uncompacted single-child node".to_string());
                }
                for entry in &entries {
                    let child = entry.node;
                    if self.nodes[child as usize].parent != Some(i) {
                        return Err("Broken radix parent link".to_string());
                    }
                    if self.nodes[child as usize].label.chars().next() != entry.head {
                        return Err("Child store head out of sync with label".to_string());
                    }
                    if entry.head.is_none() && !self.nodes[child as usize].is_leaf() {
                        return Err("Terminator sentinel with children".to_string());
                    }
                    stack.push(child);
                }
                if entries.is_empty() {
                    leaves += 1;
                }
            }
        }
        if leaves != self.len {
            return Err(format!(
                "Word count mismatch: cached {}, counted {leaves}",
                self.len
            ));
        }
        Ok(())
    }

    fn print_node(&self, i: u32) -> PrintNode {
        let mut out = PrintNode::new(format!("{:?}", self.nodes[i as usize].label));
        for child in self.children_of(i) {
            out.children.push(self.print_node(child));
        }
        out
    }
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Printable for RadixTree {
    fn tree_name(&self) -> &str {
        "RadixTree"
    }

    fn is_empty(&self) -> bool {
        RadixTree::is_empty(self)
    }

    fn root_nodes(&self) -> Vec<PrintNode> {
        self.buckets.values().map(|&r| self.print_node(r)).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RadixTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.words())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn first_word_becomes_the_bucket_root() {
        let mut tree = RadixTree::new();
        tree.insert("saddle");
        assert!(tree.contains("saddle"));
        assert!(tree.contains("sad"));
        assert!(!tree.contains("saddles"));
        assert_eq!(tree.len(), 1);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn insert_splits_on_divergence() {
        let mut tree = RadixTree::new();
        tree.insert("saddle");
        tree.insert("saddened");
        assert!(tree.contains("saddle"));
        assert!(tree.contains("saddened"));
        assert_eq!(
            sorted(tree.suffixes("sad")),
            vec!["saddened".to_string(), "saddle".to_string()]
        );
        tree.assert_valid().unwrap();
    }

    #[test]
    fn extension_of_a_leaf_keeps_the_shorter_word() {
        let mut tree = RadixTree::new();
        tree.insert("sum");
        let path = tree.insert_with_path("summer");
        assert_eq!(path, vec!["sum".to_string(), "mer".to_string()]);
        assert!(tree.contains("sum"));
        assert!(tree.contains("summer"));
        assert_eq!(tree.len(), 2);

        let path = tree.insert_with_path("summed");
        assert_eq!(
            path,
            vec!["sum".to_string(), "me".to_string(), "d".to_string()]
        );
        assert_eq!(tree.len(), 3);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn shorter_word_into_existing_label_creates_a_terminator() {
        let mut tree = RadixTree::new();
        tree.insert("summer");
        tree.insert("sum");
        assert!(tree.contains("sum"));
        assert!(tree.contains("summer"));
        assert_eq!(
            sorted(tree.suffixes("")),
            vec!["sum".to_string(), "summer".to_string()]
        );
        tree.assert_valid().unwrap();
    }

    #[test]
    fn marking_an_internal_boundary_as_a_word() {
        let mut tree = RadixTree::new();
        tree.insert("abc");
        tree.insert("abd");
        assert_eq!(tree.len(), 2);
        // "ab" is the fork label but not yet a word leaf.
        tree.insert("ab");
        assert_eq!(tree.len(), 3);
        assert_eq!(
            sorted(tree.suffixes("")),
            vec!["ab".to_string(), "abc".to_string(), "abd".to_string()]
        );
        // Re-inserting is a no-op.
        tree.insert("ab");
        assert_eq!(tree.len(), 3);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut tree = RadixTree::new();
        tree.insert("sum");
        tree.insert("sum");
        assert_eq!(tree.len(), 1);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn whitespace_input_is_rejected() {
        let mut tree = RadixTree::new();
        tree.insert("");
        tree.insert("   ");
        assert!(tree.is_empty());
        assert_eq!(tree.insert_with_path("  "), Vec::<String>::new());
        // Trimming applies before bucketing.
        tree.insert("  sum  ");
        assert!(tree.contains("sum"));
    }

    #[test]
    fn search_reports_positions() {
        let mut tree = RadixTree::new();
        tree.insert("summer");
        let out = tree.search("sum");
        assert_eq!(out.existence, Existence::Exists);
        assert!(out.is_substring);
        assert_eq!(out.last_similarity, 3);
        assert_eq!(out.next_position, 3);
        assert_eq!(out.word.as_deref(), Some("summer"));

        let out = tree.search("sunny");
        assert_eq!(out.existence, Existence::CanExist);
        assert_eq!(out.last_similarity, 2);
        assert_eq!(out.next_position, 2);

        let out = tree.search("winter");
        assert_eq!(out.existence, Existence::NotFound);
        assert_eq!(out.word, None);
    }

    #[test]
    fn search_or_insert_only_fires_on_matching_outcome() {
        let mut tree = RadixTree::new();
        tree.insert("sum");
        tree.search_or_insert("sunny", Existence::NotFound);
        assert!(!tree.contains("sunny"));
        tree.search_or_insert("sunny", Existence::CanExist);
        assert!(tree.contains("sunny"));
        tree.search_or_insert("winter", Existence::NotFound);
        assert!(tree.contains("winter"));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn delete_refuses_strict_prefix_without_flag() {
        let mut tree = RadixTree::new();
        tree.insert("summer");
        assert!(!tree.delete("sum", false));
        assert!(tree.contains("summer"));
        assert!(tree.delete("sum", true));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_word_compacts_the_parent() {
        let mut tree = RadixTree::new();
        tree.insert("sum");
        tree.insert("summer");
        assert!(tree.delete("summer", false));
        assert_eq!(tree.suffixes(""), vec!["sum".to_string()]);
        assert_eq!(tree.len(), 1);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn delete_subtree_drops_every_word_below() {
        let mut tree = RadixTree::new();
        for word in ["saddle", "saddened", "sack", "summer"] {
            tree.insert(word);
        }
        assert!(tree.delete("sad", true));
        assert!(tree.suffixes("sad").is_empty());
        assert_eq!(
            sorted(tree.suffixes("s")),
            vec!["sack".to_string(), "summer".to_string()]
        );
        assert_eq!(tree.len(), 2);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn delete_missing_word_returns_false() {
        let mut tree = RadixTree::new();
        tree.insert("sum");
        assert!(!tree.delete("winter", false));
        assert!(!tree.delete("sus", false));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn suffixes_of_mid_label_prefix() {
        let mut tree = RadixTree::new();
        tree.insert("saddle");
        tree.insert("saddened");
        tree.insert("sack");
        assert_eq!(
            sorted(tree.suffixes("sad")),
            vec!["saddened".to_string(), "saddle".to_string()]
        );
        assert_eq!(tree.suffixes("sax"), Vec::<String>::new());
    }

    #[test]
    fn suffixes_within_a_bucket_are_label_ordered() {
        let mut tree = RadixTree::new();
        for word in ["sum", "summer", "saddle", "sack"] {
            tree.insert(word);
        }
        assert_eq!(
            tree.suffixes("s"),
            vec![
                "sack".to_string(),
                "saddle".to_string(),
                "sum".to_string(),
                "summer".to_string()
            ]
        );
    }

    #[test]
    fn words_are_globally_sorted() {
        let mut tree = RadixTree::new();
        for word in ["mud", "ash", "zig", "ant"] {
            tree.insert(word);
        }
        assert_eq!(
            tree.words(),
            vec![
                "ant".to_string(),
                "ash".to_string(),
                "mud".to_string(),
                "zig".to_string()
            ]
        );
    }

    #[test]
    fn buckets_are_independent() {
        let mut tree = RadixTree::new();
        tree.insert("alpha");
        tree.insert("beta");
        assert!(tree.delete("alpha", false));
        assert!(tree.contains("beta"));
        assert_eq!(tree.len(), 1);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut tree = RadixTree::new();
        tree.insert("alpha");
        tree.insert("beta");
        assert!(tree.delete("alpha", false));
        let before = tree.nodes.len();
        tree.insert("brie");
        // "beta"/"brie" fork into three nodes; two fit in freed + grown slots.
        assert!(tree.nodes.len() <= before + 2);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn unicode_labels_split_on_char_boundaries() {
        let mut tree = RadixTree::new();
        tree.insert("grüßen");
        tree.insert("grün");
        assert!(tree.contains("grüßen"));
        assert!(tree.contains("grün"));
        assert_eq!(
            sorted(tree.suffixes("grü")),
            vec!["grün".to_string(), "grüßen".to_string()]
        );
        tree.assert_valid().unwrap();
    }
}
