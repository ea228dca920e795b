//! Mutable, comparator-parameterized ordered set.

use std::fmt::Display;

use crate::print::{PrintNode, Printable};
use crate::types::{default_comparator, Traversal};

use super::node::AvlNode;
use super::util::{
    assert_avl_tree, breadth_first_indices, find, find_by, first, in_order_indices, insert_at,
    last, next, post_order_indices, pre_order_indices, remove_node, value,
};

/// AVL tree set over `T`.
///
/// Values are unique under the comparator fixed at construction; a
/// duplicate insert is a silent no-op. Nodes live in an arena owned by
/// the tree, freed slots are recycled. The in-order first and last
/// values are cached and kept current across every mutation.
#[derive(Debug)]
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    pub(crate) nodes: Vec<AvlNode<T>>,
    pub(crate) free: Vec<u32>,
    pub(crate) root: Option<u32>,
    pub(crate) lowest: Option<u32>,
    pub(crate) highest: Option<u32>,
    pub(crate) len: usize,
    pub(crate) comparator: C,
}

impl<T> AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            lowest: None,
            highest: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) fn push_node(&mut self, value: T) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.nodes[i as usize] = AvlNode::new(value);
                i
            }
            None => {
                self.nodes.push(AvlNode::new(value));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    /// Vacates a detached node's slot and hands its value back.
    pub(crate) fn free_slot(&mut self, i: u32) -> Option<T> {
        let node = &mut self.nodes[i as usize];
        node.p = None;
        node.l = None;
        node.r = None;
        node.height = 0;
        node.count = 1;
        let value = node.value.take();
        self.free.push(i);
        value
    }

    /// Inserts `value`; a value comparing equal to an existing one leaves
    /// the tree untouched.
    pub fn insert(&mut self, value: T) {
        let n = self.push_node(value);
        let Some(root) = self.root else {
            self.root = Some(n);
            self.lowest = Some(n);
            self.highest = Some(n);
            self.len = 1;
            return;
        };

        let (new_root, inserted) = insert_at(&mut self.nodes, root, n, &self.comparator);
        if !inserted {
            let _ = self.free_slot(n);
            return;
        }
        self.root = Some(new_root);
        self.len += 1;

        let lo = self.lowest.expect("non-empty tree");
        if (self.comparator)(super::util::value(&self.nodes, n), super::util::value(&self.nodes, lo)) < 0 {
            self.lowest = Some(n);
        }
        let hi = self.highest.expect("non-empty tree");
        if (self.comparator)(super::util::value(&self.nodes, n), super::util::value(&self.nodes, hi)) > 0 {
            self.highest = Some(n);
        }
    }

    /// Removes the value comparing equal to `probe`; returns whether a
    /// node was removed.
    pub fn remove(&mut self, probe: &T) -> bool {
        let Some(n) = find(&self.nodes, self.root, probe, &self.comparator) else {
            return false;
        };
        self.detach(n);
        let _ = self.free_slot(n);
        true
    }

    /// Like [`AvlTree::remove`], but locates the node with a caller
    /// comparator instead of the tree's own. The comparator must agree
    /// with the tree's order along the descent.
    pub fn remove_with<F>(&mut self, probe: &T, cmp: F) -> bool
    where
        F: Fn(&T, &T) -> i32,
    {
        let Some(n) = find(&self.nodes, self.root, probe, &cmp) else {
            return false;
        };
        self.detach(n);
        let _ = self.free_slot(n);
        true
    }

    pub fn contains(&self, probe: &T) -> bool {
        find(&self.nodes, self.root, probe, &self.comparator).is_some()
    }

    pub fn contains_with<F>(&self, probe: &T, cmp: F) -> bool
    where
        F: Fn(&T, &T) -> i32,
    {
        find(&self.nodes, self.root, probe, &cmp).is_some()
    }

    /// First value along the BST descent for which the unary comparator
    /// returns 0. `u(value) > 0` directs the descent left, `< 0` right;
    /// a predicate that does not partition the tree this way finds
    /// nothing. For general filtering use [`AvlTree::ordered_filtered`].
    pub fn first_where<U>(&self, u: U) -> Option<&T>
    where
        U: Fn(&T) -> i32,
    {
        find_by(&self.nodes, self.root, &u).map(|i| value(&self.nodes, i))
    }

    /// Removes the node [`AvlTree::first_where`] would find and returns
    /// its value.
    pub fn remove_first_where<U>(&mut self, u: U) -> Option<T>
    where
        U: Fn(&T) -> i32,
    {
        let n = find_by(&self.nodes, self.root, &u)?;
        self.detach(n);
        self.free_slot(n)
    }

    fn detach(&mut self, n: u32) {
        self.root = remove_node(&mut self.nodes, n);
        self.len -= 1;
        if self.lowest == Some(n) {
            self.lowest = first(&self.nodes, self.root);
        }
        if self.highest == Some(n) {
            self.highest = last(&self.nodes, self.root);
        }
    }

    fn indices(&self, order: Traversal) -> Vec<u32> {
        match order {
            Traversal::InOrder => in_order_indices(&self.nodes, self.root),
            Traversal::PreOrder => pre_order_indices(&self.nodes, self.root),
            Traversal::PostOrder => post_order_indices(&self.nodes, self.root),
            Traversal::BreadthFirst => breadth_first_indices(&self.nodes, self.root),
        }
    }

    /// Values in the requested traversal order.
    pub fn ordered(&self, order: Traversal) -> Vec<&T> {
        self.indices(order)
            .iter()
            .map(|&i| value(&self.nodes, i))
            .collect()
    }

    /// Values in the requested order, keeping only those the filter
    /// accepts. Filtering happens at visit time and does not change the
    /// traversal order.
    pub fn ordered_filtered<F>(&self, order: Traversal, filter: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.indices(order)
            .iter()
            .map(|&i| value(&self.nodes, i))
            .filter(|v| filter(v))
            .collect()
    }

    /// Largest value not greater than `probe`, if any.
    pub fn get_or_next_lower(&self, probe: &T) -> Option<&T> {
        let mut curr = self.root;
        let mut result = None;
        while let Some(i) = curr {
            if (self.comparator)(value(&self.nodes, i), probe) > 0 {
                curr = self.nodes[i as usize].l;
            } else {
                result = Some(i);
                curr = self.nodes[i as usize].r;
            }
        }
        result.map(|i| value(&self.nodes, i))
    }

    /// Smallest value not lower than `probe`, if any.
    pub fn get_or_next_higher(&self, probe: &T) -> Option<&T> {
        let mut curr = self.root;
        let mut result = None;
        while let Some(i) = curr {
            if (self.comparator)(value(&self.nodes, i), probe) < 0 {
                curr = self.nodes[i as usize].r;
            } else {
                result = Some(i);
                curr = self.nodes[i as usize].l;
            }
        }
        result.map(|i| value(&self.nodes, i))
    }

    /// Ascending iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut curr = first(&self.nodes, self.root);
        std::iter::from_fn(move || {
            let i = curr?;
            curr = next(&self.nodes, i);
            Some(value(&self.nodes, i))
        })
    }

    /// Visits every value in ascending order.
    pub fn for_each<F: FnMut(&T)>(&self, mut f: F) {
        for v in self.iter() {
            f(v);
        }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.lowest = None;
        self.highest = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root height; -1 for the empty tree, 0 for a single node.
    pub fn height(&self) -> i32 {
        self.root
            .map(|r| self.nodes[r as usize].height)
            .unwrap_or(-1)
    }

    pub fn root(&self) -> Option<&T> {
        self.root.map(|r| value(&self.nodes, r))
    }

    pub fn lowest(&self) -> Option<&T> {
        self.lowest.map(|i| value(&self.nodes, i))
    }

    pub fn highest(&self) -> Option<&T> {
        self.highest.map(|i| value(&self.nodes, i))
    }

    /// Recomputes the derived state after a bulk operation rewired the
    /// node graph underneath the wrapper.
    pub(crate) fn rederive(&mut self) {
        self.lowest = first(&self.nodes, self.root);
        self.highest = last(&self.nodes, self.root);
        self.len = self
            .root
            .map(|r| self.nodes[r as usize].count)
            .unwrap_or(0);
    }

    /// Checks every structural invariant; returns the first violation.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.nodes, self.root, &self.comparator)?;

        let in_order = in_order_indices(&self.nodes, self.root);
        if in_order.len() != self.len {
            return Err(format!(
                "Length mismatch: cached {}, traversed {}",
                self.len,
                in_order.len()
            ));
        }
        if self.lowest != in_order.first().copied() {
            return Err("Lowest cache out of date".to_string());
        }
        if self.highest != in_order.last().copied() {
            return Err("Highest cache out of date".to_string());
        }
        Ok(())
    }
}

impl<T, C> Printable for AvlTree<T, C>
where
    T: Display,
    C: Fn(&T, &T) -> i32,
{
    fn tree_name(&self) -> &str {
        "AvlTree"
    }

    fn is_empty(&self) -> bool {
        AvlTree::is_empty(self)
    }

    fn root_nodes(&self) -> Vec<PrintNode> {
        fn build<T: Display>(nodes: &[AvlNode<T>], i: u32) -> PrintNode {
            let mut out = PrintNode::new(format!("{}", value(nodes, i)));
            if let Some(l) = nodes[i as usize].l {
                out.children.push(build(nodes, l));
            }
            if let Some(r) = nodes[i as usize].r {
                out.children.push(build(nodes, r));
            }
            out
        }
        self.root
            .map(|r| vec![build(&self.nodes, r)])
            .unwrap_or_default()
    }
}

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for AvlTree<T, C>
where
    T: serde::Serialize,
    C: Fn(&T, &T) -> i32,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ordered(Traversal::InOrder))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
