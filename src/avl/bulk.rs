//! Bulk set algebra over AVL node graphs: `split`, `join`, `join2` and
//! the set operations built on them.
//!
//! Everything here works at the node level inside a single arena. The
//! public entry points absorb the right operand's arena into the left
//! one first (indices remapped by offset), run the recursion, then
//! re-derive the wrapper state. Operands are consumed by value; the
//! result keeps the left operand's comparator.

use std::collections::HashMap;
use std::fmt::Display;

use thiserror::Error;

use super::node::AvlNode;
use super::tree::AvlTree;
use super::util::{height, link_left, link_right, rebalance, refresh, value, Arena};

/// Overlap precondition failure raised by [`join_trees`] before any
/// mutation happens. Bounds of an empty side render as `∅`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlapError {
    #[error("Cannot join 2 overlapping trees. The key \"{key}\" must be greater than \"{lower_bound}\" and lower than \"{upper_bound}\" based on the comparator provided")]
    Keyed {
        key: String,
        lower_bound: String,
        upper_bound: String,
    },
    #[error("Cannot join 2 overlapping trees. The lowerbound of \"{lower_bound}\" must be less than the upperbound of \"{upper_bound}\"")]
    Unkeyed {
        lower_bound: String,
        upper_bound: String,
    },
}

impl OverlapError {
    /// Stringified join key; `None` for the key-less form.
    pub fn key(&self) -> Option<&str> {
        match self {
            OverlapError::Keyed { key, .. } => Some(key),
            OverlapError::Unkeyed { .. } => None,
        }
    }

    pub fn lower_bound(&self) -> &str {
        match self {
            OverlapError::Keyed { lower_bound, .. } => lower_bound,
            OverlapError::Unkeyed { lower_bound, .. } => lower_bound,
        }
    }

    pub fn upper_bound(&self) -> &str {
        match self {
            OverlapError::Keyed { upper_bound, .. } => upper_bound,
            OverlapError::Unkeyed { upper_bound, .. } => upper_bound,
        }
    }
}

/// Result of [`AvlTree::split_at`].
pub struct Split<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Values strictly below the split key.
    pub left: AvlTree<T, C>,
    /// Whether the key itself was in the tree.
    pub is_present: bool,
    /// Values strictly above the split key.
    pub right: AvlTree<T, C>,
}

fn detach_children<T>(arena: &mut Arena<T>, n: u32) -> (Option<u32>, Option<u32>) {
    let l = arena[n as usize].l.take();
    let r = arena[n as usize].r.take();
    if let Some(l) = l {
        arena[l as usize].p = None;
    }
    if let Some(r) = r {
        arena[r as usize].p = None;
    }
    arena[n as usize].p = None;
    (l, r)
}

/// Joins `l`, the key node `k` and `r` into one AVL subtree, assuming
/// every value in `l` < `k` < every value in `r`. Balanced for any
/// operand heights; cost is proportional to their height difference.
pub(crate) fn join_nodes<T>(arena: &mut Arena<T>, l: Option<u32>, k: u32, r: Option<u32>) -> u32 {
    let hl = height(arena, l);
    let hr = height(arena, r);
    if hl > hr + 1 {
        join_right(arena, l.expect("taller side exists"), k, r)
    } else if hr > hl + 1 {
        join_left(arena, l, k, r.expect("taller side exists"))
    } else {
        arena[k as usize].p = None;
        link_left(arena, k, l);
        link_right(arena, k, r);
        refresh(arena, k);
        k
    }
}

/// Descends the right spine of the taller left operand until the spine
/// subtree is short enough to pair with `r` under a fresh `k`, then
/// rebalances on the unwind. Returns the subtree root.
fn join_right<T>(arena: &mut Arena<T>, t: u32, k: u32, r: Option<u32>) -> u32 {
    let tr = arena[t as usize].r;
    if height(arena, tr) <= height(arena, r) + 1 {
        link_left(arena, k, tr);
        link_right(arena, k, r);
        refresh(arena, k);
        link_right(arena, t, Some(k));
    } else {
        join_right(arena, tr.expect("spine continues"), k, r);
    }
    refresh(arena, t);
    rebalance(arena, t)
}

fn join_left<T>(arena: &mut Arena<T>, l: Option<u32>, k: u32, t: u32) -> u32 {
    let tl = arena[t as usize].l;
    if height(arena, tl) <= height(arena, l) + 1 {
        link_left(arena, k, l);
        link_right(arena, k, tl);
        refresh(arena, k);
        link_left(arena, t, Some(k));
    } else {
        join_left(arena, l, k, tl.expect("spine continues"));
    }
    refresh(arena, t);
    rebalance(arena, t)
}

/// Splits off the maximum of the subtree rooted at `n`. Returns the
/// remaining subtree and the detached maximum node.
fn split_last<T>(arena: &mut Arena<T>, n: u32) -> (Option<u32>, u32) {
    let r = arena[n as usize].r.take();
    match r {
        None => {
            let l = arena[n as usize].l.take();
            if let Some(l) = l {
                arena[l as usize].p = None;
            }
            arena[n as usize].p = None;
            (l, n)
        }
        Some(r) => {
            arena[r as usize].p = None;
            let (rest, max) = split_last(arena, r);
            let l = arena[n as usize].l.take();
            if let Some(l) = l {
                arena[l as usize].p = None;
            }
            arena[n as usize].p = None;
            (Some(join_nodes(arena, l, n, rest)), max)
        }
    }
}

/// Join without a middle key; the maximum of `l` is pulled out to serve
/// as one.
pub(crate) fn join2_nodes<T>(
    arena: &mut Arena<T>,
    l: Option<u32>,
    r: Option<u32>,
) -> Option<u32> {
    match (l, r) {
        (None, r) => r,
        (l, None) => l,
        (Some(l), Some(r)) => {
            let (rest, max) = split_last(arena, l);
            Some(join_nodes(arena, rest, max, Some(r)))
        }
    }
}

/// Partitions the subtree at `node` around `key` into strictly-less and
/// strictly-greater subtrees plus the detached node comparing equal to
/// `key`, if any.
pub(crate) fn split_nodes<T, C>(
    arena: &mut Arena<T>,
    node: Option<u32>,
    key: &T,
    cmp: &C,
) -> (Option<u32>, Option<u32>, Option<u32>)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(n) = node else {
        return (None, None, None);
    };
    let (l, r) = detach_children(arena, n);
    let ord = cmp(key, value(arena, n));
    if ord == 0 {
        (l, Some(n), r)
    } else if ord < 0 {
        let (sl, eq, sr) = split_nodes(arena, l, key, cmp);
        let joined = join_nodes(arena, sr, n, r);
        (sl, eq, Some(joined))
    } else {
        let (sl, eq, sr) = split_nodes(arena, r, key, cmp);
        let joined = join_nodes(arena, l, n, sl);
        (Some(joined), eq, sr)
    }
}

fn free_subtree<T>(arena: &mut Arena<T>, free: &mut Vec<u32>, n: u32) {
    let mut stack = vec![n];
    while let Some(i) = stack.pop() {
        let node = &mut arena[i as usize];
        if let Some(l) = node.l.take() {
            stack.push(l);
        }
        if let Some(r) = node.r.take() {
            stack.push(r);
        }
        node.p = None;
        node.height = 0;
        node.count = 1;
        node.value = None;
        free.push(i);
    }
}

fn free_one<T>(arena: &mut Arena<T>, free: &mut Vec<u32>, n: u32) {
    let node = &mut arena[n as usize];
    node.p = None;
    node.l = None;
    node.r = None;
    node.height = 0;
    node.count = 1;
    node.value = None;
    free.push(n);
}

fn union_nodes<T, C>(
    arena: &mut Arena<T>,
    free: &mut Vec<u32>,
    n1: Option<u32>,
    n2: Option<u32>,
    cmp: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(n2) = n2 else {
        return n1;
    };
    if n1.is_none() {
        return Some(n2);
    }

    let (l2, r2) = detach_children(arena, n2);
    let key = arena[n2 as usize].value.take().expect("live node");
    let (l1, eq, r1) = split_nodes(arena, n1, &key, cmp);
    arena[n2 as usize].value = Some(key);
    if let Some(eq) = eq {
        // Duplicate absorbed by the join key.
        free_one(arena, free, eq);
    }

    let l = union_nodes(arena, free, l1, l2, cmp);
    let r = union_nodes(arena, free, r1, r2, cmp);
    Some(join_nodes(arena, l, n2, r))
}

fn intersection_nodes<T, C>(
    arena: &mut Arena<T>,
    free: &mut Vec<u32>,
    n1: Option<u32>,
    n2: Option<u32>,
    cmp: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let (n1, n2) = match (n1, n2) {
        (Some(n1), Some(n2)) => (n1, n2),
        (Some(n1), None) => {
            free_subtree(arena, free, n1);
            return None;
        }
        (None, Some(n2)) => {
            free_subtree(arena, free, n2);
            return None;
        }
        (None, None) => return None,
    };

    let (l2, r2) = detach_children(arena, n2);
    let key = arena[n2 as usize].value.take().expect("live node");
    let (l1, eq, r1) = split_nodes(arena, Some(n1), &key, cmp);
    arena[n2 as usize].value = Some(key);

    let l = intersection_nodes(arena, free, l1, l2, cmp);
    let r = intersection_nodes(arena, free, r1, r2, cmp);

    match eq {
        Some(eq) => {
            // The key was on both sides; n2 carries it into the result.
            free_one(arena, free, eq);
            Some(join_nodes(arena, l, n2, r))
        }
        None => {
            free_one(arena, free, n2);
            join2_nodes(arena, l, r)
        }
    }
}

fn difference_nodes<T, C>(
    arena: &mut Arena<T>,
    free: &mut Vec<u32>,
    n1: Option<u32>,
    n2: Option<u32>,
    cmp: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(n1) = n1 else {
        if let Some(n2) = n2 {
            free_subtree(arena, free, n2);
        }
        return None;
    };
    let Some(n2) = n2 else {
        return Some(n1);
    };

    let (l2, r2) = detach_children(arena, n2);
    let key = arena[n2 as usize].value.take().expect("live node");
    let (l1, eq, r1) = split_nodes(arena, Some(n1), &key, cmp);
    arena[n2 as usize].value = Some(key);
    // The key is dropped whether or not the first tree held it.
    if let Some(eq) = eq {
        free_one(arena, free, eq);
    }
    free_one(arena, free, n2);

    let l = difference_nodes(arena, free, l1, l2, cmp);
    let r = difference_nodes(arena, free, r1, r2, cmp);
    join2_nodes(arena, l, r)
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Moves `other`'s arena into this one, remapping its indices by a
    /// fixed offset. Returns `other`'s remapped root.
    fn absorb<C2>(&mut self, other: AvlTree<T, C2>) -> Option<u32>
    where
        C2: Fn(&T, &T) -> i32,
    {
        let base = self.nodes.len() as u32;
        let shift = |i: Option<u32>| i.map(|i| i + base);
        for mut node in other.nodes {
            node.p = shift(node.p);
            node.l = shift(node.l);
            node.r = shift(node.r);
            self.nodes.push(node);
        }
        for f in other.free {
            self.free.push(f + base);
        }
        shift(other.root)
    }

    /// Set union. Both operands are consumed; the result keeps this
    /// tree's comparator.
    pub fn union<C2>(mut self, other: AvlTree<T, C2>) -> AvlTree<T, C>
    where
        C2: Fn(&T, &T) -> i32,
    {
        let rb = self.absorb(other);
        let ra = self.root.take();
        self.root = union_nodes(&mut self.nodes, &mut self.free, ra, rb, &self.comparator);
        self.rederive();
        self
    }

    /// Set intersection. Both operands are consumed.
    pub fn intersection<C2>(mut self, other: AvlTree<T, C2>) -> AvlTree<T, C>
    where
        C2: Fn(&T, &T) -> i32,
    {
        let rb = self.absorb(other);
        let ra = self.root.take();
        self.root =
            intersection_nodes(&mut self.nodes, &mut self.free, ra, rb, &self.comparator);
        self.rederive();
        self
    }

    /// Values of this tree not present in `other`. Both operands are
    /// consumed.
    pub fn difference<C2>(mut self, other: AvlTree<T, C2>) -> AvlTree<T, C>
    where
        C2: Fn(&T, &T) -> i32,
    {
        let rb = self.absorb(other);
        let ra = self.root.take();
        self.root =
            difference_nodes(&mut self.nodes, &mut self.free, ra, rb, &self.comparator);
        self.rederive();
        self
    }

    /// Splits the tree at `key` into strictly-less and strictly-greater
    /// trees plus a flag telling whether `key` was present. The key
    /// itself is dropped. An empty tree yields two empty trees.
    pub fn split_at(mut self, key: &T) -> Split<T, C>
    where
        C: Clone,
    {
        let root = self.root.take();
        let (l, eq, r) = split_nodes(&mut self.nodes, root, key, &self.comparator);
        let is_present = eq.is_some();
        if let Some(eq) = eq {
            free_one(&mut self.nodes, &mut self.free, eq);
        }

        let right = self.carve_out(r);
        self.root = l;
        self.rederive();

        Split {
            left: self,
            is_present,
            right,
        }
    }

    /// Moves the subtree at `sub` into a brand-new tree with its own
    /// arena; the vacated slots go to this tree's free list.
    fn carve_out(&mut self, sub: Option<u32>) -> AvlTree<T, C>
    where
        C: Clone,
    {
        let mut out = AvlTree::with_comparator(self.comparator.clone());
        let Some(sub) = sub else {
            return out;
        };

        let mut order = Vec::new();
        let mut stack = vec![sub];
        while let Some(i) = stack.pop() {
            order.push(i);
            if let Some(l) = self.nodes[i as usize].l {
                stack.push(l);
            }
            if let Some(r) = self.nodes[i as usize].r {
                stack.push(r);
            }
        }
        let remap: HashMap<u32, u32> = order
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new as u32))
            .collect();

        for &old in &order {
            let node = &mut self.nodes[old as usize];
            let mut moved = AvlNode::new(node.value.take().expect("live node"));
            moved.height = node.height;
            moved.count = node.count;
            moved.p = node.p.and_then(|p| remap.get(&p).copied());
            moved.l = node.l.map(|l| remap[&l]);
            moved.r = node.r.map(|r| remap[&r]);
            node.p = None;
            node.l = None;
            node.r = None;
            node.height = 0;
            node.count = 1;
            self.free.push(old);
            out.nodes.push(moved);
        }

        out.root = Some(remap[&sub]);
        out.rederive();
        out
    }
}

/// Joins two non-overlapping trees, with an optional middle key.
///
/// With a key the precondition is `lower.highest < key < upper.lowest`;
/// without one, `lower.highest < upper.lowest`. Empty sides waive their
/// half of the check. On violation nothing is mutated and the error
/// carries the stringified key and bounds. Comparator compatibility is
/// the caller's responsibility; the result uses `lower`'s comparator.
pub fn join_trees<T, C, C2>(
    mut lower: AvlTree<T, C>,
    key: Option<T>,
    upper: AvlTree<T, C2>,
) -> Result<AvlTree<T, C>, OverlapError>
where
    T: Display,
    C: Fn(&T, &T) -> i32,
    C2: Fn(&T, &T) -> i32,
{
    let bound_text = |b: Option<&T>| b.map(|v| v.to_string()).unwrap_or_else(|| "∅".to_string());
    let cmp = &lower.comparator;

    match &key {
        Some(k) => {
            let low_ok = lower.highest().map(|hi| cmp(hi, k) < 0).unwrap_or(true);
            let high_ok = upper.lowest().map(|lo| cmp(k, lo) < 0).unwrap_or(true);
            if !low_ok || !high_ok {
                return Err(OverlapError::Keyed {
                    key: k.to_string(),
                    lower_bound: bound_text(lower.highest()),
                    upper_bound: bound_text(upper.lowest()),
                });
            }
        }
        None => {
            if let (Some(hi), Some(lo)) = (lower.highest(), upper.lowest()) {
                if cmp(hi, lo) >= 0 {
                    return Err(OverlapError::Unkeyed {
                        lower_bound: bound_text(lower.highest()),
                        upper_bound: bound_text(upper.lowest()),
                    });
                }
            }
        }
    }

    let rb = lower.absorb(upper);
    let ra = lower.root.take();
    lower.root = match key {
        Some(k) => {
            let kn = lower.push_node(k);
            Some(join_nodes(&mut lower.nodes, ra, kn, rb))
        }
        None => join2_nodes(&mut lower.nodes, ra, rb),
    };
    lower.rederive();
    Ok(lower)
}

// ── Tests ─────────────────────────────────────────────────────────────────
