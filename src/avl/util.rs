//! Arena-level AVL primitives.
//!
//! Free functions over `&mut Vec<AvlNode<T>>` plus node indices. Every
//! structural function that can move a subtree root returns the new root
//! of that subtree with its parent link already rewired; callers that own
//! a root field store the return value, recursive callers thread it up
//! the unwind.

use std::collections::VecDeque;

use super::node::AvlNode;

pub(crate) type Arena<T> = Vec<AvlNode<T>>;

#[inline]
pub(crate) fn value<T>(arena: &[AvlNode<T>], i: u32) -> &T {
    arena[i as usize].value.as_ref().expect("live node")
}

#[inline]
pub(crate) fn height<T>(arena: &[AvlNode<T>], n: Option<u32>) -> i32 {
    n.map(|i| arena[i as usize].height).unwrap_or(-1)
}

#[inline]
pub(crate) fn count<T>(arena: &[AvlNode<T>], n: Option<u32>) -> usize {
    n.map(|i| arena[i as usize].count).unwrap_or(0)
}

/// Recomputes the height and count caches of `i` from its children.
pub(crate) fn refresh<T>(arena: &mut [AvlNode<T>], i: u32) {
    let l = arena[i as usize].l;
    let r = arena[i as usize].r;
    arena[i as usize].height = 1 + height(arena, l).max(height(arena, r));
    arena[i as usize].count = 1 + count(arena, l) + count(arena, r);
}

#[inline]
pub(crate) fn balance_factor<T>(arena: &[AvlNode<T>], i: u32) -> i32 {
    height(arena, arena[i as usize].l) - height(arena, arena[i as usize].r)
}

/// Sets `c` as the left child of `p`, fixing the child's parent link.
pub(crate) fn link_left<T>(arena: &mut [AvlNode<T>], p: u32, c: Option<u32>) {
    arena[p as usize].l = c;
    if let Some(c) = c {
        arena[c as usize].p = Some(p);
    }
}

pub(crate) fn link_right<T>(arena: &mut [AvlNode<T>], p: u32, c: Option<u32>) {
    arena[p as usize].r = c;
    if let Some(c) = c {
        arena[c as usize].p = Some(p);
    }
}

/// Left rotation at `n`; the right child rises. Returns the risen node,
/// already attached to `n`'s former parent.
pub(crate) fn rotate_left<T>(arena: &mut [AvlNode<T>], n: u32) -> u32 {
    let r = arena[n as usize].r.expect("right child exists");
    let p = arena[n as usize].p;
    let rl = arena[r as usize].l;

    link_right(arena, n, rl);
    link_left(arena, r, Some(n));
    arena[r as usize].p = p;
    if let Some(p) = p {
        if arena[p as usize].l == Some(n) {
            arena[p as usize].l = Some(r);
        } else {
            arena[p as usize].r = Some(r);
        }
    }

    refresh(arena, n);
    refresh(arena, r);
    r
}

/// Right rotation at `n`; the left child rises.
pub(crate) fn rotate_right<T>(arena: &mut [AvlNode<T>], n: u32) -> u32 {
    let l = arena[n as usize].l.expect("left child exists");
    let p = arena[n as usize].p;
    let lr = arena[l as usize].r;

    link_left(arena, n, lr);
    link_right(arena, l, Some(n));
    arena[l as usize].p = p;
    if let Some(p) = p {
        if arena[p as usize].l == Some(n) {
            arena[p as usize].l = Some(l);
        } else {
            arena[p as usize].r = Some(l);
        }
    }

    refresh(arena, n);
    refresh(arena, l);
    l
}

/// Restores the AVL invariant at `n`, assuming both subtrees already hold
/// it and `n`'s caches are fresh. Returns the subtree root after at most
/// one single or double rotation.
pub(crate) fn rebalance<T>(arena: &mut [AvlNode<T>], n: u32) -> u32 {
    let bf = balance_factor(arena, n);
    if bf > 1 {
        let l = arena[n as usize].l.expect("left child exists");
        if balance_factor(arena, l) < 0 {
            rotate_left(arena, l);
        }
        rotate_right(arena, n)
    } else if bf < -1 {
        let r = arena[n as usize].r.expect("right child exists");
        if balance_factor(arena, r) > 0 {
            rotate_right(arena, r);
        }
        rotate_left(arena, n)
    } else {
        n
    }
}

/// Walks from `n` to the root, refreshing caches and rebalancing each
/// ancestor. Returns the tree's root.
pub(crate) fn retrace<T>(arena: &mut [AvlNode<T>], mut n: u32) -> u32 {
    loop {
        refresh(arena, n);
        let top = rebalance(arena, n);
        match arena[top as usize].p {
            Some(p) => n = p,
            None => return top,
        }
    }
}

pub(crate) fn first<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr as usize].l {
        curr = l;
    }
    Some(curr)
}

pub(crate) fn last<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr as usize].r {
        curr = r;
    }
    Some(curr)
}

/// In-order successor of `i`, via parent links.
pub(crate) fn next<T>(arena: &[AvlNode<T>], i: u32) -> Option<u32> {
    if let Some(r) = arena[i as usize].r {
        return first(arena, Some(r));
    }
    let mut curr = i;
    let mut p = arena[curr as usize].p;
    while let Some(parent) = p {
        if arena[parent as usize].l == Some(curr) {
            return Some(parent);
        }
        curr = parent;
        p = arena[parent as usize].p;
    }
    None
}

/// Standard BST descent for a node comparing equal to `key`.
pub(crate) fn find<T, C>(
    arena: &[AvlNode<T>],
    root: Option<u32>,
    key: &T,
    cmp: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let ord = cmp(key, value(arena, i));
        if ord == 0 {
            return Some(i);
        }
        curr = if ord < 0 {
            arena[i as usize].l
        } else {
            arena[i as usize].r
        };
    }
    None
}

/// Descent guided by a BST-directing unary comparator: `u(value) > 0`
/// goes left, `< 0` goes right, `0` matches.
pub(crate) fn find_by<T, U>(arena: &[AvlNode<T>], root: Option<u32>, u: &U) -> Option<u32>
where
    U: Fn(&T) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let ord = u(value(arena, i));
        if ord == 0 {
            return Some(i);
        }
        curr = if ord > 0 {
            arena[i as usize].l
        } else {
            arena[i as usize].r
        };
    }
    None
}

/// Recursive insert of node `n` under `curr`. Returns the subtree root
/// after rebalancing and whether the insert happened; a comparator hit
/// aborts without touching the tree.
pub(crate) fn insert_at<T, C>(arena: &mut Arena<T>, curr: u32, n: u32, cmp: &C) -> (u32, bool)
where
    C: Fn(&T, &T) -> i32,
{
    let ord = cmp(value(arena, n), value(arena, curr));
    if ord == 0 {
        return (curr, false);
    }

    if ord < 0 {
        match arena[curr as usize].l {
            Some(l) => {
                let (_, inserted) = insert_at(arena, l, n, cmp);
                if !inserted {
                    return (curr, false);
                }
            }
            None => link_left(arena, curr, Some(n)),
        }
    } else {
        match arena[curr as usize].r {
            Some(r) => {
                let (_, inserted) = insert_at(arena, r, n, cmp);
                if !inserted {
                    return (curr, false);
                }
            }
            None => link_right(arena, curr, Some(n)),
        }
    }

    refresh(arena, curr);
    (rebalance(arena, curr), true)
}

/// Unlinks node `n` from its tree. The replacement is the rightmost node
/// of the left subtree when one exists, else the leftmost node of the
/// right subtree, else none. Returns the new tree root; `n` is left fully
/// detached with its value still in place.
pub(crate) fn remove_node<T>(arena: &mut Arena<T>, n: u32) -> Option<u32> {
    let p = arena[n as usize].p;
    let l = arena[n as usize].l;
    let r = arena[n as usize].r;
    arena[n as usize].p = None;
    arena[n as usize].l = None;
    arena[n as usize].r = None;

    let start;
    let replacement;
    match (l, r) {
        (Some(l), _) => {
            let rep = last(arena, Some(l)).expect("non-empty subtree");
            if rep == l {
                // Direct child: keeps its own left subtree, adopts n's right.
                link_right(arena, rep, r);
                start = rep;
            } else {
                let rp = arena[rep as usize].p.expect("replacement has parent");
                let rep_l = arena[rep as usize].l;
                link_right(arena, rp, rep_l);
                link_left(arena, rep, Some(l));
                link_right(arena, rep, r);
                start = rp;
            }
            replacement = Some(rep);
        }
        (None, Some(r)) => {
            let rep = first(arena, Some(r)).expect("non-empty subtree");
            if rep == r {
                start = rep;
            } else {
                let rp = arena[rep as usize].p.expect("replacement has parent");
                let rep_r = arena[rep as usize].r;
                link_left(arena, rp, rep_r);
                link_right(arena, rep, Some(r));
                start = rp;
            }
            replacement = Some(rep);
        }
        (None, None) => {
            let Some(p) = p else {
                return None;
            };
            if arena[p as usize].l == Some(n) {
                arena[p as usize].l = None;
            } else {
                arena[p as usize].r = None;
            }
            start = p;
            replacement = None;
        }
    }

    if let Some(rep) = replacement {
        arena[rep as usize].p = p;
        if let Some(p) = p {
            if arena[p as usize].l == Some(n) {
                arena[p as usize].l = Some(rep);
            } else {
                arena[p as usize].r = Some(rep);
            }
        }
    }

    Some(retrace(arena, start))
}

pub(crate) fn in_order_indices<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::with_capacity(count(arena, root));
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(i);
        curr = next(arena, i);
    }
    out
}

pub(crate) fn pre_order_indices<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Vec<u32> {
    fn walk<T>(arena: &[AvlNode<T>], n: Option<u32>, out: &mut Vec<u32>) {
        let Some(n) = n else {
            return;
        };
        out.push(n);
        walk(arena, arena[n as usize].l, out);
        walk(arena, arena[n as usize].r, out);
    }
    let mut out = Vec::with_capacity(count(arena, root));
    walk(arena, root, &mut out);
    out
}

pub(crate) fn post_order_indices<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Vec<u32> {
    fn walk<T>(arena: &[AvlNode<T>], n: Option<u32>, out: &mut Vec<u32>) {
        let Some(n) = n else {
            return;
        };
        walk(arena, arena[n as usize].l, out);
        walk(arena, arena[n as usize].r, out);
        out.push(n);
    }
    let mut out = Vec::with_capacity(count(arena, root));
    walk(arena, root, &mut out);
    out
}

pub(crate) fn breadth_first_indices<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::with_capacity(count(arena, root));
    let mut queue = VecDeque::new();
    if let Some(root) = root {
        queue.push_back(root);
    }
    while let Some(i) = queue.pop_front() {
        out.push(i);
        if let Some(l) = arena[i as usize].l {
            queue.push_back(l);
        }
        if let Some(r) = arena[i as usize].r {
            queue.push_back(r);
        }
    }
    out
}

/// Structural validator: parent links, cache fields, AVL balance and
/// in-order ordering.
pub(crate) fn assert_avl_tree<T, C>(
    arena: &[AvlNode<T>],
    root: Option<u32>,
    cmp: &C,
) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p.is_some() {
        return Err("Root has parent".to_string());
    }

    fn validate<T>(arena: &[AvlNode<T>], n: u32) -> Result<(i32, usize), String> {
        let l = arena[n as usize].l;
        let r = arena[n as usize].r;

        let (lh, lc) = match l {
            Some(l) => {
                if arena[l as usize].p != Some(n) {
                    return Err("Broken parent link on left child".to_string());
                }
                validate(arena, l)?
            }
            None => (-1, 0),
        };
        let (rh, rc) = match r {
            Some(r) => {
                if arena[r as usize].p != Some(n) {
                    return Err("Broken parent link on right child".to_string());
                }
                validate(arena, r)?
            }
            None => (-1, 0),
        };

        let h = 1 + lh.max(rh);
        let c = 1 + lc + rc;
        if arena[n as usize].height != h {
            return Err(format!(
                "Height mismatch: expected {h}, got {}",
                arena[n as usize].height
            ));
        }
        if arena[n as usize].count != c {
            return Err(format!(
                "Count mismatch: expected {c}, got {}",
                arena[n as usize].count
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err("AVL balance violated".to_string());
        }
        Ok((h, c))
    }

    validate(arena, root)?;

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if cmp(value(arena, prev), value(arena, i)) >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
