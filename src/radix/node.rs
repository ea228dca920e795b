use crate::avl::AvlTree;

/// Rank of a label's leading code unit; the empty label (the terminator
/// sentinel) ranks below every real character, so it sorts first among
/// siblings.
pub(crate) fn char_rank(c: Option<char>) -> i32 {
    c.map(|c| c as i32).unwrap_or(-1)
}

/// Entry of a node's children store: the child's leading code unit plus
/// its arena index. Siblings never share a leading unit, so ordering by
/// head equals ordering by full label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildRef {
    pub head: Option<char>,
    pub node: u32,
}

pub(crate) type ChildComparator = fn(&ChildRef, &ChildRef) -> i32;

fn child_order(a: &ChildRef, b: &ChildRef) -> i32 {
    let ra = char_rank(a.head);
    let rb = char_rank(b.head);
    if ra == rb {
        0
    } else if ra < rb {
        -1
    } else {
        1
    }
}

pub(crate) fn child_store() -> AvlTree<ChildRef, ChildComparator> {
    AvlTree::with_comparator(child_order as ChildComparator)
}

/// Arena node of a [`crate::RadixTree`].
///
/// The label is the substring this node contributes to every word below
/// it; concatenating labels from a bucket root down to a leaf spells a
/// stored word. Children live in a nested AVL tree ordered by label.
pub struct RadixNode {
    pub label: String,
    pub parent: Option<u32>,
    pub children: AvlTree<ChildRef, ChildComparator>,
}

impl RadixNode {
    pub(crate) fn new(label: String, parent: Option<u32>) -> Self {
        Self {
            label,
            parent,
            children: child_store(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
