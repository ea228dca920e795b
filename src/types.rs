//! Shared definitions: comparator contract and traversal orders.
//!
//! Every tree in this crate is parameterized by a three-way comparator
//! returning `-1` / `0` / `+1` as an `i32`. Comparators are fixed at
//! construction; `0` means logically equal and such values are rejected
//! on insert.

/// Three-way comparator over `T`.
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Comparator derived from `PartialOrd`, used by the `new()` constructors.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Traversal order for [`crate::AvlTree::ordered`].
///
/// `InOrder` yields ascending order under the tree's comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    InOrder,
    PreOrder,
    PostOrder,
    BreadthFirst,
}
