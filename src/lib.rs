//! Ordered-set forest: a comparator-parameterized AVL tree with bulk
//! set algebra, and a radix tree built on top of it.
//!
//! The AVL core is a mutable ordered set with cached boundary values
//! and four traversal orders. On top of its node graph sit the
//! split/join primitives and the set operations expressed through them
//! (`union`, `intersection`, `difference`, [`join_trees`]). The radix
//! tree stores words as label paths and reuses the AVL tree as the
//! ordered store for every node's children.
//!
//! All trees are arena-based: nodes live in a `Vec` owned by their tree
//! and every link is an `Option<u32>` index, so parent back-references
//! never form ownership cycles.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`avl`] | [`AvlTree`], node-level split/join, set operations, [`OverlapError`] |
//! | [`radix`] | [`RadixTree`], prefix search, terminator sentinels |
//! | [`print`] | [`Printable`] capability and box-drawing renderer |
//! | [`types`] | comparator contract, [`Traversal`] orders |
//!
//! # Consumed inputs
//!
//! The bulk operations take their operands by value and may reparent
//! nodes of both; the moved-from trees are gone at compile time, which
//! is the point.
//!
//! ```
//! use avl_forest::{AvlTree, Traversal};
//!
//! let mut a = AvlTree::new();
//! let mut b = AvlTree::new();
//! for v in [1, 2, 3, 4] {
//!     a.insert(v);
//! }
//! for v in [3, 4, 5, 6] {
//!     b.insert(v);
//! }
//! let union = a.union(b);
//! let values: Vec<i32> = union.ordered(Traversal::InOrder).into_iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
//! ```

pub mod avl;
pub mod print;
pub mod radix;
pub mod types;

pub use avl::{join_trees, AvlTree, OverlapError, Split};
pub use print::{render, PrintNode, Printable};
pub use radix::{Existence, RadixTree, SearchOutcome};
pub use types::Traversal;
