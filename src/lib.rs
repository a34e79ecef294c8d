//! Ordered maps backed by binary search trees.
//!
//! Two trees share one contract, [`OrderedTree`]: [`AvlMap`] rebalances itself after every
//! insertion and removal so that its height stays logarithmic, while [`BstMap`] applies edits in
//! place and can degenerate into a chain. Both keep every entry inserted under an equal key, and
//! both answer order-statistic queries with [`OrderedTree::kth_smallest`].
//!
//! Rotations and successor splices are reported at the `trace` level through the `log` facade.

mod entry;
mod traversal;
pub mod avl_tree;
pub mod binary_search_tree;
pub mod error;
pub mod ordered_tree;

pub use crate::avl_tree::AvlMap;
pub use crate::binary_search_tree::BstMap;
pub use crate::error::{Error, Result};
pub use crate::ordered_tree::OrderedTree;
