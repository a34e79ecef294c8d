//! Binary search tree that applies every edit in place without rebalancing. An ascending sequence
//! of insertions degenerates the tree into a chain.

mod map;
mod node;
mod tree;

pub use self::map::BstMap;
