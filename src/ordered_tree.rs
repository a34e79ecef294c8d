use crate::error::Result;

/// The operations shared by every ordered tree in this crate.
///
/// Keys that compare equal are not merged: inserting an existing key adds another entry to the
/// right of the one it collides with. Searching and deleting act on the first matching entry met
/// while descending from the root, which is not necessarily the first one inserted.
///
/// # Examples
///
/// ```
/// use bst_collections::{AvlMap, BstMap, OrderedTree};
///
/// fn fill<M: OrderedTree<u32, &'static str>>(tree: &mut M) {
///     tree.insert(4, "4");
///     tree.insert(7, "7");
///     tree.insert(2, "2");
/// }
///
/// let mut avl = AvlMap::new();
/// let mut bst = BstMap::new();
/// fill(&mut avl);
/// fill(&mut bst);
///
/// assert_eq!(avl.inorder_traversal(), bst.inorder_traversal());
/// assert_eq!(OrderedTree::kth_smallest(&avl, 2), Ok(&"4"));
/// ```
pub trait OrderedTree<T, U>
where
    T: Ord,
{
    /// Inserts a key-value pair into the tree. Entries with equal keys are all retained.
    fn insert(&mut self, key: T, value: U);

    /// Returns the value of the first entry on the descent from the root whose key equals `key`,
    /// or `None` if the descent reaches an empty subtree.
    fn search(&self, key: &T) -> Option<&U>;

    /// Removes the first entry on the descent from the root whose key equals `key` and returns
    /// it. Deleting an absent key is a no-op that returns `None`.
    fn delete(&mut self, key: &T) -> Option<(T, U)>;

    /// Returns the values of the tree in ascending key order.
    fn inorder_traversal(&self) -> Vec<&U>;

    /// Returns the value at 1-indexed position `k` of `inorder_traversal`, or
    /// `Error::OutOfRange` if `k` is not in `[1, len]`.
    fn kth_smallest(&self, k: usize) -> Result<&U>;

    /// Returns the number of entries in the tree.
    fn len(&self) -> usize;

    /// Returns `true` if the tree has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
