use crate::binary_search_tree::node::Node;
use crate::binary_search_tree::tree;
use crate::error::Result;
use crate::ordered_tree::OrderedTree;
use crate::traversal::{self, IntoIter, Iter};
use std::borrow::Borrow;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using an unbalanced binary search tree.
///
/// Every node has keys strictly less than its own in its left subtree and keys greater than or
/// equal to its own in its right subtree. Nothing is done to keep the tree short, so operations
/// take `O(log n)` time on random input and `O(n)` time when keys arrive in sorted order.
///
/// # Examples
///
/// ```
/// use bst_collections::BstMap;
///
/// let mut map = BstMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.max(), Some(&3));
/// assert_eq!(map.kth_smallest(1), Ok(&1));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct BstMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> BstMap<T, U> {
    /// Constructs a new, empty `BstMap<T, U>`.
    pub fn new() -> Self {
        BstMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the new pair
    /// is stored alongside the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.inorder_traversal(), vec![&"a", &"b"]);
    /// ```
    pub fn insert(&mut self, key: T, value: U)
    where
        T: Ord,
    {
        tree::insert(&mut self.tree, Node::new(key, value));
        self.len += 1;
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let BstMap {
            ref mut tree,
            ref mut len,
        } = *self;
        tree::remove(tree, key).map(|entry| {
            *len -= 1;
            entry.into_pair()
        })
    }

    /// Checks if a key exists in the map.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        traversal::get(self.tree.as_deref(), key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns the height of the tree backing the map. An empty map has height `-1` and a map with
    /// a single element has height `0`. The height is recomputed on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 6);
    /// ```
    pub fn height(&self) -> i32 {
        traversal::height(self.tree.as_deref())
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&T> {
        traversal::min(self.tree.as_deref()).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&T> {
        traversal::max(self.tree.as_deref()).map(|entry| &entry.key)
    }

    /// Returns the values of the map in ascending key order.
    pub fn inorder_traversal(&self) -> Vec<&U> {
        traversal::inorder_values(self.tree.as_deref())
    }

    /// Returns the value with the `k`-th smallest key, counting from `1`. Returns
    /// `Error::OutOfRange` if `k` is `0` or greater than the length of the map.
    pub fn kth_smallest(&self, k: usize) -> Result<&U> {
        traversal::kth_smallest(self.tree.as_deref(), k, self.len)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<Node<T, U>> {
        Iter::new(self.tree.as_deref())
    }
}

impl<T, U> OrderedTree<T, U> for BstMap<T, U>
where
    T: Ord,
{
    fn insert(&mut self, key: T, value: U) {
        BstMap::insert(self, key, value);
    }

    fn search(&self, key: &T) -> Option<&U> {
        self.get(key)
    }

    fn delete(&mut self, key: &T) -> Option<(T, U)> {
        self.remove(key)
    }

    fn inorder_traversal(&self) -> Vec<&U> {
        BstMap::inorder_traversal(self)
    }

    fn kth_smallest(&self, k: usize) -> Result<&U> {
        BstMap::kth_smallest(self, k)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T, U> Drop for BstMap<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, U> IntoIterator for BstMap<T, U> {
    type IntoIter = IntoIter<Node<T, U>>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.tree.take())
    }
}

impl<'a, T, U> IntoIterator for &'a BstMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = Iter<'a, Node<T, U>>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, U> Default for BstMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
