//! Read-only logic shared by every tree in the crate. Everything in here only needs to see a node's
//! entry and its children, so the balanced and unbalanced trees walk their nodes with the same code.

use crate::entry::Entry;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

/// The minimal view of a binary tree node needed to search and traverse it.
pub trait BinaryNode: Sized {
    type Key;
    type Value;

    fn entry(&self) -> &Entry<Self::Key, Self::Value>;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    fn take_left(&mut self) -> Option<Box<Self>>;

    fn into_entry_and_right(self) -> (Entry<Self::Key, Self::Value>, Option<Box<Self>>);
}

/// Returns the entry of the first node on the descent from `tree` whose key equals `key`. Equal keys
/// are routed right on insertion, so the shallowest match is returned.
pub fn get<'a, N, V>(tree: Option<&'a N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(node.entry().key.borrow()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node.entry()),
        };
    }
    None
}

pub fn min<N>(tree: Option<&N>) -> Option<&Entry<N::Key, N::Value>>
where
    N: BinaryNode,
{
    let mut curr = tree?;
    while let Some(left_node) = curr.left() {
        curr = left_node;
    }
    Some(curr.entry())
}

pub fn max<N>(tree: Option<&N>) -> Option<&Entry<N::Key, N::Value>>
where
    N: BinaryNode,
{
    let mut curr = tree?;
    while let Some(right_node) = curr.right() {
        curr = right_node;
    }
    Some(curr.entry())
}

/// Computes the height of `tree` by walking every node, using an explicit stack. An empty tree has
/// height `-1` and a single node has height `0`.
pub fn height<N>(tree: Option<&N>) -> i32
where
    N: BinaryNode,
{
    let mut ret = -1;
    let mut stack = Vec::new();
    if let Some(node) = tree {
        stack.push((node, 0));
    }
    while let Some((node, depth)) = stack.pop() {
        ret = cmp::max(ret, depth);
        if let Some(left_node) = node.left() {
            stack.push((left_node, depth + 1));
        }
        if let Some(right_node) = node.right() {
            stack.push((right_node, depth + 1));
        }
    }
    ret
}

/// Returns a fresh snapshot of the values of `tree` in ascending key order.
pub fn inorder_values<N>(tree: Option<&N>) -> Vec<&N::Value>
where
    N: BinaryNode,
{
    Iter::new(tree).map(|(_, value)| value).collect()
}

/// Returns the value at 1-indexed position `k` of the in-order sequence of `tree`.
pub fn kth_smallest<N>(tree: Option<&N>, k: usize, len: usize) -> Result<&N::Value>
where
    N: BinaryNode,
{
    if k == 0 || k > len {
        return Err(Error::OutOfRange { k, len });
    }
    Iter::new(tree)
        .nth(k - 1)
        .map(|(_, value)| value)
        .ok_or(Error::OutOfRange { k, len })
}

/// An iterator over a tree.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct Iter<'a, N>
where
    N: 'a,
{
    current: Option<&'a N>,
    stack: Vec<&'a N>,
}

impl<'a, N> Iter<'a, N>
where
    N: BinaryNode,
{
    pub fn new(tree: Option<&'a N>) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: BinaryNode + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            let entry = node.entry();
            (&entry.key, &entry.value)
        })
    }
}

/// An owning iterator over a tree.
///
/// This iterator traverses the elements of the tree in-order and yields owned entries. Nodes are
/// unlinked one at a time, so dropping the iterator never recurses down a long chain of nodes.
pub struct IntoIter<N>
where
    N: BinaryNode,
{
    current: Option<Box<N>>,
    stack: Vec<Box<N>>,
}

impl<N> IntoIter<N>
where
    N: BinaryNode,
{
    pub fn new(tree: Option<Box<N>>) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<N> Iterator for IntoIter<N>
where
    N: BinaryNode,
{
    type Item = (N::Key, N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.take_left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let (entry, right) = (*node).into_entry_and_right();
            self.current = right;
            entry.into_pair()
        })
    }
}

impl<N> Drop for IntoIter<N>
where
    N: BinaryNode,
{
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}
