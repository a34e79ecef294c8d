use crate::avl_tree::tree;
use crate::entry::Entry;
use crate::traversal::BinaryNode;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub height: i32,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = *self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    /// Height of the right subtree minus height of the left subtree.
    pub fn balance(&self) -> i32 {
        tree::height(&self.right) - tree::height(&self.left)
    }
}

impl<T, U> BinaryNode for Node<T, U> {
    type Key = T;
    type Value = U;

    fn entry(&self) -> &Entry<T, U> {
        &self.entry
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    fn into_entry_and_right(self) -> (Entry<T, U>, Option<Box<Self>>) {
        (self.entry, self.right)
    }
}
