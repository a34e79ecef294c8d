use crate::binary_search_tree::tree;
use crate::entry::Entry;
use crate::traversal::BinaryNode;

pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
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
