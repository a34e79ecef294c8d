//! Every routine here walks the tree with a cursor instead of recursing, since the depth of an
//! unbalanced tree can be linear in its length.

use crate::binary_search_tree::node::Node;
use crate::entry::Entry;
use crate::traversal::IntoIter;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = match curr {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    match curr.take() {
        Some(mut node) => {
            *curr = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>)
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        if new_node.entry.key < node.entry.key {
            curr = &mut node.left;
        } else {
            curr = &mut node.right;
        }
    }
    *curr = Some(Box::new(new_node));
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    loop {
        let ordering = match curr {
            Some(node) => key.cmp(node.entry.key.borrow()),
            None => return None,
        };
        curr = match (ordering, curr) {
            (Ordering::Equal, curr) => {
                let mut node = curr.take()?;
                return match (node.left.take(), node.right.take()) {
                    (None, right) => {
                        *curr = right;
                        Some(node.entry)
                    },
                    (left, None) => {
                        *curr = left;
                        Some(node.entry)
                    },
                    (left, mut right) => {
                        let successor = remove_min(&mut right);
                        trace!("replacing a node with two children by its in-order successor");
                        let entry = mem::replace(&mut node.entry, successor.entry);
                        node.left = left;
                        node.right = right;
                        *curr = Some(node);
                        Some(entry)
                    },
                };
            },
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, None) => return None,
        };
    }
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &mut node.left,
            Ordering::Greater => curr = &mut node.right,
            Ordering::Equal => return Some(&mut node.entry),
        }
    }
    None
}

/// Unlinks and drops every node of `tree` one at a time.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    for _ in IntoIter::new(tree.take()) {}
}

#[cfg(test)]
mod tests {
    use super::{clear, insert, remove, Tree};
    use crate::binary_search_tree::node::Node;
    use crate::traversal;

    fn keys<T: Copy, U>(tree: &Tree<T, U>) -> Vec<T> {
        traversal::Iter::new(tree.as_deref()).map(|(key, _)| *key).collect()
    }

    #[test]
    fn test_insert_routes_equal_keys_right() {
        let mut tree = None;
        insert(&mut tree, Node::new(1, 'a'));
        insert(&mut tree, Node::new(1, 'b'));
        let root = tree.as_ref().map(|node| (node.left.is_none(), node.right.is_some()));
        assert_eq!(root, Some((true, true)));
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = None;
        for key in &[4, 2, 7, 9, 1, 0, 8, 3] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert!(remove(&mut tree, &8).is_some());
        assert_eq!(keys(&tree), vec![0, 1, 2, 3, 4, 7, 9]);
        assert!(remove(&mut tree, &1).is_some());
        assert_eq!(keys(&tree), vec![0, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn test_remove_two_children_root() {
        let mut tree = None;
        for key in &[4, 2, 7, 9, 1, 0, 8, 3] {
            insert(&mut tree, Node::new(*key, *key * 10));
        }
        let entry = remove(&mut tree, &4).map(|entry| entry.into_pair());
        assert_eq!(entry, Some((4, 40)));
        assert_eq!(tree.as_ref().map(|node| (node.entry.key, node.entry.value)), Some((7, 70)));
        assert_eq!(keys(&tree), vec![0, 1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree: Tree<u32, ()> = None;
        assert!(remove(&mut tree, &10).is_none());
        insert(&mut tree, Node::new(5, ()));
        assert!(remove(&mut tree, &20).is_none());
        assert_eq!(keys(&tree), vec![5]);
    }

    #[test]
    fn test_clear_long_chain() {
        let mut tree = None;
        for key in 0..10_000 {
            insert(&mut tree, Node::new(key, ()));
        }
        assert_eq!(traversal::height(tree.as_deref()), 9_999);
        clear(&mut tree);
        assert!(tree.is_none());
    }
}
