use crate::avl_tree::node::Node;
use crate::entry::Entry;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    trace!("rotated left, new subtree height {}", child.height);
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    trace!("rotated right, new subtree height {}", child.height);
    child
}

// A child leaning towards its parent's heavy side, or balanced, is fixed by a single rotation of
// the parent. A child leaning the other way is rotated first.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() < -1 {
        if let Some(child) = node.left.take() {
            if child.balance() > 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() > 1 {
        if let Some(child) = node.right.take() {
            if child.balance() < 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let min_node = remove_min(&mut node.left);
            balance(tree);
            return min_node;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>)
where
    T: Ord,
{
    match tree {
        Some(node) => {
            if new_node.entry.key < node.entry.key {
                insert(&mut node.left, new_node);
            } else {
                insert(&mut node.right, new_node);
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return;
        },
    }

    balance(tree);
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *tree = right;
                    Some(node.entry)
                },
                (left, None) => {
                    *tree = left;
                    Some(node.entry)
                },
                (left, mut right) => {
                    let successor = remove_min(&mut right);
                    trace!("replacing a node with two children by its in-order successor");
                    let entry = mem::replace(&mut node.entry, successor.entry);
                    node.left = left;
                    node.right = right;
                    *tree = Some(node);
                    Some(entry)
                },
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{height, insert, remove, Tree};
    use crate::avl_tree::node::Node;
    use proptest::prelude::*;
    use std::cmp;

    // Returns the recomputed height of `tree` after asserting the cached heights and balance
    // factors of every node in it.
    fn check<T, U>(tree: &Tree<T, U>) -> i32 {
        match tree {
            None => -1,
            Some(node) => {
                let left_height = check(&node.left);
                let right_height = check(&node.right);
                assert_eq!(node.height, cmp::max(left_height, right_height) + 1);
                assert!((right_height - left_height).abs() <= 1);
                node.height
            },
        }
    }

    fn keys<T: Copy, U>(tree: &Tree<T, U>, ret: &mut Vec<T>) {
        if let Some(node) = tree {
            keys(&node.left, ret);
            ret.push(node.entry.key);
            keys(&node.right, ret);
        }
    }

    #[test]
    fn test_height_of_leaf() {
        let mut tree = None;
        assert_eq!(height(&tree), -1);
        insert(&mut tree, Node::new(1, 1));
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn test_left_left_rotation() {
        let mut tree = None;
        for key in &[3, 2, 1] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(check(&tree), 1);
    }

    #[test]
    fn test_right_right_rotation() {
        let mut tree = None;
        for key in &[1, 2, 3] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(check(&tree), 1);
    }

    #[test]
    fn test_left_right_rotation() {
        let mut tree = None;
        for key in &[3, 1, 2] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(check(&tree), 1);
    }

    #[test]
    fn test_right_left_rotation() {
        let mut tree = None;
        for key in &[1, 3, 2] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(check(&tree), 1);
    }

    #[test]
    fn test_remove_with_balanced_heavy_child() {
        // Removing 6 leaves the root left-heavy with a balanced left child.
        let mut tree = None;
        for key in &[4, 2, 6, 1, 3] {
            insert(&mut tree, Node::new(*key, ()));
        }
        assert!(remove(&mut tree, &6).is_some());
        check(&tree);
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(2));

        let mut ret = Vec::new();
        keys(&tree, &mut ret);
        assert_eq!(ret, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_two_children_keeps_successor() {
        let mut tree = None;
        for key in &[4, 2, 7, 9, 1, 0, 8, 3] {
            insert(&mut tree, Node::new(*key, key.to_string()));
        }
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(4));
        let entry = remove(&mut tree, &4).map(|entry| entry.into_pair());
        assert_eq!(entry, Some((4, String::from("4"))));
        check(&tree);

        let mut ret = Vec::new();
        keys(&tree, &mut ret);
        assert_eq!(ret, vec![0, 1, 2, 3, 7, 8, 9]);
        assert_eq!(
            crate::traversal::get(tree.as_deref(), &7).map(|entry| entry.value.as_str()),
            Some("7"),
        );
    }

    #[test]
    fn test_ascending_inserts_stay_logarithmic() {
        let mut tree = None;
        for key in 0..1024 {
            insert(&mut tree, Node::new(key, ()));
        }
        assert_eq!(check(&tree), 10);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Insert),
            any::<u8>().prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_heights_and_balance_hold(ops in prop::collection::vec(op(), 0..400)) {
            let mut tree = None;
            let mut len = 0usize;
            for op in ops {
                match op {
                    Op::Insert(key) => {
                        insert(&mut tree, Node::new(key, ()));
                        len += 1;
                    },
                    Op::Remove(key) => {
                        if remove(&mut tree, &key).is_some() {
                            len -= 1;
                        }
                    },
                }
                check(&tree);
            }

            let mut ret = Vec::new();
            keys(&tree, &mut ret);
            prop_assert_eq!(ret.len(), len);
            prop_assert!(ret.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}
