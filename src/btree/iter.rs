use std::iter::FusedIterator;

use crate::btree::{internal::InternalNode, leaf::LeafNode, node::Node};

/// In-order walk over leaf entries.
///
/// Keeps an explicit stack of `(internal node, next child)` cursors, so the
/// walk never recurses. Separators are routing copies and are skipped.
pub struct Iter<'a, K, V> {
    stack: Vec<(&'a InternalNode<K, V>, usize)>,
    leaf: Option<(&'a LeafNode<K, V>, usize)>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            leaf: None,
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut node: &'a Node<K, V>) {
        loop {
            match node {
                Node::Internal(internal) => {
                    let Some(first) = internal.children.first() else {
                        return;
                    };
                    self.stack.push((internal, 1));
                    node = first;
                }
                Node::Leaf(leaf) => {
                    self.leaf = Some((leaf, 0));
                    return;
                }
            }
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((leaf, pos)) = self.leaf.as_mut() {
                let leaf: &'a LeafNode<K, V> = *leaf;
                if let Some(entry) = leaf.entry(*pos) {
                    *pos += 1;
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(entry);
                }
                self.leaf = None;
            }

            let (node, next) = self.stack.last_mut()?;
            let node: &'a InternalNode<K, V> = *node;
            if *next >= node.children.len() {
                self.stack.pop();
                continue;
            }

            let child = &node.children[*next];
            *next += 1;
            self.descend(child);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
