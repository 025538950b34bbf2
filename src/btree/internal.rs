use crate::{btree::node::Node, config::Order};

/// Routing node. `keys[i]` is a copy of the smallest key stored under
/// `children[i + 1]`; equal keys route right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode<K, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<Node<K, V>>, // children.len() = keys.len() + 1
}

impl<K, V> InternalNode<K, V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Separator-less node owning a single child, the transient shape of a
    /// freshly grown root before its first split.
    pub fn with_child(child: Node<K, V>) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn children(&self) -> &[Node<K, V>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Ord, V> InternalNode<K, V> {
    /// First `i` with `key < keys[i]`, or `keys.len()`. A key equal to a
    /// separator goes to the child right of it.
    pub fn find_child_index(&self, key: &K) -> usize {
        self.keys.partition_point(|sep| sep <= key)
    }
}

impl<K: Ord + Clone, V> InternalNode<K, V> {
    /// Splits `children[child_idx]` around the median at `t - 1`.
    ///
    /// The separator lands in `keys[child_idx]` and the new right sibling in
    /// `children[child_idx + 1]`. A leaf keeps the median as its right half's
    /// first entry and the separator is a copy of it; an internal child gives
    /// its median up.
    ///
    /// # Panics
    /// If `child_idx` is out of bounds or the child holds fewer than
    /// `2t - 1` keys.
    pub fn split_child(&mut self, child_idx: usize, order: Order) {
        let child = &mut self.children[child_idx];
        assert!(
            child.len() >= order.max_keys(),
            "split of a child holding {} keys, {} needed",
            child.len(),
            order.max_keys()
        );

        let at = order.split_at();
        let (separator, right) = match child {
            Node::Leaf(leaf) => {
                let right = leaf.split_off(at);
                (right.keys[0].clone(), Node::Leaf(right))
            }

            Node::Internal(internal) => {
                let right_keys = internal.keys.split_off(at + 1);
                let right_children = internal.children.split_off(at + 1);
                let Some(median) = internal.keys.pop() else {
                    unreachable!("internal child has at least 2t - 1 keys");
                };
                (
                    median,
                    Node::Internal(InternalNode {
                        keys: right_keys,
                        children: right_children,
                    }),
                )
            }
        };

        crate::bpt_debug!(
            "split",
            "child {} split into {} + {} keys",
            child_idx,
            self.children[child_idx].len(),
            right.len()
        );

        self.keys.insert(child_idx, separator);
        self.children.insert(child_idx + 1, right);
    }

    /// Merges the child at `child_idx` with its left neighbour, or with its
    /// right neighbour when it is the first child. Returns the index of the
    /// merged node.
    ///
    /// The separator between the two is dropped for leaves and pulled down
    /// between the two key runs for internal nodes.
    ///
    /// # Panics
    /// If the node has fewer than two children or the two siblings are not
    /// of the same kind.
    pub fn merge_children(&mut self, child_idx: usize) -> usize {
        assert!(
            self.children.len() >= 2,
            "merge needs two siblings, node has {}",
            self.children.len()
        );

        let left_idx = child_idx.saturating_sub(1);
        let separator = self.keys.remove(left_idx);
        let right = self.children.remove(left_idx + 1);

        match (&mut self.children[left_idx], right) {
            (Node::Leaf(left), Node::Leaf(right)) => {
                left.absorb(right);
            }

            (Node::Internal(left), Node::Internal(right)) => {
                left.keys.push(separator);
                left.keys.extend(right.keys);
                left.children.extend(right.children);
            }

            _ => unreachable!("siblings live at the same depth"),
        }

        crate::bpt_debug!(
            "merge",
            "children {} and {} merged into {} keys",
            left_idx,
            left_idx + 1,
            self.children[left_idx].len()
        );

        left_idx
    }

    /// Restores occupancy of an underflowing `children[child_idx]`: borrow
    /// from the left sibling, else from the right one, else merge. Returns
    /// the index the repaired node ends up at.
    pub(crate) fn rebalance_child(&mut self, child_idx: usize, order: Order) -> usize {
        let min_keys = order.min_keys();

        if child_idx > 0 && self.children[child_idx - 1].len() > min_keys {
            self.borrow_from_left(child_idx);
            return child_idx;
        }

        if child_idx + 1 < self.children.len() && self.children[child_idx + 1].len() > min_keys {
            self.borrow_from_right(child_idx);
            return child_idx;
        }

        self.merge_children(child_idx)
    }

    fn borrow_from_left(&mut self, child_idx: usize) {
        let sep_idx = child_idx - 1;
        let (before, after) = self.children.split_at_mut(child_idx);

        match (&mut before[sep_idx], &mut after[0]) {
            (Node::Leaf(left), Node::Leaf(child)) => {
                let Some((key, value)) = left.pop_last() else {
                    unreachable!("lending sibling has spare keys");
                };
                child.push_front(key, value);

                // Separator must be the min key of the right child
                self.keys[sep_idx] = child.keys[0].clone();
            }

            (Node::Internal(left), Node::Internal(child)) => {
                let (Some(new_sep), Some(moved)) = (left.keys.pop(), left.children.pop()) else {
                    unreachable!("lending sibling has spare keys");
                };
                let old_sep = std::mem::replace(&mut self.keys[sep_idx], new_sep);
                child.keys.insert(0, old_sep);
                child.children.insert(0, moved);
            }

            _ => unreachable!("siblings live at the same depth"),
        }

        crate::bpt_debug!("borrow", "child {} borrowed from its left sibling", child_idx);
    }

    fn borrow_from_right(&mut self, child_idx: usize) {
        let sep_idx = child_idx;
        let (before, after) = self.children.split_at_mut(child_idx + 1);

        match (&mut before[child_idx], &mut after[0]) {
            (Node::Leaf(child), Node::Leaf(right)) => {
                let Some((key, value)) = right.pop_first() else {
                    unreachable!("lending sibling has spare keys");
                };
                child.push_back(key, value);

                self.keys[sep_idx] = right.keys[0].clone();
            }

            (Node::Internal(child), Node::Internal(right)) => {
                let new_sep = right.keys.remove(0);
                let moved = right.children.remove(0);
                let old_sep = std::mem::replace(&mut self.keys[sep_idx], new_sep);
                child.keys.push(old_sep);
                child.children.push(moved);
            }

            _ => unreachable!("siblings live at the same depth"),
        }

        crate::bpt_debug!("borrow", "child {} borrowed from its right sibling", child_idx);
    }

    /// Re-copies the smallest key under `children[child_idx]` into the
    /// separator left of it.
    pub(crate) fn refresh_separator(&mut self, child_idx: usize) {
        if child_idx == 0 || child_idx >= self.children.len() {
            return;
        }

        if let Some(min) = self.children[child_idx].min_key() {
            if self.keys[child_idx - 1] != *min {
                self.keys[child_idx - 1] = min.clone();
            }
        }
    }
}

impl<K, V> Default for InternalNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
