use std::fmt;

use crate::{
    btree::{
        internal::InternalNode,
        iter::{Iter, Keys, Values},
        node::{Node, OrderedIndex},
    },
    config::{Order, TreeConfig},
    error::{TreeError, TreeResult},
};

/// In-memory B+ tree. Duplicate keys are kept side by side.
#[derive(Debug, Clone)]
pub struct BPlusTree<K, V> {
    order: Order,
    root: Node<K, V>,
    len: usize,
    check_invariants: bool,
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Empty tree with an empty leaf root.
    pub fn new(t: usize) -> TreeResult<Self> {
        Ok(Self::with_config(TreeConfig::new(t)?))
    }

    pub fn with_config(config: TreeConfig) -> Self {
        crate::bpt_info!("tree", "new tree with order {}", config.order);

        Self {
            order: config.order,
            root: Node::new_leaf(),
            len: 0,
            check_invariants: config.check_invariants,
        }
    }

    /// Adopts a hand-built node tree after checking every invariant.
    pub fn from_root(order: Order, root: Node<K, V>) -> TreeResult<Self> {
        let tree = Self {
            order,
            len: 0,
            root,
            check_invariants: false,
        };

        if let Err(reason) = tree.validate() {
            crate::bpt_warn!("tree", "rejected hand-built root: {}", reason);
            return Err(TreeError::InvalidRoot { reason });
        }

        let len = tree.iter().count();
        Ok(Self { len, ..tree })
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn root(&self) -> &Node<K, V> {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, 1 for a lone leaf root.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(first) = node.children().first() {
            node = first;
            height += 1;
        }
        height
    }

    pub fn clear(&mut self) {
        self.root = Node::new_leaf();
        self.len = 0;
    }

    pub fn insert(&mut self, key: K, value: V) {
        if Self::insert_recursive(&mut self.root, key, value, self.order) {
            self.grow_root();
        }
        self.len += 1;

        if self.check_invariants {
            self.assert_invariants();
        }
    }

    /// Returns `true` when `node` overflowed and must be split by its parent.
    fn insert_recursive(node: &mut Node<K, V>, key: K, value: V, order: Order) -> bool {
        match node {
            Node::Leaf(leaf) => {
                leaf.insert(key, value);
            }

            Node::Internal(internal) => {
                let idx = internal.find_child_index(&key);
                crate::bpt_trace!("insert", "descend into child {}", idx);

                if Self::insert_recursive(&mut internal.children[idx], key, value, order) {
                    internal.split_child(idx, order);
                }
            }
        }

        node.is_overflow(order)
    }

    // Root split → grow tree height
    fn grow_root(&mut self) {
        let old_root = std::mem::replace(&mut self.root, Node::new_leaf());
        let mut new_root = InternalNode::with_child(old_root);
        new_root.split_child(0, self.order);
        self.root = Node::Internal(new_root);

        crate::bpt_debug!("tree", "root split, height now {}", self.height());
    }

    /// Removes one entry for `key`, the one `search` reports. Absent keys are
    /// a no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let removed = Self::delete_from(&mut self.root, key, self.order);

        if removed.is_some() {
            self.len -= 1;
            self.collapse_root();
        } else {
            crate::bpt_trace!("delete", "key not found");
        }

        if cfg!(debug_assertions) || self.check_invariants {
            self.assert_invariants();
        }

        removed
    }

    /// Recursive delete rooted at `node`. Children of `node` are repaired on
    /// the way back up; `node` itself is left for its caller to repair.
    pub fn delete_from(node: &mut Node<K, V>, key: &K, order: Order) -> Option<V> {
        match node {
            Node::Leaf(leaf) => leaf.remove(key).map(|(_, value)| value),

            Node::Internal(internal) => {
                let idx = internal.find_child_index(key);
                crate::bpt_trace!("delete", "descend into child {}", idx);

                let removed = Self::delete_from(&mut internal.children[idx], key, order)?;

                // The child may have lost its smallest key
                internal.refresh_separator(idx);

                if internal.children[idx].is_underflow(order) {
                    // An emptied leaf had no minimum to refresh with
                    let idx = internal.rebalance_child(idx, order);
                    internal.refresh_separator(idx);
                }

                Some(removed)
            }
        }
    }

    fn collapse_root(&mut self) {
        while let Node::Internal(root) = &mut self.root {
            if !root.keys.is_empty() {
                break;
            }
            let Some(child) = root.children.pop() else {
                break;
            };
            self.root = child;

            crate::bpt_debug!("tree", "root collapsed, height now {}", self.height());
        }
    }

    pub fn search(&self, key: &K) -> Option<(&Node<K, V>, usize)> {
        self.root.search(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let (leaf, idx) = self.search(key)?;
        leaf.values().get(idx)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        Self::get_mut_in(&mut self.root, key)
    }

    fn get_mut_in<'a>(node: &'a mut Node<K, V>, key: &K) -> Option<&'a mut V> {
        match node {
            Node::Internal(internal) => {
                let idx = internal.find_child_index(key);
                Self::get_mut_in(&mut internal.children[idx], key)
            }
            Node::Leaf(leaf) => {
                let idx = leaf.position(key)?;
                leaf.values.get_mut(idx)
            }
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Every stored key in ascending order, one entry per stored copy.
    pub fn walk(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = &self.root;
        while let Some(last) = node.children().last() {
            node = last;
        }
        let idx = node.len().checked_sub(1)?;
        Some((node.keys().get(idx)?, node.values().get(idx)?))
    }
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Panics with the first violated rule. Runs after every delete in debug
    /// builds and after every mutation when `TreeConfig::check_invariants` is
    /// set.
    pub fn assert_invariants(&self) {
        if let Err(reason) = self.validate() {
            crate::bpt_error!("tree", "invariant violated: {}", reason);
            panic!("B+ tree invariant violated: {reason}");
        }
    }

    fn validate(&self) -> Result<(), String> {
        let mut leaf_depth = None;
        self.validate_node(&self.root, 0, None, None, &mut leaf_depth)
    }

    fn validate_node(
        &self,
        node: &Node<K, V>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        leaf_depth: &mut Option<usize>,
    ) -> Result<(), String> {
        let is_root = depth == 0;
        let keys = node.keys();

        // sorted keys
        if !keys.windows(2).all(|w| w[0] <= w[1]) {
            return Err(format!("keys out of order at depth {depth}"));
        }

        // size bound
        if keys.len() > self.order.max_keys() {
            return Err(format!(
                "node at depth {depth} holds {} keys, max is {}",
                keys.len(),
                self.order.max_keys()
            ));
        }
        if !is_root && keys.len() < self.order.min_keys() {
            return Err(format!(
                "node at depth {depth} holds {} keys, min is {}",
                keys.len(),
                self.order.min_keys()
            ));
        }

        // range inherited from the parent separators
        if let (Some(lower), Some(first)) = (lower, keys.first()) {
            if first < lower {
                return Err(format!("key below its separator at depth {depth}"));
            }
        }
        if let (Some(upper), Some(last)) = (upper, keys.last()) {
            if last > upper {
                return Err(format!("key above its separator at depth {depth}"));
            }
        }

        match node {
            Node::Leaf(leaf) => {
                if leaf.keys.len() != leaf.values.len() {
                    return Err(format!(
                        "leaf at depth {depth} has {} keys but {} values",
                        leaf.keys.len(),
                        leaf.values.len()
                    ));
                }

                match *leaf_depth {
                    None => *leaf_depth = Some(depth),
                    Some(expected) if expected != depth => {
                        return Err(format!("leaves at depths {expected} and {depth}"));
                    }
                    Some(_) => {}
                }
            }

            Node::Internal(internal) => {
                if internal.children.len() != internal.keys.len() + 1 {
                    return Err(format!(
                        "internal node at depth {depth} has {} keys but {} children",
                        internal.keys.len(),
                        internal.children.len()
                    ));
                }
                if internal.keys.is_empty() {
                    return Err(format!("internal node at depth {depth} has no separators"));
                }

                for (i, child) in internal.children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(&internal.keys[i - 1]) };
                    let child_upper = internal.keys.get(i).or(upper);

                    if i > 0 && child.min_key() != Some(&internal.keys[i - 1]) {
                        return Err(format!(
                            "separator {} at depth {depth} is not the smallest key of its right child",
                            i - 1
                        ));
                    }

                    self.validate_node(child, depth + 1, child_lower, child_upper, leaf_depth)?;
                }
            }
        }

        Ok(())
    }
}

impl<K: Ord + Clone, V> Default for BPlusTree<K, V> {
    fn default() -> Self {
        Self::with_config(TreeConfig::default())
    }
}

impl<K: Ord + Clone, V> Extend<(K, V)> for BPlusTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Ord + Clone, V> IntoIterator for &'a BPlusTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + Clone, V> OrderedIndex<K, V> for BPlusTree<K, V> {
    fn insert(&mut self, key: K, value: V) {
        BPlusTree::insert(self, key, value);
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        BPlusTree::delete(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BPlusTree::get(self, key)
    }

    fn walk(&self) -> Vec<K> {
        BPlusTree::walk(self)
    }
}

/// One line per level, nodes as bracketed key lists.
impl<K: fmt::Debug, V> fmt::Display for BPlusTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level = vec![&self.root];
        let mut depth = 0;

        while !level.is_empty() {
            write!(f, "{depth}:")?;
            for node in &level {
                write!(f, " {:?}", node.keys())?;
            }
            writeln!(f)?;

            level = level.into_iter().flat_map(|node| node.children()).collect();
            depth += 1;
        }

        Ok(())
    }
}
