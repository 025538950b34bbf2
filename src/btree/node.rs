use crate::{
    btree::{internal::InternalNode, leaf::LeafNode},
    config::Order,
};

/// The seam the differential tests drive both the tree and a reference
/// model through.
pub trait OrderedIndex<K, V> {
    fn insert(&mut self, key: K, value: V);
    fn delete(&mut self, key: &K) -> Option<V>;
    fn get(&self, key: &K) -> Option<&V>;
    fn walk(&self) -> Vec<K>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<K, V> {
    Internal(InternalNode<K, V>),
    Leaf(LeafNode<K, V>),
}

impl<K, V> Node<K, V> {
    pub fn new_leaf() -> Self {
        Node::Leaf(LeafNode::new())
    }

    pub fn new_internal() -> Self {
        Node::Internal(InternalNode::new())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn keys(&self) -> &[K] {
        match self {
            Node::Leaf(l) => &l.keys,
            Node::Internal(i) => &i.keys,
        }
    }

    /// Empty for internal nodes.
    pub fn values(&self) -> &[V] {
        match self {
            Node::Leaf(l) => &l.values,
            Node::Internal(_) => &[],
        }
    }

    /// Empty for leaves.
    pub fn children(&self) -> &[Node<K, V>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Internal(i) => &i.children,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode<K, V>> {
        match self {
            Node::Leaf(l) => Some(l),
            Node::Internal(_) => None,
        }
    }

    pub fn as_internal(&self) -> Option<&InternalNode<K, V>> {
        match self {
            Node::Internal(i) => Some(i),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_internal_mut(&mut self) -> Option<&mut InternalNode<K, V>> {
        match self {
            Node::Internal(i) => Some(i),
            Node::Leaf(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    pub fn is_full(&self, order: Order) -> bool {
        self.len() == order.max_keys()
    }

    pub fn is_overflow(&self, order: Order) -> bool {
        self.len() > order.max_keys()
    }

    /// Only meaningful below the root.
    pub fn is_underflow(&self, order: Order) -> bool {
        self.len() < order.min_keys()
    }

    /// Smallest key of the subtree.
    pub fn min_key(&self) -> Option<&K> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(l) => return l.keys.first(),
                Node::Internal(i) => node = i.children.first()?,
            }
        }
    }

    /// Largest key of the subtree.
    pub fn max_key(&self) -> Option<&K> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(l) => return l.keys.last(),
                Node::Internal(i) => node = i.children.last()?,
            }
        }
    }

    /// Raw append, the caller keeps the keys sorted.
    pub fn append_key(&mut self, key: K) {
        match self {
            Node::Leaf(l) => l.keys.push(key),
            Node::Internal(i) => i.keys.push(key),
        }
    }

    /// # Panics
    /// On an internal node, which never carries values.
    pub fn append_value(&mut self, value: V) {
        match self {
            Node::Leaf(l) => l.values.push(value),
            Node::Internal(_) => panic!("append_value on an internal node"),
        }
    }

    /// # Panics
    /// On a leaf, which never owns children.
    pub fn append_child(&mut self, child: Node<K, V>) {
        match self {
            Node::Internal(i) => i.children.push(child),
            Node::Leaf(_) => panic!("append_child on a leaf node"),
        }
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Descends from this node to the leaf whose range covers `key` and
    /// returns that leaf with the position of the first equal key.
    pub fn search(&self, key: &K) -> Option<(&Node<K, V>, usize)> {
        let mut node = self;
        loop {
            match node {
                Node::Internal(i) => node = &i.children[i.find_child_index(key)],
                Node::Leaf(l) => return l.position(key).map(|idx| (node, idx)),
            }
        }
    }

    /// `None` for leaves.
    pub fn find_child_index(&self, key: &K) -> Option<usize> {
        self.as_internal().map(|i| i.find_child_index(key))
    }
}

impl<K, V> From<LeafNode<K, V>> for Node<K, V> {
    fn from(leaf: LeafNode<K, V>) -> Self {
        Node::Leaf(leaf)
    }
}

impl<K, V> From<InternalNode<K, V>> for Node<K, V> {
    fn from(internal: InternalNode<K, V>) -> Self {
        Node::Internal(internal)
    }
}
