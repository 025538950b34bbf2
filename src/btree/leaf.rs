/// Payload-bearing node: `keys[i]` maps to `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode<K, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>, // values.len() = keys.len()
}

impl<K, V> LeafNode<K, V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn entry(&self, idx: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(idx)?, self.values.get(idx)?))
    }
}

impl<K: Ord, V> LeafNode<K, V> {
    /// Index of the first key equal to `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        let idx = self.keys.partition_point(|k| k < key);
        (idx < self.keys.len() && self.keys[idx] == *key).then_some(idx)
    }

    /// Sorted insert; an equal key goes after the ones already present.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        let idx = self.keys.partition_point(|k| k <= &key);
        self.keys.insert(idx, key);
        self.values.insert(idx, value);
        idx
    }

    /// Removes the entry `position` reports for `key`.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let idx = self.position(key)?;
        Some((self.keys.remove(idx), self.values.remove(idx)))
    }

    /// Keeps `[0, at)` and returns `[at, len)` as a new leaf.
    pub(crate) fn split_off(&mut self, at: usize) -> Self {
        Self {
            keys: self.keys.split_off(at),
            values: self.values.split_off(at),
        }
    }

    pub(crate) fn absorb(&mut self, right: Self) {
        self.keys.extend(right.keys);
        self.values.extend(right.values);
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        Some((self.keys.pop()?, self.values.pop()?))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        if self.keys.is_empty() || self.values.is_empty() {
            return None;
        }
        Some((self.keys.remove(0), self.values.remove(0)))
    }

    pub(crate) fn push_front(&mut self, key: K, value: V) {
        self.keys.insert(0, key);
        self.values.insert(0, value);
    }

    pub(crate) fn push_back(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
    }
}

impl<K, V> Default for LeafNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
