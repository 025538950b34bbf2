use std::collections::BTreeMap;

use anyhow::{Result, ensure};
use bptree::{BPlusTree, OrderedIndex, TreeConfig};

/// Reference multiset the tree is checked against. Equal keys keep their
/// insertion order, and `delete` removes the oldest one.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct Model {
    entries: BTreeMap<i64, Vec<i64>>,
}

impl OrderedIndex<i64, i64> for Model {
    fn insert(&mut self, key: i64, value: i64) {
        self.entries.entry(key).or_default().push(value);
    }

    fn delete(&mut self, key: &i64) -> Option<i64> {
        let values = self.entries.get_mut(key)?;
        let value = values.remove(0);
        if values.is_empty() {
            self.entries.remove(key);
        }
        Some(value)
    }

    fn get(&self, key: &i64) -> Option<&i64> {
        self.entries.get(key).and_then(|values| values.first())
    }

    fn walk(&self) -> Vec<i64> {
        self.entries
            .iter()
            .flat_map(|(k, values)| std::iter::repeat_n(*k, values.len()))
            .collect()
    }
}

/// A tree and a model fed the same operations.
#[allow(dead_code)]
pub struct TestTree {
    pub tree: BPlusTree<i64, i64>,
    pub model: Model,
}

#[allow(dead_code)]
impl TestTree {
    /// Invariants are checked after every mutation.
    pub fn new(t: usize) -> Result<Self> {
        let config = TreeConfig::new(t)?.check_invariants(true);
        Ok(Self {
            tree: BPlusTree::with_config(config),
            model: Model::default(),
        })
    }

    /// Stores `key` as its own value, so every copy of a duplicate is
    /// interchangeable and returned values can be compared exactly.
    pub fn insert(&mut self, key: i64) {
        self.tree.insert(key, key);
        self.model.insert(key, key);
    }

    pub fn delete(&mut self, key: i64) -> Result<Option<i64>> {
        let got = self.tree.delete(&key);
        let expected = self.model.delete(&key);
        ensure!(
            got == expected,
            "delete({key}) returned {got:?}, model says {expected:?}"
        );
        Ok(got)
    }

    /// Compares the full walk, then `get` for each probe.
    pub fn check(&self, probes: &[i64]) -> Result<()> {
        let (walk, expected) = (self.tree.walk(), self.model.walk());
        ensure!(
            walk == expected,
            "walk diverged from model\ntree:\n{}",
            self.tree
        );
        ensure!(self.tree.len() == expected.len(), "len out of sync");

        for key in probes {
            let (got, want) = (self.tree.get(key), self.model.get(key));
            ensure!(got == want, "get({key}) returned {got:?}, model says {want:?}");
        }
        Ok(())
    }
}

/// Tree with `value = key` for every key, in the given order.
#[allow(dead_code)]
pub fn build(t: usize, keys: &[i64]) -> Result<BPlusTree<i64, i64>> {
    let mut tree = BPlusTree::new(t)?;
    tree.extend(keys.iter().map(|&k| (k, k)));
    Ok(tree)
}
