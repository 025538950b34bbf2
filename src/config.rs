//! Tree configuration: the order `t` and the optional invariant checking switch.

use std::fmt;

use crate::error::{TreeError, TreeResult};

/// The branching control `t` of a tree.
///
/// Every non-root node keeps between `t - 1` and `2t - 1` keys, so an
/// internal node has between `t` and `2t` children. `t` must be at least 2,
/// otherwise a node could be left with no key after a split or a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(usize);

impl Order {
    pub const MIN: usize = 2;

    pub fn new(t: usize) -> TreeResult<Self> {
        if t < Self::MIN {
            return Err(TreeError::InvalidOrder {
                order: t,
                min: Self::MIN,
            });
        }
        Ok(Order(t))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// `2t - 1`
    #[inline]
    pub fn max_keys(self) -> usize {
        2 * self.0 - 1
    }

    /// `t - 1`, does not apply to the root.
    #[inline]
    pub fn min_keys(self) -> usize {
        self.0 - 1
    }

    #[inline]
    pub fn max_children(self) -> usize {
        2 * self.0
    }

    #[inline]
    pub fn min_children(self) -> usize {
        self.0
    }

    /// Position of the median key promoted by a split.
    #[inline]
    pub fn split_at(self) -> usize {
        self.0 - 1
    }
}

impl Default for Order {
    fn default() -> Self {
        Order(3)
    }
}

impl TryFrom<usize> for Order {
    type Error = TreeError;

    fn try_from(t: usize) -> TreeResult<Self> {
        Order::new(t)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeConfig {
    pub order: Order,

    /// Run the full invariant check after every insert and delete, release
    /// builds included. Debug builds always check after deletes.
    pub check_invariants: bool,
}

impl TreeConfig {
    pub fn new(t: usize) -> TreeResult<Self> {
        Ok(Self {
            order: Order::new(t)?,
            check_invariants: false,
        })
    }

    pub fn check_invariants(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }
}
