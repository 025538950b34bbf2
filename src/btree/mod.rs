pub mod b_plus_tree;
pub mod internal;
pub mod iter;
pub mod leaf;
pub mod node;

pub use b_plus_tree::BPlusTree;
pub use internal::InternalNode;
pub use iter::{Iter, Keys, Values};
pub use leaf::LeafNode;
pub use node::{Node, OrderedIndex};
