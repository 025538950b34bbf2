pub mod config;
pub mod error;

pub mod btree;
pub mod debugger;
mod diagnostics;

pub use btree::{BPlusTree, InternalNode, Iter, LeafNode, Node, OrderedIndex};
pub use config::{Order, TreeConfig};
pub use debugger::{DebugLevel, set_debug_level};
pub use error::{TreeError, TreeResult};
