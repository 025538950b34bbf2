use std::fmt;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The order `t` leaves no room for `t - 1` keys per node.
    InvalidOrder { order: usize, min: usize },

    /// A hand-built node tree handed to `BPlusTree::from_root` is not a valid B+ tree.
    InvalidRoot { reason: String },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidOrder { order, min } => {
                write!(
                    f,
                    "config error: order {} is below the minimum order {}",
                    order, min
                )
            }

            TreeError::InvalidRoot { reason } => {
                write!(f, "tree error: invalid root ({})", reason)
            }
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_order() {
        let err = TreeError::InvalidOrder { order: 1, min: 2 };
        assert_eq!(
            err.to_string(),
            "config error: order 1 is below the minimum order 2"
        );
    }

    #[test]
    fn display_carries_root_reason() {
        let err = TreeError::InvalidRoot {
            reason: "leaves at depths 1 and 2".into(),
        };
        assert!(err.to_string().contains("leaves at depths 1 and 2"));
    }
}
