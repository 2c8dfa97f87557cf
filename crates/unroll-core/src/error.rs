//! Error types shared by every container in the workspace.

use std::error::Error;
use std::fmt;

/// Errors reported by container operations.
///
/// Every error is raised before the container is mutated, so a rejected
/// call leaves the container exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// An index outside the valid range for the operation.
    IndexOutOfRange {
        /// The index the caller asked for.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// Removal or peek on a container with no elements.
    Empty,
}

impl ContainerError {
    /// Shorthand for [`ContainerError::IndexOutOfRange`].
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, len {len}")
            }
            Self::Empty => write!(f, "container is empty"),
        }
    }
}

impl Error for ContainerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_index_and_len() {
        let err = ContainerError::out_of_range(7, 3);
        assert_eq!(err.to_string(), "index out of range: index 7, len 3");
    }

    #[test]
    fn empty_display() {
        assert_eq!(ContainerError::Empty.to_string(), "container is empty");
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            ContainerError::out_of_range(1, 0),
            ContainerError::IndexOutOfRange { index: 1, len: 0 }
        );
        assert_ne!(ContainerError::out_of_range(1, 0), ContainerError::Empty);
    }
}
