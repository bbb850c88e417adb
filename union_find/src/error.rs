use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnionFindError {
  /// An element id outside of `[0, capacity)` was passed to the forest.
  IllegalArgument { index: usize, capacity: usize },
}

impl Error for UnionFindError {}

impl Display for UnionFindError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::IllegalArgument { index, capacity: 0 } => {
        write!(f, "index {index} is out of range for an empty forest")
      }
      Self::IllegalArgument { index, capacity } => {
        write!(f, "index {index} is not between 0 and {}", capacity - 1)
      }
    }
  }
}

pub type UnionFindResult<T> = Result<T, UnionFindError>;
