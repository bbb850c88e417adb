use std::{error::Error, fmt::Display};

use union_find::UnionFindError;

#[derive(Debug)]
pub enum PipeNetworkError {
  /// The network description could not be parsed.
  Parse(String),
  /// A pipe referenced a node outside of the network's union-find forest.
  IllegalArgument(UnionFindError),
  /// The minimum spanning tree leaves more than one component.
  Disconnected { components: usize },
  ThreadPool(String),
}

impl Error for PipeNetworkError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::IllegalArgument(err) => Some(err),
      _ => None,
    }
  }
}

impl Display for PipeNetworkError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Parse(message) => write!(f, "Error: {message}"),
      Self::IllegalArgument(err) => write!(f, "Error: illegal argument: {err}"),
      Self::Disconnected { components } => write!(
        f,
        "Error: network is disconnected, minimum spanning forest has {components} components"
      ),
      Self::ThreadPool(message) => write!(f, "Error: failed to build thread pool: {message}"),
    }
  }
}

impl From<UnionFindError> for PipeNetworkError {
  fn from(err: UnionFindError) -> Self {
    Self::IllegalArgument(err)
  }
}

#[macro_export]
macro_rules! make_parse_error {
  ($($args:expr),+) => {
    $crate::error::PipeNetworkError::Parse(format!($($args),+))
  };
}

pub type PipeNetworkResult<T = ()> = Result<T, PipeNetworkError>;
