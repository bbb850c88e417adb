use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipeStatus {
  /// The pipe already exists in the network.
  Active,
  /// The pipe is a candidate that would have to be built.
  Inactive,
}

/// An undirected, weighted pipe between two nodes of the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pipe {
  u: usize,
  v: usize,
  weight: i64,
  status: PipeStatus,
}

impl Pipe {
  pub const fn new(u: usize, v: usize, weight: i64, status: PipeStatus) -> Self {
    Self {
      u,
      v,
      weight,
      status,
    }
  }

  pub const fn active(u: usize, v: usize, weight: i64) -> Self {
    Self::new(u, v, weight, PipeStatus::Active)
  }

  pub const fn inactive(u: usize, v: usize, weight: i64) -> Self {
    Self::new(u, v, weight, PipeStatus::Inactive)
  }

  pub const fn u(&self) -> usize {
    self.u
  }

  pub const fn v(&self) -> usize {
    self.v
  }

  pub const fn weight(&self) -> i64 {
    self.weight
  }

  pub const fn status(&self) -> PipeStatus {
    self.status
  }

  pub fn is_active(&self) -> bool {
    self.status == PipeStatus::Active
  }
}

impl Display for Pipe {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let status = match self.status {
      PipeStatus::Active => "active",
      PipeStatus::Inactive => "inactive",
    };
    write!(f, "({}, {}, {}, {status})", self.u, self.v, self.weight)
  }
}
