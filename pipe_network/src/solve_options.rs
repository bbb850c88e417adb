#[derive(Clone, Copy, Debug)]
pub struct SolveOptions {
  /// Fail with `PipeNetworkError::Disconnected` if the pipes can't connect
  /// every node.
  pub require_spanning: bool,
  /// Size of the thread pool used by `solve_batch`.
  pub n_threads: u32,
}

impl SolveOptions {
  pub fn with_require_spanning(&self, require_spanning: bool) -> Self {
    Self {
      require_spanning,
      ..*self
    }
  }

  pub fn with_n_threads(&self, n_threads: u32) -> Self {
    Self { n_threads, ..*self }
  }
}

impl Default for SolveOptions {
  fn default() -> Self {
    Self {
      require_spanning: true,
      n_threads: 4,
    }
  }
}
