use std::str::FromStr;

use itertools::Itertools;
use tracing::warn;

use crate::{
  error::{PipeNetworkError, PipeNetworkResult},
  make_parse_error, Pipe, PipeStatus,
};

/// A water-pipe network: `node_count` nodes numbered `1..=node_count`, and the
/// active and inactive pipes between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipeNetwork {
  node_count: usize,
  decay: i64,
  pipes: Vec<Pipe>,
}

impl PipeNetwork {
  pub fn new(node_count: usize, decay: i64, pipes: Vec<Pipe>) -> Self {
    Self {
      node_count,
      decay,
      pipes,
    }
  }

  pub fn node_count(&self) -> usize {
    self.node_count
  }

  /// The decay parameter from the network header. Carried along with the
  /// network, but does not influence the minimum spanning tree.
  pub fn decay(&self) -> i64 {
    self.decay
  }

  /// All pipes in input order.
  pub fn pipes(&self) -> &[Pipe] {
    &self.pipes
  }

  pub fn active_pipes(&self) -> impl Iterator<Item = &Pipe> + '_ {
    self.pipes.iter().filter(|pipe| pipe.is_active())
  }

  pub fn inactive_pipes(&self) -> impl Iterator<Item = &Pipe> + '_ {
    self.pipes.iter().filter(|pipe| !pipe.is_active())
  }

  /// All pipes sorted by ascending weight. The sort is stable, so pipes of
  /// equal weight stay in input order.
  pub fn sorted_pipes(&self) -> Vec<Pipe> {
    self
      .pipes
      .iter()
      .copied()
      .sorted_by_key(Pipe::weight)
      .collect()
  }
}

/// Parses one `u v w` record.
fn parse_pipe(line_no: usize, line: &str, status: PipeStatus) -> PipeNetworkResult<Pipe> {
  let [u, v, weight] = parse_record(line_no, line)?;
  let node = |value: i64| {
    usize::try_from(value)
      .map_err(|_| make_parse_error!("line {line_no}: node index {value} must not be negative"))
  };
  Ok(Pipe::new(node(u)?, node(v)?, weight, status))
}

fn parse_record(line_no: usize, line: &str) -> PipeNetworkResult<[i64; 3]> {
  let values = line
    .split_whitespace()
    .map(|token| {
      token
        .parse::<i64>()
        .map_err(|err| make_parse_error!("line {line_no}: invalid integer \"{token}\": {err}"))
    })
    .collect::<PipeNetworkResult<Vec<_>>>()?;

  <[i64; 3]>::try_from(values).map_err(|values| {
    make_parse_error!(
      "line {line_no}: expected 3 integers, found {}",
      values.len()
    )
  })
}

impl FromStr for PipeNetwork {
  type Err = PipeNetworkError;

  /// Parses a network description. The first line holds the node count `n`,
  /// pipe count `m` and decay `d`. It is followed by `n - 1` lines `u v w` of
  /// active pipes, then `m - (n - 1)` lines of inactive pipes. Blank lines are
  /// skipped.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut lines = s
      .lines()
      .enumerate()
      .map(|(idx, line)| (idx + 1, line))
      .filter(|(_, line)| !line.trim().is_empty());

    let (line_no, header) = lines
      .next()
      .ok_or_else(|| make_parse_error!("empty input, expected \"n m d\" header"))?;
    let [n, m, decay] = parse_record(line_no, header)?;

    let node_count = usize::try_from(n)
      .ok()
      .filter(|&n| n > 0)
      .ok_or_else(|| make_parse_error!("line {line_no}: node count must be positive, found {n}"))?;
    let pipe_count = usize::try_from(m)
      .ok()
      .filter(|&m| m >= node_count - 1)
      .ok_or_else(|| {
        make_parse_error!(
          "line {line_no}: pipe count {m} is less than the {} active pipes",
          node_count - 1
        )
      })?;

    let pipes = (0..pipe_count)
      .map(|idx| {
        let status = if idx < node_count - 1 {
          PipeStatus::Active
        } else {
          PipeStatus::Inactive
        };
        let (line_no, line) = lines.next().ok_or_else(|| {
          make_parse_error!("unexpected end of input, expected {pipe_count} pipes, found {idx}")
        })?;
        parse_pipe(line_no, line, status)
      })
      .collect::<PipeNetworkResult<Vec<_>>>()?;

    let trailing = lines.count();
    if trailing > 0 {
      warn!("Ignoring {trailing} lines after the last pipe");
    }

    Ok(Self::new(node_count, decay, pipes))
  }
}
