use rayon::prelude::*;
use tracing::debug;

use crate::{
  error::{PipeNetworkError, PipeNetworkResult},
  MinSpanningTree, PipeNetwork, SolveOptions,
};

/// Computes the minimum spanning tree of `network`, considering pipes of equal
/// weight in input order.
pub fn solve(network: &PipeNetwork, options: &SolveOptions) -> PipeNetworkResult<MinSpanningTree> {
  let tree = MinSpanningTree::build(&network.sorted_pipes(), network.node_count())?;

  debug!(
    cost = %tree.cost(),
    pipes = tree.pipes().len(),
    inactive = tree.inactive_count(),
    components = tree.component_count(),
    "Built minimum spanning tree"
  );

  if options.require_spanning && !tree.is_spanning() {
    return Err(PipeNetworkError::Disconnected {
      components: tree.component_count(),
    });
  }

  Ok(tree)
}

/// The number of inactive pipes that have to be activated to connect every
/// node of `network` at minimum cost.
pub fn pipes_to_activate(
  network: &PipeNetwork,
  options: &SolveOptions,
) -> PipeNetworkResult<usize> {
  Ok(solve(network, options)?.inactive_count())
}

/// Solves each network independently on a thread pool of
/// `options.n_threads` threads. Results are in the same order as `networks`.
pub fn solve_batch(
  networks: &[PipeNetwork],
  options: &SolveOptions,
) -> PipeNetworkResult<Vec<PipeNetworkResult<MinSpanningTree>>> {
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(options.n_threads as usize)
    .build()
    .map_err(|err| PipeNetworkError::ThreadPool(err.to_string()))?;

  debug!(
    networks = networks.len(),
    threads = pool.current_num_threads(),
    "Solving batch"
  );

  Ok(pool.install(|| {
    networks
      .par_iter()
      .map(|network| solve(network, options))
      .collect()
  }))
}
