use std::{cmp::Reverse, collections::BinaryHeap};

use rand::Rng;

use crate::{Pipe, PipeNetwork};

pub const MAX_RANDOM_WEIGHT: i64 = 100;

/// Cost of a minimum spanning tree over nodes `1..=node_count` computed with
/// Prim's algorithm, or `None` if the pipes don't connect every node.
pub fn prim_cost(pipes: &[Pipe], node_count: usize) -> Option<i128> {
  if node_count == 0 {
    return Some(0);
  }

  let mut adjacent = vec![Vec::new(); node_count + 1];
  for pipe in pipes {
    adjacent[pipe.u()].push((pipe.weight(), pipe.v()));
    adjacent[pipe.v()].push((pipe.weight(), pipe.u()));
  }

  let mut visited = vec![false; node_count + 1];
  let mut heap = BinaryHeap::from([Reverse((0_i64, 1))]);
  let mut cost = 0_i128;
  let mut reached = 0;
  while let Some(Reverse((weight, node))) = heap.pop() {
    if visited[node] {
      continue;
    }
    visited[node] = true;
    cost += i128::from(weight);
    reached += 1;

    for &(weight, next) in &adjacent[node] {
      if !visited[next] {
        heap.push(Reverse((weight, next)));
      }
    }
  }

  (reached == node_count).then_some(cost)
}

/// A random connected network: `node_count - 1` active pipes forming a random
/// spanning tree, followed by `extra_pipes` inactive pipes between random
/// nodes.
pub fn random_network<R: Rng>(rng: &mut R, node_count: usize, extra_pipes: usize) -> PipeNetwork {
  let active = (2..=node_count).map(|node| {
    Pipe::active(
      rng.random_range(1..node),
      node,
      rng.random_range(1..=MAX_RANDOM_WEIGHT),
    )
  });
  let mut pipes = active.collect::<Vec<_>>();

  pipes.extend((0..extra_pipes).map(|_| {
    Pipe::inactive(
      rng.random_range(1..=node_count),
      rng.random_range(1..=node_count),
      rng.random_range(1..=MAX_RANDOM_WEIGHT),
    )
  }));

  PipeNetwork::new(node_count, 0, pipes)
}

/// Renders `network` in the text format accepted by `PipeNetwork::from_str`.
pub fn network_to_string(network: &PipeNetwork) -> String {
  let mut lines = vec![format!(
    "{} {} {}",
    network.node_count(),
    network.pipes().len(),
    network.decay()
  )];
  lines.extend(
    network
      .pipes()
      .iter()
      .map(|pipe| format!("{} {} {}", pipe.u(), pipe.v(), pipe.weight())),
  );
  lines.join("\n")
}
