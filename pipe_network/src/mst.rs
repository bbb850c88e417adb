use itertools::Itertools;
use tracing::trace;
use union_find::{UnionFind, UnionFindResult};

use crate::Pipe;

/// A minimum spanning tree (or forest, if the pipes don't connect every node)
/// of a pipe network, built with Kruskal's algorithm.
#[derive(Clone, Debug)]
pub struct MinSpanningTree {
  /// Summed in `i128` so no combination of `i64` weights can overflow.
  cost: i128,
  node_count: usize,
  component_count: usize,
  /// All pipes of the tree, in the order they were added.
  pipes: Vec<Pipe>,
  active_pipes: Vec<Pipe>,
  inactive_pipes: Vec<Pipe>,
}

impl MinSpanningTree {
  /// Builds the minimum spanning tree over nodes `1..=node_count` from
  /// `pipes`, which must already be sorted by ascending weight. Pipes of equal
  /// weight are considered in the order given.
  ///
  /// The union-find forest has a slot for every index in `0..=node_count`, so
  /// a pipe touching a node beyond `node_count` fails with
  /// `UnionFindError::IllegalArgument`.
  pub fn build(pipes: &[Pipe], node_count: usize) -> UnionFindResult<Self> {
    debug_assert!(pipes.is_sorted_by_key(Pipe::weight));

    let mut uf = UnionFind::new(node_count + 1);
    let mut tree = Self {
      cost: 0,
      node_count,
      component_count: 0,
      pipes: Vec::new(),
      active_pipes: Vec::new(),
      inactive_pipes: Vec::new(),
    };

    for &pipe in pipes {
      if uf.connected(pipe.u(), pipe.v())? {
        trace!(%pipe, "Skipping pipe that would close a cycle");
        continue;
      }

      uf.union(pipe.u(), pipe.v())?;
      tree.cost += i128::from(pipe.weight());
      tree.pipes.push(pipe);
      if pipe.is_active() {
        tree.active_pipes.push(pipe);
      } else {
        tree.inactive_pipes.push(pipe);
      }
    }

    tree.component_count = (1..=node_count)
      .map(|node| uf.find(node))
      .collect::<UnionFindResult<Vec<_>>>()?
      .into_iter()
      .unique()
      .count();

    Ok(tree)
  }

  /// Sum of the weights of all pipes in the tree.
  pub fn cost(&self) -> i128 {
    self.cost
  }

  pub fn node_count(&self) -> usize {
    self.node_count
  }

  /// Number of connected components among the nodes `1..=node_count` that
  /// remain after adding every tree pipe.
  pub fn component_count(&self) -> usize {
    self.component_count
  }

  /// True if the tree connects every node of the network.
  pub fn is_spanning(&self) -> bool {
    self.component_count <= 1
  }

  pub fn pipes(&self) -> &[Pipe] {
    &self.pipes
  }

  pub fn active_pipes(&self) -> &[Pipe] {
    &self.active_pipes
  }

  pub fn inactive_pipes(&self) -> &[Pipe] {
    &self.inactive_pipes
  }

  /// The number of pipes that have to be activated to build this tree.
  pub fn inactive_count(&self) -> usize {
    self.inactive_pipes.len()
  }
}

#[cfg(test)]
mod tests {
  use googletest::{
    expect_eq, expect_false, expect_that, expect_true, gtest,
    prelude::{container_eq, elements_are},
  };
  use itertools::Itertools;
  use union_find::UnionFindError;

  use crate::{MinSpanningTree, Pipe};

  #[gtest]
  fn test_replaces_expensive_active_pipe() -> googletest::Result<()> {
    let pipes = [
      Pipe::active(1, 2, 1),
      Pipe::inactive(1, 4, 1),
      Pipe::active(2, 3, 2),
      Pipe::active(3, 4, 3),
    ];

    let tree = MinSpanningTree::build(&pipes, 4)?;

    expect_that!(
      tree.pipes().to_vec(),
      elements_are![
        &Pipe::active(1, 2, 1),
        &Pipe::inactive(1, 4, 1),
        &Pipe::active(2, 3, 2),
      ]
    );
    expect_eq!(tree.cost(), 4);
    expect_eq!(tree.inactive_count(), 1);
    expect_that!(
      tree.inactive_pipes().to_vec(),
      elements_are![&Pipe::inactive(1, 4, 1)]
    );
    expect_that!(
      tree.active_pipes().to_vec(),
      elements_are![&Pipe::active(1, 2, 1), &Pipe::active(2, 3, 2)]
    );
    expect_eq!(tree.component_count(), 1);
    expect_true!(tree.is_spanning());
    Ok(())
  }

  #[gtest]
  fn test_single_node() -> googletest::Result<()> {
    let tree = MinSpanningTree::build(&[], 1)?;

    expect_eq!(tree.cost(), 0);
    expect_true!(tree.pipes().is_empty());
    expect_eq!(tree.inactive_count(), 0);
    expect_eq!(tree.component_count(), 1);
    expect_true!(tree.is_spanning());
    Ok(())
  }

  #[gtest]
  fn test_keeps_existing_tree_on_ties() -> googletest::Result<()> {
    // Equal weights: whichever pipe comes first wins.
    let pipes = [
      Pipe::active(1, 2, 5),
      Pipe::inactive(1, 2, 5),
      Pipe::active(2, 3, 5),
      Pipe::inactive(1, 3, 5),
    ];

    let tree = MinSpanningTree::build(&pipes, 3)?;

    expect_that!(
      tree.pipes().to_vec(),
      elements_are![&Pipe::active(1, 2, 5), &Pipe::active(2, 3, 5)]
    );
    expect_eq!(tree.inactive_count(), 0);
    expect_eq!(tree.cost(), 10);
    Ok(())
  }

  #[gtest]
  fn test_skips_self_loops() -> googletest::Result<()> {
    let pipes = [Pipe::inactive(2, 2, 0), Pipe::active(1, 2, 3)];

    let tree = MinSpanningTree::build(&pipes, 2)?;

    expect_that!(
      tree.pipes().to_vec(),
      elements_are![&Pipe::active(1, 2, 3)]
    );
    Ok(())
  }

  #[gtest]
  fn test_disconnected() -> googletest::Result<()> {
    let pipes = [
      Pipe::active(1, 2, 1),
      Pipe::inactive(3, 4, 2),
      Pipe::active(4, 5, 4),
    ];

    let tree = MinSpanningTree::build(&pipes, 6)?;

    expect_eq!(tree.pipes().len(), 3);
    // {1, 2}, {3, 4, 5} and {6}.
    expect_eq!(tree.component_count(), 3);
    expect_eq!(tree.pipes().len(), tree.node_count() - tree.component_count());
    expect_false!(tree.is_spanning());
    expect_eq!(tree.cost(), 7);
    Ok(())
  }

  #[gtest]
  fn test_negative_weights() -> googletest::Result<()> {
    let pipes = [
      Pipe::inactive(1, 3, -4),
      Pipe::active(1, 2, -1),
      Pipe::active(2, 3, 2),
    ];

    let tree = MinSpanningTree::build(&pipes, 3)?;

    expect_eq!(tree.cost(), -5);
    expect_eq!(tree.inactive_count(), 1);
    Ok(())
  }

  #[gtest]
  fn test_cost_beyond_i64() -> googletest::Result<()> {
    let pipes = [Pipe::inactive(2, 3, 1), Pipe::active(1, 2, i64::MAX)];

    let tree = MinSpanningTree::build(&pipes, 3)?;

    expect_eq!(tree.cost(), i128::from(i64::MAX) + 1);
    expect_eq!(tree.inactive_count(), 1);
    Ok(())
  }

  #[gtest]
  fn test_node_out_of_range() {
    let pipes = [Pipe::active(1, 2, 1), Pipe::inactive(2, 4, 2)];

    expect_eq!(
      MinSpanningTree::build(&pipes, 3).map(|tree| tree.cost()),
      Err(UnionFindError::IllegalArgument {
        index: 4,
        capacity: 4
      })
    );
  }

  #[gtest]
  fn test_partition_is_complete() -> googletest::Result<()> {
    let pipes = [
      Pipe::inactive(1, 2, 1),
      Pipe::active(2, 3, 1),
      Pipe::inactive(3, 4, 2),
      Pipe::active(1, 4, 2),
      Pipe::active(4, 5, 3),
      Pipe::inactive(2, 5, 3),
    ];

    let tree = MinSpanningTree::build(&pipes, 5)?;

    let (actives, inactives): (Vec<_>, Vec<_>) =
      tree.pipes().iter().copied().partition(Pipe::is_active);
    expect_that!(tree.active_pipes().to_vec(), container_eq(actives));
    expect_that!(tree.inactive_pipes().to_vec(), container_eq(inactives));
    expect_eq!(
      tree.active_pipes().len() + tree.inactive_pipes().len(),
      tree.pipes().len()
    );
    expect_eq!(tree.inactive_count(), tree.inactive_pipes().len());
    expect_eq!(tree.pipes().len(), 4);
    expect_eq!(
      tree.cost(),
      tree
        .pipes()
        .iter()
        .map(|pipe| i128::from(pipe.weight()))
        .sum::<i128>()
    );
    expect_true!(tree.pipes().iter().all_unique());
    Ok(())
  }
}
