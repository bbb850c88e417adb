use crate::{UnionFindError, UnionFindResult};

#[derive(Clone, Copy, Debug)]
struct Node {
  /// The index of parent of this node (self if root).
  parent: usize,
  /// Size of the tree under this element if this is a root. Stale for
  /// non-root elements.
  size: usize,
}

/// A disjoint-set forest over the elements `0..capacity`, using union by size
/// and full path compression.
///
/// Every operation taking an element id validates it, returning
/// `UnionFindError::IllegalArgument` for ids outside of the forest.
#[derive(Clone, Debug)]
pub struct UnionFind {
  unique_sets: usize,
  elements: Vec<Node>,
}

impl UnionFind {
  pub fn new(capacity: usize) -> Self {
    let elements = (0..capacity)
      .map(|idx| Node {
        parent: idx,
        size: 1,
      })
      .collect();

    Self {
      unique_sets: capacity,
      elements,
    }
  }

  pub fn capacity(&self) -> usize {
    self.elements.len()
  }

  pub fn unique_sets(&self) -> usize {
    self.unique_sets
  }

  fn validate(&self, node_id: usize) -> UnionFindResult<()> {
    if node_id < self.capacity() {
      Ok(())
    } else {
      Err(UnionFindError::IllegalArgument {
        index: node_id,
        capacity: self.capacity(),
      })
    }
  }

  /// Gives id of the root of tree that node is in.
  pub fn find(&mut self, node_id: usize) -> UnionFindResult<usize> {
    self.validate(node_id)?;

    let mut root_id = node_id;
    while self.elements[root_id].parent != root_id {
      root_id = self.elements[root_id].parent;
    }

    // Second pass over the same path, pointing every node directly at the
    // root.
    let mut node_id = node_id;
    while node_id != root_id {
      let next_id = self.elements[node_id].parent;
      self.elements[node_id].parent = root_id;
      node_id = next_id;
    }

    Ok(root_id)
  }

  pub fn connected(&mut self, a_id: usize, b_id: usize) -> UnionFindResult<bool> {
    Ok(self.find(a_id)? == self.find(b_id)?)
  }

  /// Number of elements in the set containing `node_id`.
  pub fn set_size(&mut self, node_id: usize) -> UnionFindResult<usize> {
    let root_id = self.find(node_id)?;
    Ok(self.elements[root_id].size)
  }

  /// Unions the two sets that a and b are in (noop if are already in the same
  /// set), returning the new set index of the two nodes.
  pub fn union(&mut self, a_id: usize, b_id: usize) -> UnionFindResult<usize> {
    let a_root_id = self.find(a_id)?;
    let b_root_id = self.find(b_id)?;

    if a_root_id == b_root_id {
      return Ok(a_root_id);
    }

    let a_size = self.elements[a_root_id].size;
    let b_size = self.elements[b_root_id].size;

    // Attach smaller tree to larger tree, keeping a's root on ties.
    let (root_id, child_id) = if a_size < b_size {
      (b_root_id, a_root_id)
    } else {
      (a_root_id, b_root_id)
    };
    self.elements[child_id].parent = root_id;
    self.elements[root_id].size = a_size + b_size;

    // Two sets have joined, reducing the number of unique sets by one.
    self.unique_sets -= 1;

    Ok(root_id)
  }
}
