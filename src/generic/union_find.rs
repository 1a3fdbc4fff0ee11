/*!
A union-find structure on a fixed collection of nodes.

Nodes are the indicies `[0, size)` and each node begins in a class of its own.

- [find](UnionFind::find) follows parents to the root of a class, and then writes the root to the node queried.
- [union](UnionFind::union) places the root of the first class under the root of the second.
  No balancing by rank or size takes place, as only a count of classes is of interest and the count is independent of the shape of each tree.

```rust
# use cnf_features::generic::union_find::UnionFind;
let mut classes = UnionFind::new(4);

assert!(classes.union(0, 1).is_ok());
assert!(classes.union(2, 1).is_ok());

assert_eq!(classes.find(0), classes.find(2));
assert_eq!(classes.component_count(), Ok(2));
assert!(classes.find(4).is_err());
```
*/

use crate::types::err::UnionFindError;

/// The node type.
pub type Node = usize;

/// A union-find structure, with the parent of each node stored at the index of the node.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<Node>,
}

impl UnionFind {
    /// A structure of `size` nodes, each in a class of its own.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parents: (0..size).collect(),
        }
    }

    /// The count of nodes.
    pub fn size(&self) -> usize {
        self.parents.len()
    }

    fn check(&self, node: Node) -> Result<(), UnionFindError> {
        match node < self.parents.len() {
            true => Ok(()),
            false => Err(UnionFindError::OutOfRange {
                node,
                size: self.parents.len(),
            }),
        }
    }

    /// The representative of the class of `node`.
    pub fn find(&mut self, node: Node) -> Result<Node, UnionFindError> {
        self.check(node)?;

        let mut current = node;
        loop {
            let parent = self.parents[current];
            if parent == current {
                self.parents[node] = current;
                return Ok(current);
            }
            current = parent;
        }
    }

    /// Merges the classes of `a` and `b`.
    pub fn union(&mut self, a: Node, b: Node) -> Result<(), UnionFindError> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        self.parents[root_a] = root_b;
        Ok(())
    }

    /// The count of distinct classes.
    pub fn component_count(&mut self) -> Result<usize, UnionFindError> {
        let mut seen = vec![false; self.parents.len()];
        let mut count = 0;

        for node in 0..self.parents.len() {
            let root = self.find(node)?;
            if !seen[root] {
                seen[root] = true;
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut classes = UnionFind::new(5);
        assert_eq!(classes.component_count(), Ok(5));
        for node in 0..5 {
            assert_eq!(classes.find(node), Ok(node));
        }
    }

    #[test]
    fn empty() {
        let mut classes = UnionFind::new(0);
        assert_eq!(classes.component_count(), Ok(0));
        assert_eq!(
            classes.find(0),
            Err(UnionFindError::OutOfRange { node: 0, size: 0 })
        );
    }

    #[test]
    fn out_of_range() {
        let mut classes = UnionFind::new(3);
        assert_eq!(
            classes.union(1, 3),
            Err(UnionFindError::OutOfRange { node: 3, size: 3 })
        );
    }

    #[test]
    fn chain() {
        let mut classes = UnionFind::new(6);
        for node in 0..4 {
            assert!(classes.union(node, node + 1).is_ok());
        }
        assert_eq!(classes.component_count(), Ok(2));
        assert_eq!(classes.find(0), classes.find(4));
        assert_ne!(classes.find(0), classes.find(5));
    }

    #[test]
    fn compression() {
        let mut classes = UnionFind::new(4);
        assert!(classes.union(0, 1).is_ok());
        assert!(classes.union(1, 2).is_ok());
        assert!(classes.union(2, 3).is_ok());

        let root = classes.find(0).unwrap();
        assert_eq!(root, 3);
        assert_eq!(classes.parents[0], 3);
    }

    #[test]
    fn repeated_unions() {
        let mut classes = UnionFind::new(3);
        assert!(classes.union(0, 1).is_ok());
        assert!(classes.union(1, 0).is_ok());
        assert!(classes.union(0, 0).is_ok());
        assert_eq!(classes.component_count(), Ok(2));
    }
}
