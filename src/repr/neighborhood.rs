use std::{iter::Copied, slice::Iter};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use crate::*;

/// Ordered multiset of neighbors backed by `SmallVec<[Node; N]>`.
///
/// Neighbors stay in insertion order; duplicates are kept.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct NeighborList<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> NeighborList<N>
where
    [Node; N]: Array<Item = Node>,
{
    pub fn new() -> Self {
        Self(Default::default())
    }

    /// Returns the number of entries, counting duplicates
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns an iterator over all entries in insertion order
    pub fn neighbors(&self) -> Copied<Iter<'_, Node>> {
        self.0.iter().copied()
    }

    /// Returns *true* if `v` occurs at least once
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    /// Returns how often `v` occurs
    pub fn count_of(&self, v: Node) -> NumNodes {
        self.neighbors().filter(|&u| u == v).count() as NumNodes
    }

    /// Appends `u` without checking for existing entries
    pub fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    /// Removes the first occurrence of `u`, keeping the order of the rest.
    /// Returns *true* if `u` was present.
    pub fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}
