use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, warn};

use super::*;

/// Undirected multigraph stored as one ordered neighbor list per vertex.
///
/// Every edge `{u, v}` is stored as `v` in the list of `u` and `u` in the list of `v`;
/// a self-loop therefore appears twice in the list of its vertex and adds `2` to its degree.
/// Duplicate edges are kept and counted. Storage is `O(n + m)` and edge updates are `O(deg)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseGraph {
    vertices: VertexResolver,
    nbs: Vec<NeighborList>,
    num_edges: NumEdges,
}

impl SparseGraph {
    /// Creates `n` isolated vertices labelled `"0"` to `"n - 1"`
    pub fn new(n: usize) -> std::result::Result<Self, ConstructionError> {
        Ok(Self::from_resolver(VertexResolver::with_count(n)?))
    }

    /// Creates one isolated vertex per label
    pub fn with_labels<I, S>(labels: I) -> std::result::Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_resolver(VertexResolver::with_labels(labels)?))
    }

    /// Creates an edgeless graph over an existing vertex set
    pub fn from_resolver(vertices: VertexResolver) -> Self {
        let n = vertices.len() as usize;
        debug!(vertices = n, "created sparse graph");
        Self {
            vertices,
            nbs: vec![NeighborList::new(); n],
            num_edges: 0,
        }
    }

    /// Returns the neighbors of `u` in insertion order, including duplicates.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    /// Returns the neighbor list of `u` as a slice.
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }

    /// Returns how many copies of the edge `{u, v}` are stored.
    /// ** Panics if `u >= n || v >= n` **
    pub fn multiplicity(&self, u: Node, v: Node) -> NumEdges {
        let entries = self.nbs[u as usize].count_of(v);
        if u == v { entries / 2 } else { entries }
    }
}

impl Graph for SparseGraph {
    fn resolver(&self) -> &VertexResolver {
        &self.vertices
    }

    fn edge_count(&self) -> NumEdges {
        self.num_edges
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges = (0..self.vertices.len())
            .flat_map(|u| self.neighbors_of(u).map(move |v| Edge(u, v)))
            .filter(Edge::is_normalized)
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    fn add_edge(&mut self, u: VertexRef, v: VertexRef) -> Result<Insertion> {
        let (iu, iv) = self
            .vertices
            .resolve_pair(&u, &v)
            .inspect_err(|err| warn!(%err, "cannot add edge {u} -- {v}"))?;

        self.nbs[iu as usize].add_neighbor(iv);
        self.nbs[iv as usize].add_neighbor(iu);
        self.num_edges += 1;

        debug!("added edge {u} -- {v}");
        Ok(Insertion::Inserted)
    }

    fn remove_edge(&mut self, u: VertexRef, v: VertexRef) -> Result<Removal> {
        let (iu, iv) = self
            .vertices
            .resolve_pair(&u, &v)
            .inspect_err(|err| warn!(%err, "cannot remove edge {u} -- {v}"))?;

        // Only remove if both incidences exist so the lists stay symmetric
        let present = if iu == iv {
            self.nbs[iu as usize].count_of(iu) >= 2
        } else {
            self.nbs[iu as usize].has_neighbor(iv) && self.nbs[iv as usize].has_neighbor(iu)
        };

        if !present {
            debug!("no edge {u} -- {v} to remove");
            return Ok(Removal::NotFound);
        }

        self.nbs[iu as usize].try_remove_neighbor(iv);
        self.nbs[iv as usize].try_remove_neighbor(iu);
        self.num_edges -= 1;

        debug!("removed edge {u} -- {v}");
        Ok(Removal::Removed)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for SparseGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Adjacency list:")?;
        for (u, label) in self.vertices.iter() {
            writeln!(
                f,
                "{label} -> [{}]",
                self.neighbors_of(u)
                    .map(|v| self.vertices.label_of(v))
                    .join(", ")
            )?;
        }
        Ok(())
    }
}


test_graph_contract!(test_sparse_contract, SparseGraph, true);
