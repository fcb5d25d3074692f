use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, warn};

use super::*;

/// Undirected simple graph stored as a symmetric `n x n` adjacency matrix.
///
/// Cells only ever hold `0` or `1` and the diagonal stays `0`: repeated insertions of an edge
/// are no-ops and self-loops are rejected. Edge queries and updates are `O(1)`, computing a
/// degree is `O(n)` and storage is `O(n^2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGraph {
    vertices: VertexResolver,
    matrix: Vec<u8>,
    num_edges: NumEdges,
}

impl DenseGraph {
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
        debug!(vertices = n, "created dense graph");
        Self {
            vertices,
            matrix: vec![0; n * n],
            num_edges: 0,
        }
    }

    /// Returns the matrix row of `u`.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[u8] {
        let n = self.vertices.len() as usize;
        let start = u as usize * n;
        &self.matrix[start..start + n]
    }

    /// Returns an iterator over the neighbors of `u` in ascending order.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .positions(|&cell| cell != 0)
            .map(|v| v as Node)
    }

    fn cell_index(&self, u: Node, v: Node) -> usize {
        u as usize * self.vertices.len() as usize + v as usize
    }

    fn set_symmetric(&mut self, u: Node, v: Node, value: u8) {
        let uv = self.cell_index(u, v);
        let vu = self.cell_index(v, u);
        self.matrix[uv] = value;
        self.matrix[vu] = value;
    }
}

impl Graph for DenseGraph {
    fn resolver(&self) -> &VertexResolver {
        &self.vertices
    }

    fn edge_count(&self) -> NumEdges {
        self.num_edges
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.row(u).iter().filter(|&&cell| cell != 0).count() as NumNodes
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix[self.cell_index(u, v)] != 0
    }

    fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .flat_map(|u| {
                self.neighbors_of(u)
                    .filter(move |&v| u < v)
                    .map(move |v| Edge(u, v))
            })
            .collect_vec()
    }

    fn add_edge(&mut self, u: VertexRef, v: VertexRef) -> Result<Insertion> {
        let (iu, iv) = self
            .vertices
            .resolve_pair(&u, &v)
            .inspect_err(|err| warn!(%err, "cannot add edge {u} -- {v}"))?;

        if iu == iv {
            let label = self.vertices.label_of(iu).to_string();
            warn!(vertex = %label, "dense graph cannot store a self-loop");
            return Err(GraphError::SelfLoop(label));
        }

        if self.has_edge(iu, iv) {
            return Ok(Insertion::AlreadyPresent);
        }

        self.set_symmetric(iu, iv, 1);
        self.num_edges += 1;
        debug!("added edge {u} -- {v}");
        Ok(Insertion::Inserted)
    }

    fn remove_edge(&mut self, u: VertexRef, v: VertexRef) -> Result<Removal> {
        let (iu, iv) = self
            .vertices
            .resolve_pair(&u, &v)
            .inspect_err(|err| warn!(%err, "cannot remove edge {u} -- {v}"))?;

        if !self.has_edge(iu, iv) {
            debug!("no edge {u} -- {v} to remove");
            return Ok(Removal::NotFound);
        }

        self.set_symmetric(iu, iv, 0);
        self.num_edges -= 1;
        debug!("removed edge {u} -- {v}");
        Ok(Removal::Removed)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for DenseGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Adjacency matrix:")?;

        let header = format!("   {}", self.vertices.labels().iter().join("  "));
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "─".repeat(header.chars().count()))?;

        for (u, label) in self.vertices.iter() {
            writeln!(f, "{label} | {}", self.row(u).iter().join("  "))?;
        }
        Ok(())
    }
}


test_graph_contract!(test_dense_contract, DenseGraph, false);
