/*!
# Graph Capabilities

The [`Graph`] trait is the contract shared by every representation in [`crate::repr`].
It is object safe, so the representation can be picked at run time and held as `Box<dyn Graph>`
(see [`crate::builder::GraphBuilder`]), while call sites stay the same.

Edge operations address vertices through [`VertexRef`]; structural queries such as
[`Graph::has_edge`] and [`Graph::degree_of`] work on canonical indices.
*/

use itertools::Itertools;

use crate::{error::Result, resolver::*, *};

/// Outcome of a successful [`Graph::add_edge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The edge (or another copy of it) was stored
    Inserted,
    /// The edge existed before and the graph is unchanged
    AlreadyPresent,
}

/// Outcome of a successful [`Graph::remove_edge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// One copy of the edge was removed
    Removed,
    /// There was no such edge; the graph is unchanged
    NotFound,
}

/// An undirected graph over a vertex set fixed at construction
pub trait Graph {
    /// Returns the vertex set of the graph
    fn resolver(&self) -> &VertexResolver;

    /// Returns the number of vertices
    fn vertex_count(&self) -> NumNodes {
        self.resolver().len()
    }

    /// Returns the vertex labels in index order
    fn labels(&self) -> &[String] {
        self.resolver().labels()
    }

    /// Returns the number of edges
    fn edge_count(&self) -> NumEdges;

    /// Returns the number of edge-incidences at `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the degree of every vertex, sorted ascending
    fn degree_sequence(&self) -> Vec<NumNodes> {
        let mut degrees = (0..self.vertex_count())
            .map(|u| self.degree_of(u))
            .collect_vec();
        degrees.sort_unstable();
        degrees
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        (0..self.vertex_count())
            .map(|u| self.degree_of(u))
            .max()
            .unwrap_or(0)
    }

    /// Returns *true* if at least one edge `{u, v}` exists.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Like [`Graph::has_edge`] but resolves both endpoints first
    fn contains_edge(&self, u: &VertexRef, v: &VertexRef) -> Result<bool> {
        let (u, v) = self.resolver().resolve_pair(u, v)?;
        Ok(self.has_edge(u, v))
    }

    /// Returns every connected pair once as a normalized edge, in sorted order.
    /// Multiple copies of an edge are reported once.
    fn edges(&self) -> Vec<Edge>;

    /// Adds the edge `{u, v}`.
    /// Both endpoints are resolved before the graph is touched.
    fn add_edge(&mut self, u: VertexRef, v: VertexRef) -> Result<Insertion>;

    /// Removes one copy of the edge `{u, v}` if present.
    /// Both endpoints are resolved before the graph is touched.
    fn remove_edge(&mut self, u: VertexRef, v: VertexRef) -> Result<Removal>;

    /// Returns a human-readable dump of the graph
    fn render(&self) -> String;

    /// Adds all edges in the collection, stopping at the first failure
    fn add_edges<I, U, V>(&mut self, edges: I) -> Result<()>
    where
        Self: Sized,
        I: IntoIterator<Item = (U, V)>,
        U: Into<VertexRef>,
        V: Into<VertexRef>,
    {
        for (u, v) in edges {
            self.add_edge(u.into(), v.into())?;
        }
        Ok(())
    }

    /// Removes all edges in the collection, stopping at the first failure.
    /// Returns the number of edges that were actually removed.
    fn remove_edges<I, U, V>(&mut self, edges: I) -> Result<NumEdges>
    where
        Self: Sized,
        I: IntoIterator<Item = (U, V)>,
        U: Into<VertexRef>,
        V: Into<VertexRef>,
    {
        let mut removed = 0;
        for (u, v) in edges {
            if self.remove_edge(u.into(), v.into())? == Removal::Removed {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Returns *true* if every vertex of `self` carries a label of `host` and every edge of
    /// `self` exists between the corresponding vertices of `host`.
    fn is_subgraph(&self, host: &dyn Graph) -> bool {
        let Some(mapping) = label_mapping(self.resolver(), host.resolver()) else {
            return false;
        };

        self.edges()
            .into_iter()
            .all(|Edge(u, v)| host.has_edge(mapping[u as usize], mapping[v as usize]))
    }

    /// Returns *true* if `self` is a subgraph of `host` with exactly the same vertex set
    fn is_spanning_subgraph(&self, host: &dyn Graph) -> bool {
        // a subgraph already embeds every label, so equal sizes mean equal sets
        self.vertex_count() == host.vertex_count() && self.is_subgraph(host)
    }

    /// Returns *true* if `self` is a subgraph of `host` and every edge of `host` between two
    /// vertices of `self` is also an edge of `self`
    fn is_induced_subgraph(&self, host: &dyn Graph) -> bool {
        let Some(mapping) = label_mapping(self.resolver(), host.resolver()) else {
            return false;
        };

        let n = self.vertex_count();
        (0..n).all(|u| {
            (u..n).all(|v| {
                self.has_edge(u, v) == host.has_edge(mapping[u as usize], mapping[v as usize])
            })
        })
    }
}

/// Maps every vertex of `from` onto the vertex of `onto` with the same label.
/// Returns `None` if some label of `from` is missing in `onto`.
fn label_mapping(from: &VertexResolver, onto: &VertexResolver) -> Option<Vec<Node>> {
    from.labels()
        .iter()
        .map(|label| onto.position(label))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::*;

    fn host() -> DenseGraph {
        let mut graph = DenseGraph::with_labels(["A", "B", "C", "D", "E"]).unwrap();
        graph
            .add_edges([("A", "B"), ("A", "C"), ("C", "D"), ("C", "E"), ("B", "D")])
            .unwrap();
        graph
    }

    #[test]
    fn subgraph_on_fewer_vertices() {
        let host = host();

        let mut graph = SparseGraph::with_labels(["A", "B", "C"]).unwrap();
        graph.add_edge("A".into(), "B".into()).unwrap();

        assert!(graph.is_subgraph(&host));
        assert!(!graph.is_spanning_subgraph(&host));
        // host also connects A and C
        assert!(!graph.is_induced_subgraph(&host));

        graph.add_edge("C".into(), "A".into()).unwrap();
        assert!(graph.is_induced_subgraph(&host));

        graph.add_edge("B".into(), "C".into()).unwrap();
        assert!(!graph.is_subgraph(&host));
        assert!(!graph.is_induced_subgraph(&host));
    }

    #[test]
    fn vertices_are_matched_by_label() {
        let host = host();

        // indices differ from the host, labels do not
        let mut graph = DenseGraph::with_labels(["D", "C", "B"]).unwrap();
        graph.add_edges([("C", "D"), ("B", "D")]).unwrap();
        assert!(graph.is_subgraph(&host));
        assert!(graph.is_induced_subgraph(&host));

        let unknown = SparseGraph::with_labels(["A", "Z"]).unwrap();
        assert!(!unknown.is_subgraph(&host));
        assert!(!unknown.is_spanning_subgraph(&host));
        assert!(!unknown.is_induced_subgraph(&host));
    }

    #[test]
    fn spanning_subgraphs() {
        let host = host();

        let mut graph = SparseGraph::with_labels(["E", "D", "C", "B", "A"]).unwrap();
        assert!(graph.is_spanning_subgraph(&host));

        graph.add_edges([("A", "B"), ("B", "D")]).unwrap();
        assert!(graph.is_spanning_subgraph(&host));
        assert!(!graph.is_induced_subgraph(&host));

        // the edgeless graph on fewer vertices is never spanning
        let smaller = DenseGraph::with_labels(["A", "B", "C", "D"]).unwrap();
        assert!(smaller.is_subgraph(&host));
        assert!(!smaller.is_spanning_subgraph(&host));

        // nor is a graph with more vertices than the host
        assert!(!host.is_spanning_subgraph(&smaller));
        assert!(!host.is_subgraph(&smaller));
    }

    #[test]
    fn multigraph_candidates() {
        let host = host();

        let mut graph = SparseGraph::with_labels(["A", "B"]).unwrap();
        graph.add_edges([("A", "B"), ("B", "A")]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_subgraph(&host));
        assert!(graph.is_induced_subgraph(&host));

        graph.add_edge("A".into(), "A".into()).unwrap();
        assert!(!graph.is_subgraph(&host));
        assert!(!graph.is_induced_subgraph(&host));
    }

    #[test]
    fn trait_objects() {
        let graphs: Vec<Box<dyn Graph>> = vec![
            Box::new(DenseGraph::new(3).unwrap()),
            Box::new(SparseGraph::new(3).unwrap()),
        ];

        for graph in &graphs {
            for other in &graphs {
                assert!(graph.is_spanning_subgraph(other.as_ref()));
                assert!(graph.is_induced_subgraph(other.as_ref()));
            }
            assert_eq!(graph.degree_sequence(), vec![0, 0, 0]);
        }
    }
}
