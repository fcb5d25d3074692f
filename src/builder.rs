/*!
# Graph Builder

Picks a representation at run time and hands back a `Box<dyn Graph>`, so that the rest of a
program only talks to the [`Graph`] contract.

```
use dualgraph::prelude::*;

let mut graph = GraphBuilder::new()
    .labels(["A", "B", "C"])
    .representation("sparse".parse().unwrap())
    .build()
    .unwrap();

graph.add_edge("A".into(), "B".into()).unwrap();
assert_eq!(graph.edge_count(), 1);
```
*/

use std::{fmt::Display, str::FromStr};

use crate::{
    error::{ConstructionError, ParseRepresentationError},
    ops::Graph,
    repr::*,
    resolver::VertexResolver,
};

/// Storage strategy of a graph
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Adjacency matrix, see [`DenseGraph`]
    #[default]
    Dense,
    /// Adjacency lists, see [`SparseGraph`]
    Sparse,
}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dense" | "matrix" => Ok(Representation::Dense),
            "sparse" | "list" => Ok(Representation::Sparse),
            _ => Err(ParseRepresentationError(s.to_string())),
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}

/// Configures the vertex set and representation of a new graph.
///
/// If both labels and a vertex count are given, the labels win.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertex_count: Option<usize>,
    labels: Option<Vec<String>>,
    representation: Representation,
}

impl GraphBuilder {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `n` vertices labelled `"0"` to `"n - 1"`
    pub fn vertex_count(mut self, n: usize) -> Self {
        self.vertex_count = Some(n);
        self
    }

    /// Use one vertex per label
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the storage strategy ([`Representation::Dense`] by default)
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    fn resolver(&self) -> Result<VertexResolver, ConstructionError> {
        match (&self.labels, self.vertex_count) {
            (Some(labels), _) if !labels.is_empty() => {
                VertexResolver::with_labels(labels.iter().cloned())
            }
            (_, Some(n)) if n > 0 => VertexResolver::with_count(n),
            _ => Err(ConstructionError::NoVertices),
        }
    }

    /// Builds a graph of the configured representation
    pub fn build(&self) -> Result<Box<dyn Graph>, ConstructionError> {
        Ok(match self.representation {
            Representation::Dense => Box::new(self.build_dense()?),
            Representation::Sparse => Box::new(self.build_sparse()?),
        })
    }

    /// Builds a [`DenseGraph`] regardless of the configured representation
    pub fn build_dense(&self) -> Result<DenseGraph, ConstructionError> {
        Ok(DenseGraph::from_resolver(self.resolver()?))
    }

    /// Builds a [`SparseGraph`] regardless of the configured representation
    pub fn build_sparse(&self) -> Result<SparseGraph, ConstructionError> {
        Ok(SparseGraph::from_resolver(self.resolver()?))
    }
}
