/*!
# Vertex Resolution

Every vertex carries a unique *label* and a positional *index* assigned in construction order.
Callers may address a vertex by either form through [`VertexRef`]; the [`VertexResolver`] maps both
onto the same canonical index and rejects anything that does not name a vertex of the graph.

```
use dualgraph::prelude::*;

let resolver = VertexResolver::with_labels(["A", "B", "C"]).unwrap();
assert_eq!(resolver.resolve(&"A".into()), Ok(0));
assert_eq!(resolver.resolve(&VertexRef::Index(0)), Ok(0));
assert!(resolver.resolve(&"Z".into()).is_err());
```
*/

use std::fmt::Display;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{
    error::{ConstructionError, GraphError, Result},
    node::*,
};

/// A reference to a vertex, either by label or by positional index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VertexRef {
    Label(String),
    Index(Node),
}

impl Display for VertexRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexRef::Label(label) => write!(f, "{label}"),
            VertexRef::Index(idx) => write!(f, "#{idx}"),
        }
    }
}

impl From<&str> for VertexRef {
    fn from(value: &str) -> Self {
        VertexRef::Label(value.to_string())
    }
}

impl From<String> for VertexRef {
    fn from(value: String) -> Self {
        VertexRef::Label(value)
    }
}

impl From<&String> for VertexRef {
    fn from(value: &String) -> Self {
        VertexRef::Label(value.clone())
    }
}

impl From<Node> for VertexRef {
    fn from(value: Node) -> Self {
        VertexRef::Index(value)
    }
}

/// The fixed vertex set of a graph: labels in index order plus a reverse lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexResolver {
    labels: Vec<String>,
    positions: FxHashMap<String, Node>,
}

impl VertexResolver {
    /// Creates `n` vertices labelled `"0"` to `"n - 1"`
    pub fn with_count(n: usize) -> std::result::Result<Self, ConstructionError> {
        if n > MAX_NODES {
            return Err(ConstructionError::TooManyVertices(n));
        }
        Self::with_labels((0..n).map(|u| u.to_string()))
    }

    /// Creates one vertex per label, indexed in the order given.
    /// Labels must be unique and there must be at least one.
    pub fn with_labels<I, S>(labels: I) -> std::result::Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect_vec();
        if labels.is_empty() {
            return Err(ConstructionError::NoVertices);
        }
        if labels.len() > MAX_NODES {
            return Err(ConstructionError::TooManyVertices(labels.len()));
        }

        let mut positions =
            FxHashMap::with_capacity_and_hasher(labels.len(), Default::default());
        for (idx, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), idx as Node).is_some() {
                return Err(ConstructionError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels, positions })
    }

    /// Returns the number of vertices
    pub fn len(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Always *false*: a resolver holds at least one vertex
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Maps a reference onto its canonical index
    pub fn resolve(&self, vertex: &VertexRef) -> Result<Node> {
        let idx = match vertex {
            VertexRef::Label(label) => self.position(label),
            VertexRef::Index(idx) => (*idx < self.len()).then_some(*idx),
        };
        idx.ok_or_else(|| GraphError::InvalidVertex(vertex.clone()))
    }

    /// Resolves both endpoints of an edge. Fails if either one is invalid.
    pub fn resolve_pair(&self, u: &VertexRef, v: &VertexRef) -> Result<(Node, Node)> {
        Ok((self.resolve(u)?, self.resolve(v)?))
    }

    /// Returns the index of a label if present
    pub fn position(&self, label: &str) -> Option<Node> {
        self.positions.get(label).copied()
    }

    /// Returns *true* if a vertex carries this label
    pub fn contains_label(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Returns the label of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    /// All labels in index order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterates over `(index, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Node, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (idx as Node, label.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn auto_labels() {
        let resolver = VertexResolver::with_count(4).unwrap();
        assert_eq!(resolver.len(), 4);
        assert_eq!(resolver.labels(), &["0", "1", "2", "3"]);
        assert_eq!(resolver.resolve(&"2".into()), Ok(2));
        assert_eq!(resolver.resolve(&VertexRef::Index(3)), Ok(3));
    }

    #[test]
    fn label_and_index_agree() {
        let resolver = VertexResolver::with_labels(["A", "B", "C"]).unwrap();
        assert_eq!(resolver.len(), 3);
        for (idx, label) in resolver.iter() {
            assert_eq!(resolver.resolve(&label.into()), Ok(idx));
            assert_eq!(resolver.resolve(&VertexRef::Index(idx)), Ok(idx));
            assert_eq!(resolver.label_of(idx), label);
        }
    }

    #[test]
    fn invalid_references() {
        let resolver = VertexResolver::with_labels(["A", "B"]).unwrap();
        assert_eq!(
            resolver.resolve(&VertexRef::Index(2)),
            Err(GraphError::InvalidVertex(VertexRef::Index(2)))
        );
        assert_eq!(
            resolver.resolve(&"C".into()),
            Err(GraphError::InvalidVertex("C".into()))
        );
        // index-like labels only resolve if such a label exists
        assert!(resolver.resolve(&"0".into()).is_err());
        assert!(resolver.resolve_pair(&"A".into(), &"C".into()).is_err());
        assert!(resolver.resolve_pair(&"C".into(), &"A".into()).is_err());
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            VertexResolver::with_count(0),
            Err(ConstructionError::NoVertices)
        );
        assert_eq!(
            VertexResolver::with_labels(Vec::<String>::new()),
            Err(ConstructionError::NoVertices)
        );
        assert_eq!(
            VertexResolver::with_labels(["A", "B", "A"]),
            Err(ConstructionError::DuplicateLabel("A".to_string()))
        );

        // rejected before any label is allocated
        if let Some(n) = MAX_NODES.checked_add(1) {
            assert_eq!(
                VertexResolver::with_count(n),
                Err(ConstructionError::TooManyVertices(n))
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(VertexRef::from("A").to_string(), "A");
        assert_eq!(VertexRef::from(7 as Node).to_string(), "#7");
    }
}
