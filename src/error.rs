//! Error types for graph construction and edge editing.

use thiserror::Error;

use crate::resolver::VertexRef;

/// Result type for edge operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// A graph could not be constructed from the supplied vertex description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Neither a positive vertex count nor a non-empty label list was supplied.
    #[error("a graph needs a positive vertex count or a non-empty list of labels")]
    NoVertices,

    /// The same label was supplied more than once.
    #[error("duplicate vertex label `{0}`")]
    DuplicateLabel(String),

    /// More vertices were requested than a `Node` can index.
    #[error("too many vertices: {0}")]
    TooManyVertices(usize),
}

/// Failure of an edge operation on an existing graph.
///
/// None of these leave the graph modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The reference names no vertex of this graph.
    #[error("invalid vertex: {0}")]
    InvalidVertex(VertexRef),

    /// The representation has no storage for an edge from a vertex to itself.
    #[error("self-loop at `{0}` is not supported by this representation")]
    SelfLoop(String),
}

/// A representation name could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown representation `{0}`, expected `dense` or `sparse`")]
pub struct ParseRepresentationError(pub String);
