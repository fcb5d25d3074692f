/*!
`dualgraph` provides small in-memory containers for **undirected** graphs over a vertex set that is
fixed at construction, with two interchangeable storage strategies behind one contract.

# Representation

Every vertex has a unique text *label* and a positional *index* `0..n` (a `u32`, see [`node`]).
Vertices may be addressed by either form through [`VertexRef`](resolver::VertexRef); both resolve to
the same canonical index. Without explicit labels, vertex `i` is labelled `"i"`.

### Available Representations

See the [`repr`] module:

- [`DenseGraph`](crate::repr::DenseGraph): symmetric `0/1` adjacency matrix, simple graphs only
- [`SparseGraph`](crate::repr::SparseGraph): ordered neighbor lists, duplicate edges and self-loops allowed

Both implement [`Graph`](crate::ops::Graph), which covers vertex/edge counting, degree sequences,
edge insertion/removal, rendering and the subgraph / spanning-subgraph / induced-subgraph tests.
Pick a representation with [`GraphBuilder`](crate::builder::GraphBuilder) to keep call sites
independent of it.

# Errors

Construction fails with [`ConstructionError`](crate::error::ConstructionError) if no vertices are
given. Edge operations never panic on bad input: unknown labels or out-of-range indices yield
[`GraphError::InvalidVertex`](crate::error::GraphError::InvalidVertex) and leave the graph untouched,
while removing a missing edge reports [`Removal::NotFound`](crate::ops::Removal::NotFound).

# Usage

```
use dualgraph::prelude::*;

let mut graph = DenseGraph::with_labels(["A", "B", "C", "D", "E"]).unwrap();
graph
    .add_edges([("A", "B"), ("A", "C"), ("C", "D"), ("C", "E"), ("B", "D")])
    .unwrap();

assert_eq!(graph.edge_count(), 5);
assert_eq!(graph.degree_sequence(), vec![1, 2, 2, 2, 3]);
assert_eq!(graph.remove_edge("A".into(), VertexRef::Index(1)), Ok(Removal::Removed));
```

Graph instances carry no internal synchronization; share them across threads behind a lock.
Mutations emit `tracing` events at `debug` level and failed vertex lookups at `warn` level.
*/

pub mod builder;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub mod resolver;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `dualgraph::prelude` includes nodes and edges, the graph contract, both representations,
/// vertex resolution, errors and the builder.
pub mod prelude {
    pub use super::{
        builder::*,
        edge::*,
        error::{ConstructionError, GraphError, ParseRepresentationError},
        node::*,
        ops::*,
        repr::*,
        resolver::*,
    };
}
