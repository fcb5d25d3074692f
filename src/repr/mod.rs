/*!
# Graph Representations

Two interchangeable storage strategies implement the [`Graph`] contract:

- [`DenseGraph`]: a symmetric `0/1` adjacency matrix. `O(n^2)` space, `O(1)` edge updates and
  queries. Simple graphs only: re-adding an edge is a no-op and self-loops are rejected.
- [`SparseGraph`]: one ordered neighbor list per vertex. `O(n + m)` space, `O(deg)` edge updates.
  Duplicate edges and self-loops are stored and counted.

Both are built over a [`VertexResolver`] and address vertices by label or index alike.
*/

use crate::{
    error::{ConstructionError, GraphError, Result},
    ops::*,
    resolver::*,
    testing::test_graph_contract,
    *,
};

mod dense;
mod neighborhood;
mod sparse;

pub use dense::*;
pub use neighborhood::*;
pub use sparse::*;
