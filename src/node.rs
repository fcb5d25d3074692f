/*!
# Node Representation

Every vertex has a positional index `0..n` fixed at construction.
We choose `Node = u32` as graphs held in these containers stay far below `2^32` vertices,
which keeps neighbor lists and edges compact compared to `usize`.
*/

/// Positional index of a vertex, `0` to `n - 1`
pub type Node = u32;

/// Node-Value that is never assigned to a vertex
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Upper bound on the number of vertices a graph can be constructed with
pub const MAX_NODES: usize = INVALID_NODE as usize;
