use dualgraph::prelude::*;
use proptest::prelude::*;

/// A vertex count together with index pairs that are valid for it
fn graph_input(max_n: NumNodes, max_m: usize) -> impl Strategy<Value = (NumNodes, Vec<(Node, Node)>)> {
    (2..=max_n).prop_flat_map(move |n| (Just(n), prop::collection::vec((0..n, 0..n), 0..max_m)))
}

fn dense_from(n: NumNodes, pairs: &[(Node, Node)]) -> DenseGraph {
    let mut graph = DenseGraph::new(n as usize).unwrap();
    for &(u, v) in pairs.iter().filter(|(u, v)| u != v) {
        graph.add_edge(VertexRef::Index(u), VertexRef::Index(v)).unwrap();
    }
    graph
}

fn sparse_from(n: NumNodes, pairs: &[(Node, Node)]) -> SparseGraph {
    let mut graph = SparseGraph::new(n as usize).unwrap();
    graph.add_edges(pairs.iter().copied()).unwrap();
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dense_add_is_idempotent((n, pairs) in graph_input(12, 40)) {
        let mut graph = dense_from(n, &pairs);

        for &(u, v) in pairs.iter().filter(|(u, v)| u != v) {
            let before = graph.clone();
            prop_assert_eq!(
                graph.add_edge(VertexRef::Index(v), VertexRef::Index(u)),
                Ok(Insertion::AlreadyPresent)
            );
            prop_assert_eq!(&graph, &before);
        }

        for u in 0..n {
            prop_assert!(!graph.has_edge(u, u));
            for v in 0..n {
                prop_assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
            }
        }
    }

    #[test]
    fn dense_removal_decrements_by_one((n, pairs) in graph_input(12, 40)) {
        let mut graph = dense_from(n, &pairs);

        for Edge(u, v) in graph.edges() {
            let m = graph.edge_count();
            prop_assert_eq!(
                graph.remove_edge(VertexRef::Index(u), VertexRef::Index(v)),
                Ok(Removal::Removed)
            );
            prop_assert_eq!(graph.edge_count(), m - 1);
        }
        prop_assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn degree_sequences_are_sorted((n, pairs) in graph_input(12, 40)) {
        let dense = dense_from(n, &pairs);
        let sparse = sparse_from(n, &pairs);

        for graph in [&dense as &dyn Graph, &sparse] {
            let degrees = graph.degree_sequence();
            prop_assert_eq!(degrees.len(), n as usize);
            prop_assert!(degrees.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn sparse_degrees_sum_to_twice_the_edges((n, pairs) in graph_input(12, 40)) {
        let graph = sparse_from(n, &pairs);

        prop_assert_eq!(graph.edge_count() as usize, pairs.len());
        let total: NumNodes = graph.degree_sequence().iter().sum();
        prop_assert_eq!(total, 2 * graph.edge_count());
    }

    #[test]
    fn dense_and_sparse_agree_on_presence((n, pairs) in graph_input(12, 40)) {
        let dense = dense_from(n, &pairs);
        let sparse = sparse_from(n, &pairs);

        // dense graphs drop loops and copies, so only loop-free presence is comparable
        let loop_free = sparse.edges().into_iter().filter(|e| !e.is_loop()).collect::<Vec<_>>();
        prop_assert_eq!(dense.edges(), loop_free);
        prop_assert!(dense.is_spanning_subgraph(&sparse));
    }

    #[test]
    fn spanning_requires_equal_vertex_counts(
        (n, pairs) in graph_input(10, 20),
        extra in 1usize..5
    ) {
        let graph = dense_from(n, &pairs);
        let larger = SparseGraph::new(n as usize + extra).unwrap();
        let smaller = DenseGraph::new(1).unwrap();

        prop_assert!(!graph.is_spanning_subgraph(&larger));
        prop_assert!(!smaller.is_spanning_subgraph(&graph));
        prop_assert!(!graph.is_spanning_subgraph(&smaller));
    }

    #[test]
    fn out_of_range_indices_are_rejected(n in 1usize..20, offset in 0u32..100) {
        let mut dense = DenseGraph::new(n).unwrap();
        let mut sparse = SparseGraph::new(n).unwrap();
        let bad = VertexRef::Index(n as Node + offset);

        for graph in [&mut dense as &mut dyn Graph, &mut sparse] {
            prop_assert_eq!(
                graph.add_edge(bad.clone(), VertexRef::Index(0)),
                Err(GraphError::InvalidVertex(bad.clone()))
            );
            prop_assert_eq!(
                graph.remove_edge(VertexRef::Index(0), bad.clone()),
                Err(GraphError::InvalidVertex(bad.clone()))
            );
            prop_assert_eq!(graph.edge_count(), 0);
        }
    }
}
