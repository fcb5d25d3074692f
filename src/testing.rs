/// Every representation has to satisfy the [`Graph`](crate::ops::Graph) contract.
/// `$multigraph` is *true* if repeated insertions of an edge are stored as separate copies.
macro_rules! test_graph_contract {
    ($env:ident, $graph:ident, $multigraph:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random non-loop edges for nodes `0..n`, possibly with repetitions
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = (u + rng.random_range(1..n)) % n;
                        Edge(u, v)
                    })
                    .collect_vec()
            }

            /// Refers to `u` by label or by index, whichever `rng` picks
            fn vertex_ref<R: Rng>(rng: &mut R, graph: &$graph, u: Node) -> VertexRef {
                if rng.random_bool(0.5) {
                    VertexRef::Index(u)
                } else {
                    graph.resolver().label_of(u).into()
                }
            }

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n).unwrap();

                    assert_eq!(graph.vertex_count(), n as NumNodes);
                    assert_eq!(graph.edge_count(), 0);
                    assert_eq!(graph.degree_sequence(), vec![0; n]);
                    assert!(graph.edges().is_empty());
                }

                assert_eq!(<$graph>::new(0), Err(ConstructionError::NoVertices));
            }

            #[test]
            fn labels_and_indices_resolve_alike() {
                let mut graph = <$graph>::with_labels(["A", "B", "C"]).unwrap();
                assert_eq!(graph.vertex_count(), 3);
                assert_eq!(
                    graph.resolver().resolve(&"A".into()),
                    graph.resolver().resolve(&VertexRef::Index(0))
                );

                graph.add_edge("A".into(), VertexRef::Index(2)).unwrap();
                assert_eq!(graph.contains_edge(&VertexRef::Index(0), &"C".into()), Ok(true));
                assert_eq!(graph.contains_edge(&"C".into(), &"A".into()), Ok(true));
                assert_eq!(graph.contains_edge(&"B".into(), &"A".into()), Ok(false));
                assert!(graph.contains_edge(&"D".into(), &"A".into()).is_err());
            }

            #[test]
            fn add_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m in [n * 2, n * 5, n * 10] {
                        let mut graph = <$graph>::new(n as usize).unwrap();
                        let mut copies = vec![vec![0 as NumEdges; n as usize]; n as usize];

                        for Edge(u, v) in random_edges(rng, n, m) {
                            let (ru, rv) = (vertex_ref(rng, &graph, u), vertex_ref(rng, &graph, v));
                            let expected = if $multigraph || copies[u as usize][v as usize] == 0 {
                                Insertion::Inserted
                            } else {
                                Insertion::AlreadyPresent
                            };
                            assert_eq!(graph.add_edge(ru, rv), Ok(expected));

                            if expected == Insertion::Inserted {
                                copies[u as usize][v as usize] += 1;
                                copies[v as usize][u as usize] += 1;
                            }
                        }

                        let reference_edges = (0..n)
                            .flat_map(|u| (u..n).map(move |v| Edge(u, v)))
                            .filter(|&Edge(u, v)| copies[u as usize][v as usize] > 0)
                            .collect_vec();
                        let total_copies: NumEdges = reference_edges
                            .iter()
                            .map(|&Edge(u, v)| copies[u as usize][v as usize])
                            .sum();

                        assert_eq!(graph.edge_count(), total_copies);
                        assert_eq!(graph.edges(), reference_edges);

                        let mut degrees = copies
                            .iter()
                            .map(|row| row.iter().sum::<NumEdges>())
                            .collect_vec();
                        degrees.sort_unstable();
                        assert_eq!(graph.degree_sequence(), degrees);
                        assert_eq!(graph.degree_sequence().len(), n as usize);

                        for u in 0..n {
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), copies[u as usize][v as usize] > 0);
                            }
                        }
                    }
                }
            }

            #[test]
            fn remove_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [10 as NumNodes, 20, 50] {
                    let mut graph = <$graph>::new(n as usize).unwrap();
                    for Edge(u, v) in random_edges(rng, n, n * 4) {
                        graph.add_edge(VertexRef::Index(u), VertexRef::Index(v)).unwrap();
                    }

                    let mut m = graph.edge_count();
                    for _ in 0..(n * 8) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let existed = graph.has_edge(u, v);

                        let (ru, rv) = (vertex_ref(rng, &graph, u), vertex_ref(rng, &graph, v));
                        match graph.remove_edge(ru, rv) {
                            Ok(Removal::Removed) => {
                                assert!(existed);
                                m -= 1;
                            }
                            Ok(Removal::NotFound) => assert!(!existed),
                            Err(err) => panic!("unexpected error {err}"),
                        }

                        assert_eq!(graph.edge_count(), m);
                        assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                    }

                    // drain everything that is left
                    for Edge(u, v) in graph.edges() {
                        while graph.remove_edge(VertexRef::Index(u), VertexRef::Index(v))
                            == Ok(Removal::Removed)
                        {}
                    }
                    assert_eq!(graph.edge_count(), 0);
                    assert_eq!(graph.max_degree(), 0);
                }
            }

            #[test]
            fn invalid_references() {
                for n in [1 as NumNodes, 5, 12] {
                    let mut graph = <$graph>::new(n as usize).unwrap();
                    let snapshot = graph.clone();

                    for bad in [VertexRef::Index(n), VertexRef::Index(n + 7), "x".into(), n.to_string().into()] {
                        for (u, v) in [(bad.clone(), VertexRef::Index(0)), (VertexRef::Index(0), bad.clone())] {
                            assert_eq!(
                                graph.add_edge(u.clone(), v.clone()),
                                Err(GraphError::InvalidVertex(bad.clone()))
                            );
                            assert_eq!(
                                graph.remove_edge(u, v),
                                Err(GraphError::InvalidVertex(bad.clone()))
                            );
                        }
                    }

                    assert_eq!(graph, snapshot);
                }
            }

            #[test]
            fn is_subgraph_of_itself() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                let n = 15;

                let mut graph = <$graph>::new(n as usize).unwrap();
                for Edge(u, v) in random_edges(rng, n, 30) {
                    graph.add_edge(VertexRef::Index(u), VertexRef::Index(v)).unwrap();
                }

                assert!(graph.is_subgraph(&graph));
                assert!(graph.is_spanning_subgraph(&graph));
                assert!(graph.is_induced_subgraph(&graph));
            }

            #[test]
            fn render_mentions_every_label() {
                let mut graph = <$graph>::with_labels(["alpha", "beta", "gamma"]).unwrap();
                graph.add_edge("alpha".into(), "gamma".into()).unwrap();

                let text = graph.render();
                assert_eq!(text, format!("{graph}"));
                for label in ["alpha", "beta", "gamma"] {
                    assert!(text.contains(label));
                }
            }
        }
    };
}

pub(crate) use test_graph_contract;
