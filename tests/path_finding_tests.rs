use pathgraph::{
    Dijkstra, DirectedGraph, Edge, Error, Graph, MutableGraph, SelectionPolicy,
    ShortestPathAlgorithm,
};
use rand::Rng;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Five stations connected both ways, cheapest A -> C route goes A, D, E, C
fn small_graph() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::new(["A", "B", "C", "D", "E"]);
    assert_eq!(graph.add_edges(&"A", [Edge::new("B", 6), Edge::new("D", 1)]), 2);
    assert_eq!(
        graph.add_edges(
            &"B",
            [Edge::new("A", 6), Edge::new("D", 2), Edge::new("E", 2), Edge::new("C", 5)],
        ),
        4
    );
    assert_eq!(graph.add_edges(&"C", [Edge::new("B", 5), Edge::new("E", 5)]), 2);
    assert_eq!(
        graph.add_edges(&"D", [Edge::new("A", 1), Edge::new("B", 2), Edge::new("E", 1)]),
        3
    );
    assert_eq!(
        graph.add_edges(&"E", [Edge::new("D", 1), Edge::new("B", 2), Edge::new("C", 5)]),
        3
    );
    graph
}

// Thirteen-vertex road map with a main trunk S..E and a C/L side branch
fn large_graph() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::new([
        "S", "A", "B", "D", "F", "H", "G", "C", "L", "I", "J", "K", "E",
    ]);
    graph.add_edges(&"S", [Edge::new("A", 7), Edge::new("B", 2), Edge::new("C", 3)]);
    graph.add_edges(&"A", [Edge::new("S", 7), Edge::new("B", 3), Edge::new("D", 4)]);
    graph.add_edges(
        &"B",
        [Edge::new("S", 2), Edge::new("A", 3), Edge::new("D", 4), Edge::new("H", 1)],
    );
    graph.add_edges(&"D", [Edge::new("A", 4), Edge::new("B", 4), Edge::new("F", 5)]);
    graph.add_edges(&"F", [Edge::new("D", 5), Edge::new("H", 3)]);
    graph.add_edges(&"H", [Edge::new("B", 1), Edge::new("F", 3), Edge::new("G", 2)]);
    graph.add_edges(&"G", [Edge::new("H", 2), Edge::new("E", 2)]);
    graph.add_edges(&"C", [Edge::new("S", 3), Edge::new("L", 2)]);
    graph.add_edges(&"L", [Edge::new("C", 2), Edge::new("I", 4), Edge::new("J", 4)]);
    graph.add_edges(&"I", [Edge::new("L", 4), Edge::new("J", 6), Edge::new("K", 4)]);
    graph.add_edges(&"J", [Edge::new("L", 4), Edge::new("I", 6), Edge::new("K", 4)]);
    graph.add_edges(&"K", [Edge::new("J", 4), Edge::new("I", 4), Edge::new("E", 5)]);
    graph.add_edges(&"E", [Edge::new("G", 2), Edge::new("K", 5)]);
    graph
}

#[test]
fn test_small_graph_distances() {
    init_logs();
    let graph = small_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(tree.distance(&"A"), Some(0));
    assert_eq!(tree.distance(&"D"), Some(1));
    assert_eq!(tree.distance(&"E"), Some(2));
    assert_eq!(tree.distance(&"B"), Some(3));
    assert_eq!(tree.distance(&"C"), Some(7));
    assert_eq!(tree.reached_count(), 5);
}

#[test]
fn test_small_graph_route_to_c() {
    let graph = small_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(tree.path_to(&"C"), Some(vec!["A", "D", "E", "C"]));
    assert_eq!(tree.previous(&"C"), Some(&"E"));
    assert_eq!(tree.previous(&"A"), None, "the source has no predecessor");
}

#[test]
fn test_small_graph_policies_agree() {
    // On this topology the narrowed frontier happens to finalize in the same
    // order as the global minimum, so every distance matches, including the
    // relaxed-but-never-finalized B.
    let graph = small_graph();
    let standard = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
    let narrowed = Dijkstra::with_policy(SelectionPolicy::LastRelaxed)
        .compute_shortest_paths(&graph, &"A")
        .unwrap();

    for vertex in ["A", "B", "C", "D", "E"] {
        assert_eq!(
            narrowed.distance(&vertex),
            standard.distance(&vertex),
            "distance to {} should match",
            vertex
        );
    }
    assert_eq!(narrowed.path_to(&"C"), Some(vec!["A", "D", "E", "C"]));
}

#[test]
fn test_algorithm_names_follow_policy() {
    let standard = Dijkstra::new();
    let narrowed = Dijkstra::with_policy(SelectionPolicy::LastRelaxed);

    assert_eq!(standard.policy(), SelectionPolicy::GlobalMinimum);
    assert_eq!(narrowed.policy(), SelectionPolicy::LastRelaxed);
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<&str, u64, DirectedGraph<&str>>>::name(&standard),
        "Dijkstra"
    );
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<&str, u64, DirectedGraph<&str>>>::name(&narrowed),
        "Dijkstra (last-relaxed)"
    );
}

#[test]
fn test_path_to_source_is_single_vertex() {
    let graph = small_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(tree.path_to(&"A"), Some(vec!["A"]));
    assert_eq!(tree.distance(&"A"), Some(0));
}

#[test]
fn test_unreachable_vertex_has_no_record() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new(["A", "B", "Z"]);
    graph.add_edge(&"A", &"B", 1);

    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert!(!tree.reached(&"Z"));
    assert_eq!(tree.distance(&"Z"), None);
    assert_eq!(tree.path_to(&"Z"), None);
    assert_eq!(tree.reached_count(), 2);
}

#[test]
fn test_unknown_source_is_an_error() {
    let graph = small_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"Q");
    assert!(matches!(result, Err(Error::SourceNotFound)));
}

#[test]
fn test_empty_graph_has_no_source() {
    let graph: DirectedGraph<&str> = DirectedGraph::new([]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A");
    assert!(matches!(result, Err(Error::SourceNotFound)));
}

#[test]
fn test_infinite_edges_never_shorten() {
    // A placeholder edge at W::max_value() saturates during relaxation, so
    // it gives reachability to nothing.
    let mut graph: DirectedGraph<&str> = DirectedGraph::new(["A", "B", "C"]);
    assert!(graph.insert_edge(&"A", Edge::infinite("B")));
    assert!(graph.add_edge(&"A", &"C", 5));

    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert!(graph.has_edge(&"A", &"B"));
    assert_eq!(tree.distance(&"B"), None);
    assert_eq!(tree.distance(&"C"), Some(5));
}

#[test]
fn test_large_graph_standard_route() {
    init_logs();
    let graph = large_graph();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"S").unwrap();

    assert_eq!(tree.distance(&"E"), Some(7));
    assert_eq!(tree.path_to(&"E"), Some(vec!["S", "B", "H", "G", "E"]));
    assert_eq!(tree.distance(&"L"), Some(5));
    assert_eq!(tree.distance(&"I"), Some(9));
    assert_eq!(tree.distance(&"J"), Some(9));
    assert_eq!(tree.distance(&"K"), Some(12));
    assert_eq!(tree.reached_count(), 13);
}

#[test]
fn test_large_graph_narrowed_frontier_detours() {
    // The headline S -> E answer survives the narrowed frontier, but the
    // side branch is only reached the long way around through K, and the
    // run stops with relaxed vertices still pending.
    let graph = large_graph();
    let tree = Dijkstra::with_policy(SelectionPolicy::LastRelaxed)
        .compute_shortest_paths(&graph, &"S")
        .unwrap();

    assert_eq!(tree.distance(&"E"), Some(7));
    assert_eq!(tree.path_to(&"E"), Some(vec!["S", "B", "H", "G", "E"]));

    assert_eq!(tree.distance(&"L"), Some(20));
    assert_eq!(tree.distance(&"I"), Some(16));
    assert_eq!(tree.distance(&"J"), Some(16));
    assert_eq!(tree.distance(&"K"), Some(12));
}

#[test]
fn test_policies_diverge_on_premature_finalization() {
    // D's cheapest route goes through C, but C is relaxed by the source and
    // never by B, so the narrowed frontier finalizes D at the detour price.
    let mut graph: DirectedGraph<&str> = DirectedGraph::new(["A", "B", "C", "D"]);
    graph.add_edge(&"A", &"B", 1);
    graph.add_edge(&"A", &"C", 2);
    graph.add_edge(&"B", &"D", 10);
    graph.add_edge(&"C", &"D", 1);

    let standard = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(standard.distance(&"D"), Some(3));
    assert_eq!(standard.path_to(&"D"), Some(vec!["A", "C", "D"]));

    let narrowed = Dijkstra::with_policy(SelectionPolicy::LastRelaxed)
        .compute_shortest_paths(&graph, &"A")
        .unwrap();
    assert_eq!(narrowed.distance(&"D"), Some(11));
    assert_eq!(narrowed.path_to(&"D"), Some(vec!["A", "B", "D"]));
    assert_eq!(narrowed.distance(&"C"), Some(2), "relaxed but never finalized");
}

#[test]
fn test_narrow_weight_type() {
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new(["A", "B", "C"]);
    graph.add_edge(&"A", &"B", 2);
    graph.add_edge(&"B", &"C", 2);

    let tree = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(tree.distance(&"C"), Some(4u32));
}

#[test]
fn test_random_graphs_satisfy_relaxation_invariant() {
    init_logs();
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let n = rng.gen_range(2u32..30);
        let mut graph: DirectedGraph<u32> = DirectedGraph::new(0..n);
        for _ in 0..rng.gen_range(0..n * 3) {
            let from = rng.gen_range(0..n);
            let to = rng.gen_range(0..n);
            graph.add_edge(&from, &to, rng.gen_range(0..100u64));
        }

        let tree = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
        assert_eq!(tree.distance(&0), Some(0));

        // No edge out of a reached vertex may undercut a finalized distance
        for from in graph.vertices() {
            let from_distance = match tree.distance(from) {
                Some(distance) => distance,
                None => continue,
            };
            for (to, weight) in graph.outgoing_edges(from) {
                let to_distance = tree
                    .distance(to)
                    .expect("neighbor of a reached vertex must be reached");
                assert!(to_distance <= from_distance + weight);
            }
        }

        // Every reached vertex reconstructs a connected path whose edge
        // weights sum to its distance
        for target in graph.vertices() {
            if !tree.reached(target) {
                continue;
            }
            let path = tree.path_to(target).expect("reached vertex must have a path");
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(target));

            let mut total = 0u64;
            for leg in path.windows(2) {
                total += graph
                    .edge_weight(&leg[0], &leg[1])
                    .expect("path must follow existing edges");
            }
            assert_eq!(tree.distance(target), Some(total));
        }
    }
}
