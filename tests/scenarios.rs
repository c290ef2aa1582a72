use pathkernel::{
    AdjacencyGraph, Distance, GraphError, SelectionStrategy, SequenceKind, WeightMatrix, classify,
    is_path, is_trail, is_walk, shortest_paths, shortest_paths_with, shortest_unweighted_path,
    tracing_support::init_tracing,
};

/// Seven vertices, 1-indexed in the edge list, 0-indexed in the matrix.
fn seven_vertex_matrix() -> WeightMatrix<u32> {
    let edges = [
        (1, 2, 1),
        (1, 3, 7),
        (1, 4, 6),
        (2, 3, 9),
        (2, 6, 3),
        (3, 7, 1),
        (4, 5, 2),
        (6, 7, 3),
    ];
    WeightMatrix::from_edges(7, edges.map(|(u, v, w)| (u - 1, v - 1, w))).unwrap()
}

fn letter_graph() -> AdjacencyGraph<char> {
    AdjacencyGraph::from_edges([
        ('A', 'B'),
        ('B', 'C'),
        ('C', 'D'),
        ('A', 'D'),
        ('B', 'D'),
        ('C', 'E'),
    ])
}

#[test]
fn seven_vertex_distances() {
    init_tracing();
    let paths = shortest_paths(&seven_vertex_matrix(), 0).unwrap();
    let distances: Vec<_> = paths
        .distances()
        .iter()
        .map(|d| d.finite().unwrap())
        .collect();
    assert_eq!(distances, vec![0, 1, 7, 6, 8, 4, 7]);
    // Vertex 7 is reached through 6 (1 + 3 + 3); the route through 3 costs 8.
    assert_eq!(paths.path_to(6), Some(vec![0, 1, 5, 6]));
    assert_eq!(paths.path_to(2), Some(vec![0, 2]));
}

#[test]
fn seven_vertex_asymmetric_rows() {
    // The 6-7 edge carries weight 3 in one direction and 5 in the other;
    // relaxation reads the row of the vertex being settled.
    let matrix = WeightMatrix::from_rows(vec![
        vec![0, 1, 7, 6, 0, 0, 0],
        vec![1, 0, 9, 0, 0, 3, 0],
        vec![7, 9, 0, 0, 0, 0, 1],
        vec![6, 0, 0, 0, 2, 0, 0],
        vec![0, 0, 0, 2, 0, 0, 0],
        vec![0, 3, 0, 0, 0, 0, 3],
        vec![0, 0, 1, 0, 0, 5, 0],
    ])
    .unwrap();
    for strategy in [SelectionStrategy::Dense, SelectionStrategy::Heap] {
        let paths = shortest_paths_with(&matrix, 0, strategy).unwrap();
        assert_eq!(paths.distance(6), Distance::Finite(7));
        assert_eq!(paths.predecessor(6), Some(5));
    }
}

#[test]
fn unreachable_vertex_is_not_an_error() {
    let matrix = WeightMatrix::from_edges(3, [(0, 1, 4)]).unwrap();
    let paths = shortest_paths(&matrix, 1).unwrap();
    assert_eq!(paths.distance(0), Distance::Finite(4));
    assert_eq!(paths.distance(2), Distance::Infinite);
    assert_eq!(paths.predecessor(2), None);
}

#[test]
fn invalid_source_fails_fast() {
    assert_eq!(
        shortest_paths(&seven_vertex_matrix(), 10).unwrap_err(),
        GraphError::IndexOutOfRange { index: 10, len: 7 }
    );
}

#[test]
fn negative_weight_is_rejected() {
    assert!(matches!(
        WeightMatrix::from_edges(2, [(0, 1, -3)]),
        Err(GraphError::InvalidWeight { from: 0, to: 1, .. })
    ));
}

#[test]
fn walk_that_is_not_a_trail() {
    let graph = letter_graph();
    let seq = ['A', 'B', 'D', 'C', 'D'];
    assert!(is_walk(&graph, &seq));
    assert!(!is_trail(&graph, &seq));
    assert!(!is_path(&graph, &seq));
}

#[test]
fn trail_that_is_also_a_path() {
    let graph = letter_graph();
    let seq = ['A', 'B', 'C', 'D'];
    assert!(is_walk(&graph, &seq));
    assert!(is_trail(&graph, &seq));
    assert!(is_path(&graph, &seq));
    assert_eq!(classify(&graph, &seq), Some(SequenceKind::Path));
}

#[test]
fn bfs_a_to_e_has_three_edges() {
    init_tracing();
    let graph = letter_graph();
    let path = shortest_unweighted_path(&graph, &'A', &'E').unwrap().unwrap();
    assert_eq!(path.len() - 1, 3);
    assert_eq!(path.first(), Some(&'A'));
    assert_eq!(path.last(), Some(&'E'));
    assert!(is_path(&graph, &path));
}

#[test]
fn classification_does_not_depend_on_earlier_calls() {
    let graph = letter_graph();
    let seq = ['C', 'E', 'C'];
    let first = classify(&graph, &seq);
    classify(&graph, &['A', 'B', 'C', 'D']);
    assert_eq!(classify(&graph, &seq), first);
    assert_eq!(first, Some(SequenceKind::Walk));
}
