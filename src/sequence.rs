//! Classifying a vertex sequence as a walk, trail or path.
//!
//! Every predicate is a pure function of the graph and the sequence.  A
//! sequence with fewer than two vertices is never a walk, so it is never a
//! trail or a path either.

use std::collections::HashSet;

use crate::adjacency::Adjacency;

/// How strictly a sequence avoids repetition.  Ordered from least to most
/// strict: every path is a trail and every trail is a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SequenceKind {
    /// Consecutive vertices are adjacent.
    Walk,
    /// A walk that uses no edge twice, in either direction.
    Trail,
    /// A walk that visits no vertex twice.
    Path,
}

/// Iterates over the consecutive pairs of `seq`, i.e. the edges a walk
/// along it would traverse.
pub fn edge_pairs<V>(seq: &[V]) -> impl Iterator<Item = (&V, &V)> + '_ {
    seq.windows(2).map(|pair| (&pair[0], &pair[1]))
}

/// Whether `seq` has at least two vertices and every consecutive pair is
/// joined by an edge.
pub fn is_walk<G: Adjacency>(graph: &G, seq: &[G::Vertex]) -> bool {
    seq.len() >= 2 && edge_pairs(seq).all(|(u, v)| graph.has_edge(u, v))
}

/// Whether `seq` is a walk that never repeats an edge.  Edges are
/// unordered, so `u, v, u` repeats `{u, v}`.
pub fn is_trail<G: Adjacency>(graph: &G, seq: &[G::Vertex]) -> bool {
    if !is_walk(graph, seq) {
        return false;
    }
    let mut used = HashSet::with_capacity(seq.len());
    edge_pairs(seq).all(|(u, v)| !used.contains(&(v, u)) && used.insert((u, v)))
}

/// Whether `seq` is a walk that never repeats a vertex.
pub fn is_path<G: Adjacency>(graph: &G, seq: &[G::Vertex]) -> bool {
    is_walk(graph, seq) && seq.iter().collect::<HashSet<_>>().len() == seq.len()
}

/// The strictest kind `seq` satisfies, or `None` if it is not a walk.
pub fn classify<G: Adjacency>(graph: &G, seq: &[G::Vertex]) -> Option<SequenceKind> {
    if is_path(graph, seq) {
        Some(SequenceKind::Path)
    } else if is_trail(graph, seq) {
        Some(SequenceKind::Trail)
    } else if is_walk(graph, seq) {
        Some(SequenceKind::Walk)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{adjacency::AdjacencyGraph, matrix::test::ArbMatrix};

    fn create_example_graph() -> AdjacencyGraph<char> {
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
    fn test_walk_with_repeated_edge() {
        let graph = create_example_graph();
        let seq = ['A', 'B', 'D', 'C', 'D'];
        assert!(is_walk(&graph, &seq));
        assert!(!is_trail(&graph, &seq));
        assert!(!is_path(&graph, &seq));
        assert_eq!(classify(&graph, &seq), Some(SequenceKind::Walk));
    }

    #[test]
    fn test_simple_path() {
        let graph = create_example_graph();
        let seq = ['A', 'B', 'C', 'D'];
        assert!(is_walk(&graph, &seq));
        assert!(is_trail(&graph, &seq));
        assert!(is_path(&graph, &seq));
        assert_eq!(classify(&graph, &['E', 'C', 'B', 'A']), Some(SequenceKind::Path));
    }

    #[test]
    fn test_trail_revisiting_vertex() {
        let graph = create_example_graph();
        // Closed trail: A-B, B-D, D-A; A appears twice but no edge does.
        let seq = ['A', 'B', 'D', 'A'];
        assert!(is_trail(&graph, &seq));
        assert!(!is_path(&graph, &seq));
        assert_eq!(classify(&graph, &seq), Some(SequenceKind::Trail));
    }

    #[test]
    fn test_back_and_forth_repeats_edge() {
        let graph = create_example_graph();
        let seq = ['C', 'E', 'C'];
        assert!(is_walk(&graph, &seq));
        assert!(!is_trail(&graph, &seq));
    }

    #[test]
    fn test_missing_edge_is_not_walk() {
        let graph = create_example_graph();
        assert!(!is_walk(&graph, &['A', 'C']));
        assert!(!is_walk(&graph, &['A', 'Z']));
        assert_eq!(classify(&graph, &['A', 'E']), None);
    }

    #[test]
    fn test_short_sequences_are_not_walks() {
        let graph = create_example_graph();
        assert!(!is_walk(&graph, &[]));
        assert!(!is_walk(&graph, &['A']));
        assert!(!is_trail(&graph, &['A']));
        assert!(!is_path(&graph, &['A']));
    }

    #[test]
    fn test_edge_pairs() {
        let pairs: Vec<_> = edge_pairs(&[1, 2, 3]).collect();
        assert_eq!(pairs, vec![(&1, &2), (&2, &3)]);
        assert_eq!(edge_pairs(&[1]).count(), 0);
    }

    #[test]
    fn test_kind_ordering() {
        assert!(SequenceKind::Walk < SequenceKind::Trail);
        assert!(SequenceKind::Trail < SequenceKind::Path);
    }

    #[quickcheck]
    fn prop_path_implies_trail_implies_walk(
        ArbMatrix { matrix, .. }: ArbMatrix,
        seq: Vec<usize>,
    ) -> TestResult {
        let seq: Vec<_> = seq.into_iter().map(|v| v % matrix.len()).collect();
        let walk = is_walk(&matrix, &seq);
        let trail = is_trail(&matrix, &seq);
        let path = is_path(&matrix, &seq);
        TestResult::from_bool((!path || trail) && (!trail || walk))
    }

    #[quickcheck]
    fn prop_neighbor_hops_are_walks(ArbMatrix { matrix, source }: ArbMatrix) -> TestResult {
        let Some(next) = matrix.neighbors(&source).next() else {
            return TestResult::discard();
        };
        let seq = [source, next, source];
        TestResult::from_bool(
            classify(&matrix, &seq) == Some(SequenceKind::Walk)
                && classify(&matrix, &seq[..2]) == Some(SequenceKind::Path),
        )
    }
}
