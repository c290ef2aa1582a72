//! Single-source shortest paths over a [`WeightMatrix`] using Dijkstra's
//! algorithm with explicit predecessor tracking.
//!
//! The default strategy scans every vertex to find the next one to settle,
//! which costs `O(V²)` and suits the dense matrix representation.  A
//! binary-heap strategy is available for larger graphs; both settle vertices
//! in the same order and therefore produce identical results.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use bitvec::vec::BitVec;

use crate::{
    error::Result,
    matrix::{Weight, WeightMatrix},
    tracing_support::{debug, info_span, trace},
};

/// A tentative or final distance.  Every finite distance orders before
/// `Infinite`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Copy> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, or `None` for `Infinite`.
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }
}

/// How Dijkstra's algorithm picks the next vertex to settle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Linear scan over all vertices on every round.
    #[default]
    Dense,
    /// Binary heap keyed by `(distance, index)` with lazy deletion.
    Heap,
}

/// The outcome of a single-source run: final distances plus the
/// shortest-path tree encoded as predecessor links.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths<W> {
    source: usize,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<usize>>,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn source(&self) -> usize {
        self.source
    }

    /// The shortest distance from the source to `v`.  Panics if `v` is out
    /// of range.
    pub fn distance(&self, v: usize) -> Distance<W> {
        self.distances[v]
    }

    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// The vertex preceding `v` on its shortest path.  `None` for the source
    /// and for unreachable vertices.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessors[v]
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.distances[v].is_finite()
    }

    /// Reconstructs the shortest path from the source to `v`, source first.
    /// Returns `None` if `v` is unreachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// The edges of the shortest-path tree, each as `(min, max)`, sorted.
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = self
            .predecessors
            .iter()
            .enumerate()
            .filter_map(|(v, pred)| pred.map(|u| (u.min(v), u.max(v))))
            .collect();
        edges.sort_unstable();
        edges
    }
}

/// Computes shortest distances from `source` to every vertex using the
/// dense selection strategy.
///
/// Unreachable vertices end with [`Distance::Infinite`] and no predecessor.
/// Fails only if `source` is not a vertex of `matrix`.
pub fn shortest_paths<W: Weight>(
    matrix: &WeightMatrix<W>,
    source: usize,
) -> Result<ShortestPaths<W>> {
    shortest_paths_with(matrix, source, SelectionStrategy::Dense)
}

/// Like [`shortest_paths`], with an explicit vertex selection strategy.
pub fn shortest_paths_with<W: Weight>(
    matrix: &WeightMatrix<W>,
    source: usize,
    strategy: SelectionStrategy,
) -> Result<ShortestPaths<W>> {
    matrix.check_index(source)?;
    let _span = info_span!("shortest_paths", n = matrix.len(), source, ?strategy).entered();

    let n = matrix.len();
    let mut run = Run {
        distances: vec![Distance::Infinite; n],
        predecessors: vec![None; n],
        visited: BitVec::repeat(false, n),
    };
    run.distances[source] = Distance::Finite(W::zero());

    match strategy {
        SelectionStrategy::Dense => run.dense(matrix),
        SelectionStrategy::Heap => run.heap(matrix, source),
    }

    Ok(ShortestPaths {
        source,
        distances: run.distances,
        predecessors: run.predecessors,
    })
}

struct Run<W> {
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<usize>>,
    visited: BitVec,
}

impl<W: Weight> Run<W> {
    fn dense(&mut self, matrix: &WeightMatrix<W>) {
        for _ in 1..matrix.len() {
            let Some(u) = select_min(&self.distances, &self.visited) else {
                debug!("remaining vertices are unreachable");
                break;
            };
            self.settle(matrix, u, |_, _| {});
        }
    }

    fn heap(&mut self, matrix: &WeightMatrix<W>, source: usize) {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            distance: W::zero(),
            vertex: source,
        }));
        while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
            // Stale entry: the vertex was settled or improved since the push.
            if self.visited[vertex] || self.distances[vertex] != Distance::Finite(distance) {
                continue;
            }
            self.settle(matrix, vertex, |v, d| {
                heap.push(Reverse(HeapEntry { distance: d, vertex: v }));
            });
        }
    }

    /// Marks `u` visited and relaxes every edge to an unvisited neighbor.
    /// Only a strictly shorter route replaces a predecessor.  `improved` is
    /// told about every distance that went down.  A sum that does not fit in
    /// `W` is not a route.
    fn settle(
        &mut self,
        matrix: &WeightMatrix<W>,
        u: usize,
        mut improved: impl FnMut(usize, W),
    ) {
        self.visited.set(u, true);
        let Distance::Finite(du) = self.distances[u] else {
            return;
        };
        trace!(vertex = u, distance = ?du, "settled");
        for (v, w) in matrix.weighted_neighbors(u) {
            if self.visited[v] {
                continue;
            }
            let Some(candidate) = du.checked_sum(w) else {
                debug!(from = u, to = v, "distance overflows, edge skipped");
                continue;
            };
            if Distance::Finite(candidate) < self.distances[v] {
                self.distances[v] = Distance::Finite(candidate);
                self.predecessors[v] = Some(u);
                improved(v, candidate);
            }
        }
    }
}

/// Returns the unvisited vertex with the smallest finite distance, the
/// lowest index winning ties, or `None` if no unvisited vertex is reachable.
fn select_min<W: Weight>(distances: &[Distance<W>], visited: &BitVec) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, distance) in distances.iter().enumerate() {
        if visited[i] || !distance.is_finite() {
            continue;
        }
        if best.is_none_or(|b| *distance < distances[b]) {
            best = Some(i);
        }
    }
    best
}

/// Heap key ordering by distance, then index, so the heap settles vertices
/// in exactly the order the dense scan does.  Weights are validated to be
/// non-NaN, so `partial_cmp` always succeeds.
struct HeapEntry<W> {
    distance: W,
    vertex: usize,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then(self.vertex.cmp(&other.vertex))
    }
}
