//! Breadth-first search over any [`Adjacency`] graph.

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use crate::{
    adjacency::Adjacency,
    error::Result,
    tracing_support::{debug, info_span},
};

const DEFAULT_HASH_MAP_CAPACITY: usize = 64;

/// Finds a path from `source` to `target` with the fewest edges.
///
/// Returns `Ok(None)` if `target` is unreachable and `Ok(Some(vec![source]))`
/// if the two are equal.  Neighbors are explored in the order the graph
/// reports them, so among several shortest paths the result is
/// deterministic.  Fails if either endpoint is not in the graph.
pub fn shortest_unweighted_path<G: Adjacency>(
    graph: &G,
    source: &G::Vertex,
    target: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    let _span = info_span!("bfs", ?source, ?target).entered();

    if source == target {
        return Ok(Some(vec![source.clone()]));
    }

    // Doubles as the seen-set: a vertex is queued at most once.
    let mut parents: HashMap<G::Vertex, Option<G::Vertex>> =
        HashMap::with_capacity(DEFAULT_HASH_MAP_CAPACITY);
    parents.insert(source.clone(), None);
    let mut queue = VecDeque::from([source.clone()]);

    while let Some(u) = queue.pop_front() {
        for v in graph.neighbors(&u) {
            let Entry::Vacant(entry) = parents.entry(v.clone()) else {
                continue;
            };
            entry.insert(Some(u.clone()));
            if &v == target {
                let path = unwind(&parents, v);
                debug!(edges = path.len() - 1, "path found");
                return Ok(Some(path));
            }
            queue.push_back(v);
        }
    }
    debug!(seen = parents.len(), "target unreachable");
    Ok(None)
}

/// Follows parent links from `last` back to the root and returns the path
/// root first.
fn unwind<V>(parents: &HashMap<V, Option<V>>, last: V) -> Vec<V>
where
    V: Eq + std::hash::Hash + Clone,
{
    let mut path = vec![last];
    while let Some(Some(parent)) = path.last().and_then(|v| parents.get(v)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}

/// Iterates over the vertices reachable from a start vertex in breadth-first
/// order, each paired with its distance in edges from the start.
pub struct BfsLayers<'g, G: Adjacency> {
    graph: &'g G,
    depths: HashMap<G::Vertex, usize>,
    queue: VecDeque<(G::Vertex, usize)>,
}

impl<'g, G> BfsLayers<'g, G>
where
    G: Adjacency,
{
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        let mut depths = HashMap::with_capacity(DEFAULT_HASH_MAP_CAPACITY);
        depths.insert(start.clone(), 0);
        Self {
            graph,
            depths,
            queue: VecDeque::from([(start, 0)]),
        }
    }
}

impl<'g, G> Iterator for BfsLayers<'g, G>
where
    G: Adjacency,
{
    type Item = (G::Vertex, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, depth) = self.queue.pop_front()?;
        for neighbor in self.graph.neighbors(&vertex) {
            if let Entry::Vacant(entry) = self.depths.entry(neighbor) {
                self.queue.push_back((entry.key().clone(), depth + 1));
                entry.insert(depth + 1);
            }
        }
        Some((vertex, depth))
    }
}

/// The edge-count distance from `source` to every vertex reachable from it.
pub fn bfs_distances<G: Adjacency>(
    graph: &G,
    source: &G::Vertex,
) -> Result<HashMap<G::Vertex, usize>> {
    graph.check_vertex(source)?;
    Ok(BfsLayers::new(graph, source.clone()).collect())
}
