//! Unweighted, undirected graphs answered through neighbor queries.

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
};

use crate::error::{GraphError, Result};

/// Read-only queries the breadth-first search and the sequence classifier
/// need from a graph.
pub trait Adjacency {
    type Vertex: Eq + Hash + Clone + Debug;

    /// Whether `vertex` belongs to the graph.
    fn contains(&self, vertex: &Self::Vertex) -> bool;

    /// Fails unless `vertex` belongs to the graph.
    fn check_vertex(&self, vertex: &Self::Vertex) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(vertex))
        }
    }

    /// Whether an edge joins `u` and `v`.  For undirected graphs the order
    /// of the arguments does not matter.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Iterates over the neighbors of `vertex`.  The order is fixed for a
    /// given graph, which makes searches over it deterministic.
    fn neighbors(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Iterates over every vertex of the graph.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;
}

/// An undirected graph keyed by vertex labels.  Vertices and neighbor
/// lists keep insertion order.  Adding an edge twice has no effect.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V> {
    order: Vec<V>,
    neighbors: HashMap<V, Vec<V>>,
    num_edges: usize,
}

impl<V> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            neighbors: HashMap::new(),
            num_edges: 0,
        }
    }
}

impl<V> AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list of edges, adding endpoints as they appear.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds a vertex.  Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.neighbors.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(Vec::new());
                true
            }
        }
    }

    /// Adds an undirected edge, adding its endpoints if needed.  Returns
    /// `false` if the edge already existed.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        if self.has_edge(&u, &v) {
            return false;
        }
        if u != v {
            self.neighbors.get_mut(&v).expect("vertex was just added").push(u.clone());
        }
        self.neighbors.get_mut(&u).expect("vertex was just added").push(v);
        self.num_edges += 1;
        true
    }

    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

impl<V> Adjacency for AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    type Vertex = V;

    fn contains(&self, vertex: &V) -> bool {
        self.neighbors.contains_key(vertex)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.neighbors
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    fn neighbors(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        self.neighbors
            .get(vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().cloned())
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.order.iter().cloned()
    }
}
