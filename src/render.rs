//! The contract for drawing a graph with part of it emphasized.
//!
//! Layout and output formats belong to the implementor of [`Renderer`];
//! this module only describes what to emphasize.

use std::error::Error;

use crate::{adjacency::Adjacency, dijkstra::ShortestPaths, matrix::Weight, sequence::edge_pairs};

/// Vertices and edges to draw emphasized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight<V> {
    pub vertices: Vec<V>,
    pub edges: Vec<(V, V)>,
}

impl<V: Clone> Highlight<V> {
    /// Emphasizes a walk: its vertices in order and each consecutive pair.
    /// Sequences shorter than two vertices have nothing worth emphasizing.
    pub fn sequence(seq: &[V]) -> Option<Self> {
        if seq.len() < 2 {
            return None;
        }
        Some(Self {
            vertices: seq.to_vec(),
            edges: edge_pairs(seq)
                .map(|(u, v)| (u.clone(), v.clone()))
                .collect(),
        })
    }
}

impl Highlight<usize> {
    /// Emphasizes a shortest-path tree: every reached vertex and every
    /// predecessor link.
    pub fn tree<W: Weight>(paths: &ShortestPaths<W>) -> Self {
        Self {
            vertices: (0..paths.distances().len())
                .filter(|&v| paths.is_reachable(v))
                .collect(),
            edges: paths.tree_edges(),
        }
    }
}

/// Produces a visual artifact from a graph.
pub trait Renderer<G: Adjacency> {
    type Output;
    type Error: Error + 'static;

    fn render(
        &mut self,
        graph: &G,
        title: &str,
        highlight: Option<&Highlight<G::Vertex>>,
    ) -> Result<Self::Output, Self::Error>;
}
