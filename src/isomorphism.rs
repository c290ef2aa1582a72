//! The contract for graph isomorphism.
//!
//! No search is implemented here.  Callers plug in a finder and can check
//! whatever mapping it returns with [`is_isomorphism`].

use std::collections::{HashMap, HashSet};

use crate::adjacency::Adjacency;

/// A mapping from the vertices of one graph to those of another.
pub type Mapping<G, H> = HashMap<<G as Adjacency>::Vertex, <H as Adjacency>::Vertex>;

/// Something that can decide whether two graphs are isomorphic.
pub trait IsomorphismFinder<G: Adjacency, H: Adjacency> {
    /// Returns a bijection from the vertices of `g` to those of `h` such
    /// that `(u, v)` is an edge of `g` iff `(map[u], map[v])` is an edge of
    /// `h`, or `None` if none exists.
    fn find_isomorphism(&self, g: &G, h: &H) -> Option<Mapping<G, H>>;

    fn are_isomorphic(&self, g: &G, h: &H) -> bool {
        self.find_isomorphism(g, h).is_some()
    }
}

/// Whether `mapping` is a bijection from the vertices of `g` onto those of
/// `h` that preserves adjacency in both directions.
pub fn is_isomorphism<G, H>(g: &G, h: &H, mapping: &Mapping<G, H>) -> bool
where
    G: Adjacency,
    H: Adjacency,
{
    let g_vertices: Vec<_> = g.vertices().collect();
    if g_vertices.len() != mapping.len() || h.vertices().count() != mapping.len() {
        return false;
    }
    let mut images = HashSet::with_capacity(mapping.len());
    for v in &g_vertices {
        match mapping.get(v) {
            Some(image) if h.contains(image) && images.insert(image) => {}
            _ => return false,
        }
    }
    g_vertices.iter().all(|u| {
        g_vertices
            .iter()
            .all(|v| g.has_edge(u, v) == h.has_edge(&mapping[u], &mapping[v]))
    })
}
