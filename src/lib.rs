//! Shortest paths over dense weighted graphs, breadth-first search over
//! adjacency graphs, and classification of vertex sequences as walks,
//! trails or paths.
//!
//! This crate provides:
//!
//! - [`WeightMatrix`]: an immutable `n × n` matrix of non-negative weights
//! - [`shortest_paths`]: Dijkstra's algorithm with predecessor tracking
//! - [`shortest_unweighted_path`]: fewest-edges path via breadth-first search
//! - [`is_walk`], [`is_trail`], [`is_path`]: sequence classification
//! - [`IsomorphismFinder`] and [`Renderer`]: contracts for capabilities
//!   supplied by the caller
//!
//! All algorithms are pure functions of their arguments.  Precondition
//! violations are reported as [`GraphError`]; unreachable vertices and
//! missing paths are ordinary results.

pub mod adjacency;
pub mod bfs;
pub mod dijkstra;
pub mod error;
pub mod isomorphism;
pub mod matrix;
pub mod render;
pub mod sequence;
pub mod tracing_support;

pub use adjacency::{Adjacency, AdjacencyGraph};
pub use bfs::{BfsLayers, bfs_distances, shortest_unweighted_path};
pub use dijkstra::{Distance, SelectionStrategy, ShortestPaths, shortest_paths, shortest_paths_with};
pub use error::{GraphError, Result};
pub use isomorphism::{IsomorphismFinder, Mapping, is_isomorphism};
pub use matrix::{Weight, WeightMatrix};
pub use render::{Highlight, Renderer};
pub use sequence::{SequenceKind, classify, edge_pairs, is_path, is_trail, is_walk};
