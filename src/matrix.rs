//! Dense, immutable weighted graphs stored as an `n × n` matrix.
//!
//! A zero entry means "no edge", so zero-weight edges cannot be represented.
//! The diagonal is never read as a self-loop.

use std::fmt::Debug;

use pathfinding::num_traits::Zero;

use crate::{
    adjacency::Adjacency,
    error::{GraphError, Result},
};

/// Numeric edge weights: the primitive integers and floats.  Negative and
/// NaN values are rejected when a matrix is built.
pub trait Weight: Copy + PartialOrd + Zero + Debug {
    /// Adds two weights, or returns `None` if the result is not
    /// representable (integer overflow, or a float sum that is not finite).
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);

/// A square matrix of non-negative edge weights.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix<W> {
    len: usize,
    cells: Vec<W>,
}

impl<W: Weight> WeightMatrix<W> {
    /// Creates a matrix with `len` vertices and no edges.
    pub fn empty(len: usize) -> Self {
        Self {
            len,
            cells: vec![W::zero(); len * len],
        }
    }

    /// Builds a matrix from its rows.  Every row must have as many entries
    /// as there are rows, and every entry must be non-negative.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let len = rows.len();
        let mut cells = Vec::with_capacity(len * len);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != len {
                return Err(GraphError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: len,
                });
            }
            for (col, &weight) in entries.iter().enumerate() {
                check_weight(row, col, weight)?;
            }
            cells.extend(entries);
        }
        Ok(Self { len, cells })
    }

    /// Builds a symmetric matrix with `len` vertices from `(u, v, weight)`
    /// triples.  A later triple for the same pair replaces an earlier one.
    pub fn from_edges(
        len: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Result<Self> {
        let mut matrix = Self::empty(len);
        for (u, v, weight) in edges {
            matrix.check_index(u)?;
            matrix.check_index(v)?;
            check_weight(u, v, weight)?;
            matrix.cells[u * len + v] = weight;
            matrix.cells[v * len + u] = weight;
        }
        Ok(matrix)
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fails with [`GraphError::IndexOutOfRange`] unless `index` names a vertex.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// The weight of the edge from `u` to `v`, or `None` if there is no
    /// edge.  Panics if either index is out of range.
    pub fn weight(&self, u: usize, v: usize) -> Option<W> {
        assert!(u < self.len && v < self.len, "index out of range");
        let weight = self.cells[u * self.len + v];
        (u != v && weight > W::zero()).then_some(weight)
    }

    /// Iterates over the vertices adjacent to `u` in increasing index order,
    /// with the weight of the connecting edge.
    pub fn weighted_neighbors(&self, u: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        (0..self.len).filter_map(move |v| self.weight(u, v).map(|w| (v, w)))
    }

    /// Iterates over every edge once as `(u, v, weight)` with `u < v`.
    /// Only the upper triangle is read, so this assumes a symmetric matrix.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        (0..self.len).flat_map(move |u| {
            (u + 1..self.len).filter_map(move |v| self.weight(u, v).map(|w| (u, v, w)))
        })
    }
}

fn check_weight<W: Weight>(from: usize, to: usize, weight: W) -> Result<()> {
    // `!(w >= 0)` also catches NaN.
    if weight >= W::zero() {
        Ok(())
    } else {
        Err(GraphError::invalid_weight(from, to, weight))
    }
}

impl<W: Weight> Adjacency for WeightMatrix<W> {
    type Vertex = usize;

    fn contains(&self, vertex: &usize) -> bool {
        *vertex < self.len
    }

    fn check_vertex(&self, vertex: &usize) -> Result<()> {
        self.check_index(*vertex)
    }

    fn has_edge(&self, u: &usize, v: &usize) -> bool {
        self.contains(u) && self.contains(v) && self.weight(*u, *v).is_some()
    }

    fn neighbors(&self, vertex: &usize) -> impl Iterator<Item = usize> + '_ {
        let u = *vertex;
        (0..self.len).filter(move |&v| self.weight(u, v).is_some())
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.len
    }
}

#[cfg(test)]
pub(crate) mod test {
    use quickcheck::{Arbitrary, Gen};

    use super::*;

    /// A random symmetric matrix for property tests.  Roughly a third of the
    /// vertex pairs get an edge with weight in `1..=20`.
    #[derive(Clone, Debug)]
    pub struct ArbMatrix {
        pub matrix: WeightMatrix<u32>,
        pub source: usize,
    }

    impl Arbitrary for ArbMatrix {
        fn arbitrary(g: &mut Gen) -> Self {
            let max_len = if cfg!(feature = "slow_tests") { 60 } else { 12 };
            let len = usize::arbitrary(g) % max_len + 1;
            let mut edges = Vec::new();
            for u in 0..len {
                for v in u + 1..len {
                    if u8::arbitrary(g) % 3 == 0 {
                        edges.push((u, v, u32::arbitrary(g) % 20 + 1));
                    }
                }
            }
            let matrix = WeightMatrix::from_edges(len, edges).expect("valid edges");
            let source = usize::arbitrary(g) % len;
            ArbMatrix { matrix, source }
        }
    }
}
