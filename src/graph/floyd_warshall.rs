use std::ops::Index;

use super::TransportGraph;
use crate::{
    error::{GraphError, Result},
    route::Station,
    tracing_support::{debug, info_span},
};

/// A square matrix of shortest distances, addressed by dense station index
/// (see [`TransportGraph::index_of`]).  Row `i`, column `j` holds the
/// distance from station `i` to station `j`; infinity means unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    len: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a `len` x `len` matrix with zeros on the diagonal and
    /// infinity elsewhere.
    fn unconnected(len: usize) -> Self {
        let mut cells = vec![f64::INFINITY; len * len];
        for i in 0..len {
            cells[i * len + i] = 0.0;
        }
        Self { len, cells }
    }

    /// Gets the number of rows (and columns).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the distance from station index `from` to station index `to`.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        (from < self.len && to < self.len).then(|| self.cells[from * self.len + to])
    }

    /// Gets one row of the matrix.
    pub fn row(&self, from: usize) -> Option<&[f64]> {
        (from < self.len).then(|| &self.cells[from * self.len..(from + 1) * self.len])
    }

    /// Gets an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks` panics on a zero chunk size.
        self.cells.chunks(self.len.max(1))
    }

    /// Looks up the distance between two stations of `graph`, which must be
    /// the graph this matrix was computed from.
    pub fn distance<S: Station>(&self, graph: &TransportGraph<S>, from: &S, to: &S) -> Option<f64> {
        self.get(graph.index_of(from)?, graph.index_of(to)?)
    }

    /// Returns true if any diagonal entry is negative, i.e. some station
    /// lies on a negative cycle.
    pub fn has_negative_diagonal(&self) -> bool {
        (0..self.len).any(|i| self.cells[i * self.len + i] < 0.0)
    }

    /// Converts the matrix into nested row vectors.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        assert!(
            from < self.len && to < self.len,
            "index ({from}, {to}) out of bounds for {0}x{0} matrix",
            self.len
        );
        &self.cells[from * self.len + to]
    }
}

impl<S: Station> TransportGraph<S> {
    /// Computes shortest distances between every ordered pair of stations
    /// with the Floyd-Warshall algorithm.
    ///
    /// Direct distances come from [`Self::weight`], so the most recently
    /// registered of several parallel routes is the one used.  A station's
    /// distance to itself starts at zero, or at the weight of its latest
    /// self-loop if that is negative.
    ///
    /// Negative cycles are not detected: stations on one may end up with a
    /// negative diagonal entry, and the other entries are then meaningless.
    /// Use [`Self::checked_floyd_warshall`] to reject that case.
    pub fn all_pairs_shortest_paths_floyd_warshall(&self) -> DistanceMatrix {
        let n = self.num_stations();
        let _span = info_span!("floyd_warshall", stations = n).entered();
        let mut matrix = DistanceMatrix::unconnected(n);
        for route in self.indexed_routes() {
            let cell = &mut matrix.cells[route.from * n + route.to];
            // A self-loop only matters if it is a negative cycle.
            *cell = if route.from == route.to {
                route.weight.min(0.0)
            } else {
                route.weight
            };
        }

        let dist = &mut matrix.cells;
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    // Re-read each time: with a negative diagonal, dist[i][k]
                    // can change while j sweeps past k.
                    let through_k = dist[i * n + k];
                    let onward = dist[k * n + j];
                    if through_k == f64::INFINITY || onward == f64::INFINITY {
                        continue;
                    }
                    let candidate = through_k + onward;
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                    }
                }
            }
        }

        debug!(
            negative_diagonal = matrix.has_negative_diagonal(),
            "floyd_warshall: done"
        );
        matrix
    }

    /// Like [`Self::all_pairs_shortest_paths_floyd_warshall`], but fails if
    /// any station ends up with a negative distance to itself.
    pub fn checked_floyd_warshall(&self) -> Result<DistanceMatrix, S> {
        let matrix = self.all_pairs_shortest_paths_floyd_warshall();
        if matrix.has_negative_diagonal() {
            return Err(GraphError::NegativeCycle);
        }
        Ok(matrix)
    }
}
