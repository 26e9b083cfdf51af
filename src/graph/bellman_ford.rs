use std::collections::HashMap;

use super::TransportGraph;
use crate::{
    error::{GraphError, Result},
    route::Station,
    tracing_support::{debug, info_span},
};

impl<S: Station> TransportGraph<S> {
    /// Finds the shortest distance from `source` to every station using the
    /// Bellman-Ford algorithm, which tolerates negative weights.
    ///
    /// Returns the distance map and a flag that is true iff a cycle of
    /// negative total weight is reachable from `source`.  When the flag is
    /// set the distances are not reliable.  An unknown source yields an
    /// empty map and `false`.
    pub fn shortest_path_bellman_ford(&self, source: &S) -> (HashMap<S, f64>, bool) {
        let Some(start) = self.index_of(source) else {
            debug!(?source, "bellman_ford: unknown source");
            return (HashMap::new(), false);
        };
        let (distances, negative_cycle) = self.bellman_ford_from(start);
        (self.label_distances(distances), negative_cycle)
    }

    /// Like [`Self::shortest_path_bellman_ford`], but fails on an unknown
    /// source or a reachable negative cycle instead of returning a flag.
    pub fn checked_bellman_ford(&self, source: &S) -> Result<HashMap<S, f64>, S> {
        let start = self
            .index_of(source)
            .ok_or_else(|| GraphError::UnknownStation(source.clone()))?;
        match self.bellman_ford_from(start) {
            (_, true) => Err(GraphError::NegativeCycle),
            (distances, false) => Ok(self.label_distances(distances)),
        }
    }

    /// Runs exactly `n - 1` full relaxation passes over the flat route list,
    /// then one detection pass.
    pub(crate) fn bellman_ford_from(&self, start: usize) -> (Vec<f64>, bool) {
        let _span = info_span!(
            "bellman_ford",
            stations = self.num_stations(),
            routes = self.num_routes()
        )
        .entered();
        let mut distances = vec![f64::INFINITY; self.num_stations()];
        distances[start] = 0.0;

        for _ in 1..self.num_stations() {
            for route in self.indexed_routes() {
                if distances[route.from] == f64::INFINITY {
                    continue;
                }
                let candidate = distances[route.from] + route.weight;
                if candidate < distances[route.to] {
                    distances[route.to] = candidate;
                }
            }
        }

        let negative_cycle = self.indexed_routes().iter().any(|route| {
            distances[route.from] != f64::INFINITY
                && distances[route.from] + route.weight < distances[route.to]
        });
        if negative_cycle {
            debug!("bellman_ford: negative cycle reachable from source");
        }

        (distances, negative_cycle)
    }
}
