use std::collections::HashMap;

use super::TransportGraph;
use crate::{
    error::{GraphError, Result},
    frontier::Frontier,
    route::Station,
    tracing_support::{debug, info_span},
    util::VisitedSet,
};

impl<S: Station> TransportGraph<S> {
    /// Finds the shortest distance from `source` to every station using
    /// Dijkstra's algorithm.  Unreachable stations map to infinity.  An
    /// unknown source yields an empty map.
    ///
    /// Negative weights are neither detected nor rejected; the distances
    /// are wrong when any are present.  Use
    /// [`Self::shortest_path_bellman_ford`] for such networks, or
    /// [`Self::checked_dijkstra`] to reject them.
    pub fn shortest_path_dijkstra(&self, source: &S) -> HashMap<S, f64> {
        let Some(start) = self.index_of(source) else {
            debug!(?source, "dijkstra: unknown source");
            return HashMap::new();
        };
        self.label_distances(self.dijkstra_from(start))
    }

    /// Like [`Self::shortest_path_dijkstra`], but fails on an unknown
    /// source or if any route in the network has a negative weight.
    pub fn checked_dijkstra(&self, source: &S) -> Result<HashMap<S, f64>, S> {
        let start = self
            .index_of(source)
            .ok_or_else(|| GraphError::UnknownStation(source.clone()))?;
        if let Some(route) = self.first_negative_route() {
            return Err(GraphError::NegativeWeight {
                from: route.from,
                to: route.to,
                weight: route.weight,
            });
        }
        Ok(self.label_distances(self.dijkstra_from(start)))
    }

    /// Label-setting search over dense indices.  A station is finalized when
    /// first popped and never relaxed again.
    pub(crate) fn dijkstra_from(&self, start: usize) -> Vec<f64> {
        let _span = info_span!("dijkstra", stations = self.num_stations()).entered();
        let mut distances = vec![f64::INFINITY; self.num_stations()];
        let mut finalized = VisitedSet::new(self.num_stations());
        let mut frontier = Frontier::new();

        distances[start] = 0.0;
        frontier.push(0.0, start);

        while let Some((distance, current)) = frontier.pop() {
            if !finalized.insert(current) {
                continue;
            }
            for &(neighbor, weight) in self.adjacency(current) {
                if finalized.contains(neighbor) {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    frontier.push(candidate, neighbor);
                }
            }
        }

        debug!(reached = finalized.count(), "dijkstra: done");
        distances
    }
}
