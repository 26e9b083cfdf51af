mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

use std::collections::HashMap;

use derivative::Derivative;

pub use self::floyd_warshall::DistanceMatrix;
use crate::route::{IndexedRoute, Route, Station};

/// A weighted, directed transport network.
///
/// Stations exist only as endpoints of routes: registering a route adds any
/// station it names.  Each station is assigned a dense index, in order of
/// first appearance, which is used to address rows and columns of a
/// [`DistanceMatrix`].
///
/// Routes are stored both in per-station adjacency lists and in a flat list,
/// each in registration order.  Parallel routes between the same pair of
/// stations are kept; [`Self::weight`] reports the most recently registered
/// one, while algorithms that scan the flat list consider all of them.
///
/// Queries take `&self` and never modify the graph, so no result depends on
/// earlier queries.
#[derive(Derivative)]
#[derivative(Default(bound = ""), Clone, Debug)]
pub struct TransportGraph<S: Station> {
    stations: Vec<S>,
    index: HashMap<S, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    routes: Vec<IndexedRoute>,
}

impl<S: Station> TransportGraph<S> {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directed route, adding either endpoint if it is not yet
    /// known.  The weight is not validated; negative weights are legal.
    pub fn add_route(&mut self, from: S, to: S, weight: f64) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.adjacency[from].push((to, weight));
        self.routes.push(IndexedRoute { from, to, weight });
    }

    /// Returns the dense index of `station`, assigning the next free one if
    /// it is new.
    fn intern(&mut self, station: S) -> usize {
        if let Some(&index) = self.index.get(&station) {
            return index;
        }
        let index = self.stations.len();
        self.index.insert(station.clone(), index);
        self.stations.push(station);
        self.adjacency.push(Vec::new());
        index
    }

    // Stations

    /// Gets the number of stations in the network.
    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains_station(&self, station: &S) -> bool {
        self.index.contains_key(station)
    }

    /// Gets the dense index assigned to a station.
    pub fn index_of(&self, station: &S) -> Option<usize> {
        self.index.get(station).copied()
    }

    /// Gets the station with the given dense index.
    pub fn station_at(&self, index: usize) -> Option<&S> {
        self.stations.get(index)
    }

    /// Gets all stations in dense-index (first appearance) order.
    pub fn stations(&self) -> impl Iterator<Item = &S> + '_ {
        self.stations.iter()
    }

    /// Gets all stations sorted in ascending order.
    pub fn get_all_stations(&self) -> Vec<S> {
        let mut stations = self.stations.clone();
        stations.sort();
        stations
    }

    // Routes

    /// Gets the number of registered routes, counting parallel routes
    /// separately.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Gets every registered route in registration order.
    pub fn routes(&self) -> impl Iterator<Item = Route<S>> + '_ {
        self.routes.iter().map(|route| self.route(route))
    }

    /// Gets the routes leaving `station` as `(destination, weight)` pairs in
    /// registration order.  Unknown stations have no routes.
    pub fn routes_from(&self, station: &S) -> impl Iterator<Item = (&S, f64)> + '_ {
        self.index_of(station)
            .into_iter()
            .flat_map(|from| self.adjacency[from].iter())
            .map(|&(to, weight)| (&self.stations[to], weight))
    }

    /// Gets the weight of the most recently registered route from `from` to
    /// `to`.
    pub fn weight(&self, from: &S, to: &S) -> Option<f64> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.indexed_weight(from, to)
    }

    pub(crate) fn indexed_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency[from]
            .iter()
            .rev()
            .find(|&&(target, _)| target == to)
            .map(|&(_, weight)| weight)
    }

    pub(crate) fn indexed_routes(&self) -> &[IndexedRoute] {
        &self.routes
    }

    pub(crate) fn adjacency(&self, from: usize) -> &[(usize, f64)] {
        &self.adjacency[from]
    }

    /// Converts an indexed route back to one naming its stations.
    pub(crate) fn route(&self, route: &IndexedRoute) -> Route<S> {
        Route::new(
            self.stations[route.from].clone(),
            self.stations[route.to].clone(),
            route.weight,
        )
    }

    /// Maps a distance vector indexed by dense index onto station labels.
    fn label_distances(&self, distances: Vec<f64>) -> HashMap<S, f64> {
        self.stations.iter().cloned().zip(distances).collect()
    }

    /// Returns the first route with a negative weight, if any.
    fn first_negative_route(&self) -> Option<Route<S>> {
        self.routes
            .iter()
            .find(|route| route.weight < 0.0)
            .map(|route| self.route(route))
    }
}

impl<S: Station> Extend<Route<S>> for TransportGraph<S> {
    fn extend<T: IntoIterator<Item = Route<S>>>(&mut self, iter: T) {
        for Route { from, to, weight } in iter {
            self.add_route(from, to, weight);
        }
    }
}

impl<S: Station> FromIterator<Route<S>> for TransportGraph<S> {
    fn from_iter<T: IntoIterator<Item = Route<S>>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<S: Station> FromIterator<(S, S, f64)> for TransportGraph<S> {
    fn from_iter<T: IntoIterator<Item = (S, S, f64)>>(iter: T) -> Self {
        iter.into_iter().map(Route::from).collect()
    }
}
