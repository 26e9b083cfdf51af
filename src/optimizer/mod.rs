mod kruskal;
mod prim;

use derivative::Derivative;

use crate::{
    graph::TransportGraph,
    route::{Route, Station},
    union_find::DisjointSet,
    util::sort_pair,
};

/// The result of a minimum spanning tree computation: the selected routes in
/// selection order and their total weight.
///
/// On a disconnected network this is a spanning forest (or, for Prim, a tree
/// over the start station's component) with fewer than `stations - 1`
/// routes.
#[derive(Derivative)]
#[derivative(Default(bound = ""), Clone, Debug, PartialEq)]
pub struct SpanningTree<S> {
    pub edges: Vec<Route<S>>,
    pub total_weight: f64,
}

impl<S> SpanningTree<S> {
    fn push(&mut self, route: Route<S>) {
        self.total_weight += route.weight;
        self.edges.push(route);
    }

    /// Gets the number of selected routes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the tree connects `num_stations` stations, i.e. it
    /// has exactly `num_stations - 1` routes.
    pub fn spans(&self, num_stations: usize) -> bool {
        self.len() + 1 == num_stations.max(1)
    }

    /// Consumes the tree, returning its routes as triples together with the
    /// total weight.
    pub fn into_parts(self) -> (Vec<(S, S, f64)>, f64) {
        let edges = self.edges.into_iter().map(Route::into_tuple).collect();
        (edges, self.total_weight)
    }
}

impl<S: Ord + Clone> SpanningTree<S> {
    /// Returns true if the tree links `a` and `b` directly, in either
    /// direction.
    pub fn contains_link(&self, a: &S, b: &S) -> bool {
        let wanted = sort_pair(a.clone(), b.clone());
        self.edges
            .iter()
            .any(|route| route.undirected_ends() == wanted)
    }
}

/// Computes minimum spanning trees over a borrowed [`TransportGraph`].
///
/// Routes are treated as undirected links.  Callers model an undirected
/// connection by registering a route in each direction; the two directions
/// then simply compete as independent candidates.  The optimizer never
/// modifies the graph.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct NetworkOptimizer<'g, S: Station> {
    graph: &'g TransportGraph<S>,
}

impl<'g, S: Station> Clone for NetworkOptimizer<'g, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, S: Station> Copy for NetworkOptimizer<'g, S> {}

impl<'g, S: Station> NetworkOptimizer<'g, S> {
    pub fn new(graph: &'g TransportGraph<S>) -> Self {
        Self { graph }
    }

    /// Gets the graph this optimizer reads from.
    pub fn graph(&self) -> &'g TransportGraph<S> {
        self.graph
    }

    /// Returns true if every station can reach every other when routes are
    /// followed in either direction.  An empty network counts as connected.
    pub fn is_connected(&self) -> bool {
        let mut sets = DisjointSet::new(self.graph.num_stations());
        for route in self.graph.indexed_routes() {
            sets.union(route.from, route.to);
        }
        sets.num_sets() <= 1
    }

    /// Partitions the stations into components connected by routes followed
    /// in either direction.  Components are ordered by their first station
    /// in registration order, and stations within a component likewise.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<Vec<S>> {
        let n = self.graph.num_stations();
        let mut neighbors = vec![Vec::new(); n];
        for route in self.graph.indexed_routes() {
            neighbors[route.from].push(route.to);
            neighbors[route.to].push(route.from);
        }

        let starts: Vec<usize> = (0..n).collect();
        let mut components: Vec<Vec<usize>> =
            pathfinding::prelude::connected_components(&starts, |&i| neighbors[i].clone())
                .into_iter()
                .map(|component| {
                    let mut members: Vec<usize> = component.into_iter().collect();
                    members.sort_unstable();
                    members
                })
                .collect();
        components.sort_unstable_by_key(|members| members[0]);

        components
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .filter_map(|i| self.graph.station_at(i).cloned())
                    .collect()
            })
            .collect()
    }
}
