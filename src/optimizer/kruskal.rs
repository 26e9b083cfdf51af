use super::{NetworkOptimizer, SpanningTree};
use crate::{
    route::Station,
    tracing_support::{debug, info_span},
    union_find::DisjointSet,
    util::cmp_weights,
};

impl<'g, S: Station> NetworkOptimizer<'g, S> {
    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Every route, in both directions, is sorted by weight; routes of equal
    /// weight keep their registration order.  A route is selected iff its
    /// endpoints are not yet connected, so the reverse direction of a
    /// selected link is always rejected.  A disconnected network yields a
    /// spanning forest.
    pub fn minimum_spanning_tree_kruskal(&self) -> SpanningTree<S> {
        let graph = self.graph;
        let _span = info_span!(
            "kruskal",
            stations = graph.num_stations(),
            routes = graph.num_routes()
        )
        .entered();

        let mut routes = graph.indexed_routes().to_vec();
        routes.sort_by(|a, b| cmp_weights(a.weight, b.weight));

        let mut sets = DisjointSet::new(graph.num_stations());
        let mut tree = SpanningTree::default();
        for route in &routes {
            if sets.union(route.from, route.to) {
                tree.push(graph.route(route));
            }
        }

        debug!(
            selected = tree.len(),
            components = sets.num_sets(),
            "kruskal: done"
        );
        tree
    }
}
