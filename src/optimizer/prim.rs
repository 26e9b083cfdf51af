use super::{NetworkOptimizer, SpanningTree};
use crate::{
    error::{GraphError, Result},
    frontier::Frontier,
    route::{IndexedRoute, Station},
    tracing_support::{debug, info_span},
    util::VisitedSet,
};

impl<'g, S: Station> NetworkOptimizer<'g, S> {
    /// Computes a minimum spanning tree with Prim's algorithm, growing it
    /// from `start`, or from the first station registered when `start` is
    /// `None`.
    ///
    /// Only routes leaving visited stations are considered, so the tree
    /// covers the stations reachable from the start.  An empty network or an
    /// unknown start yields an empty tree.
    pub fn minimum_spanning_tree_prim(&self, start: Option<&S>) -> SpanningTree<S> {
        let start = match start {
            Some(station) => self.graph.index_of(station),
            None => (!self.graph.is_empty()).then_some(0),
        };
        match start {
            Some(start) => self.prim_from(start),
            None => {
                debug!("prim: no start station");
                SpanningTree::default()
            }
        }
    }

    /// Like [`Self::minimum_spanning_tree_prim`] with an explicit start, but
    /// fails if the start station is unknown.
    pub fn checked_prim(&self, start: &S) -> Result<SpanningTree<S>, S> {
        self.graph
            .index_of(start)
            .map(|start| self.prim_from(start))
            .ok_or_else(|| GraphError::UnknownStation(start.clone()))
    }

    fn prim_from(&self, start: usize) -> SpanningTree<S> {
        let graph = self.graph;
        let n = graph.num_stations();
        let _span = info_span!("prim", stations = n).entered();

        let mut visited = VisitedSet::new(n);
        let mut frontier = Frontier::new();
        let mut tree = SpanningTree::default();

        visited.insert(start);
        for &(to, weight) in graph.adjacency(start) {
            frontier.push(weight, (start, to));
        }

        while visited.count() < n {
            let Some((weight, (from, to))) = frontier.pop() else {
                break;
            };
            if !visited.insert(to) {
                continue;
            }
            tree.push(graph.route(&IndexedRoute { from, to, weight }));
            for &(next, next_weight) in graph.adjacency(to) {
                if !visited.contains(next) {
                    frontier.push(next_weight, (to, next));
                }
            }
        }

        debug!(selected = tree.len(), "prim: done");
        tree
    }
}
