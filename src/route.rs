use std::{fmt::Debug, hash::Hash};

use crate::util::sort_pair;

/// A trait representing a station label in a transport network.
///
/// This trait has no methods but serves as a marker for types that can be
/// used to name stations.  It is implemented for every type satisfying its
/// supertraits, so `&str`, `String` and integer labels all work directly.
pub trait Station: Eq + Hash + Clone + Debug + Ord {}

impl<T> Station for T where T: Eq + Hash + Clone + Debug + Ord {}

/// A directed, weighted connection between two stations.
#[derive(Clone, Debug, PartialEq)]
pub struct Route<S> {
    pub from: S,
    pub to: S,
    pub weight: f64,
}

impl<S> Route<S> {
    pub fn new(from: S, to: S, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Consumes the route, returning a `(from, to, weight)` triple.
    pub fn into_tuple(self) -> (S, S, f64) {
        (self.from, self.to, self.weight)
    }
}

impl<S: Ord + Clone> Route<S> {
    /// Gets both ends of the route ordered so that the first is not greater
    /// than the second, ignoring direction.
    pub fn undirected_ends(&self) -> (S, S) {
        sort_pair(self.from.clone(), self.to.clone())
    }
}

impl<S> From<(S, S, f64)> for Route<S> {
    fn from((from, to, weight): (S, S, f64)) -> Self {
        Self { from, to, weight }
    }
}

/// A route whose ends are dense station indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct IndexedRoute {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}
