use std::fmt::Debug;

/// Errors reported by the checked entry points of [`TransportGraph`] and
/// [`NetworkOptimizer`].
///
/// The unchecked entry points never return these; they signal the same
/// conditions with sentinel values (empty maps, a cycle flag, a partial
/// spanning forest).
///
/// [`TransportGraph`]: crate::TransportGraph
/// [`NetworkOptimizer`]: crate::NetworkOptimizer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError<S: Debug> {
    /// The station was never registered as the endpoint of a route.
    #[error("Unknown station: {0:?}")]
    UnknownStation(S),
    /// A route with a negative weight was found where the algorithm
    /// requires non-negative weights.
    #[error("Negative weight {weight} on route {from:?} -> {to:?}")]
    NegativeWeight { from: S, to: S, weight: f64 },
    /// A cycle with strictly negative total weight was detected.
    #[error("Negative-weight cycle detected")]
    NegativeCycle,
}

pub type Result<T, S> = std::result::Result<T, GraphError<S>>;
