//! Routing and optimization over weighted, directed transport networks.
//!
//! A [`TransportGraph`] is built by registering routes between stations and
//! then queried with shortest-path algorithms (Dijkstra, Bellman-Ford,
//! Floyd-Warshall).  A [`NetworkOptimizer`] borrows a graph and computes
//! minimum spanning trees with Kruskal's or Prim's algorithm.

pub mod error;
pub mod graph;
pub mod optimizer;
pub mod route;
pub mod tracing_support;

mod frontier;
mod union_find;
mod util;

#[cfg(test)]
mod test_util;

pub use error::{GraphError, Result};
pub use graph::{DistanceMatrix, TransportGraph};
pub use optimizer::{NetworkOptimizer, SpanningTree};
pub use route::{Route, Station};
