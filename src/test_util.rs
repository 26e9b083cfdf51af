#![cfg(test)]

use std::collections::HashMap;

use quickcheck::{Arbitrary, Gen};

use crate::{Station, TransportGraph};

/// Builds a network with a route in each direction for every link.
pub fn undirected<S: Station>(links: &[(S, S, f64)]) -> TransportGraph<S> {
    let mut graph = TransportGraph::new();
    for (a, b, weight) in links {
        graph.add_route(a.clone(), b.clone(), *weight);
        graph.add_route(b.clone(), a.clone(), *weight);
    }
    graph
}

/// A, B, C, D linked A-B 4, A-C 2, B-C 1, B-D 5, C-D 8.
pub fn reference_network() -> TransportGraph<&'static str> {
    undirected(&[
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
    ])
}

/// A -> B -> C -> A, each with weight -1.
pub fn negative_triangle() -> TransportGraph<&'static str> {
    [("A", "B", -1.0), ("B", "C", -1.0), ("C", "A", -1.0)]
        .into_iter()
        .collect()
}

/// Asserts that `actual` holds exactly the given stations, with distances
/// equal up to rounding.
pub fn assert_distances<S: Station>(actual: &HashMap<S, f64>, expected: &[(S, f64)]) {
    assert_eq!(actual.len(), expected.len(), "distances: {actual:?}");
    for (station, distance) in expected {
        let found = actual
            .get(station)
            .unwrap_or_else(|| panic!("missing station {station:?} in {actual:?}"));
        assert!(
            found == distance || (found - distance).abs() < 1e-9,
            "distance to {station:?}: expected {distance}, found {found}"
        );
    }
}

/// A random network over up to 12 stations with small integral weights, so
/// that path sums are exact.
#[derive(Clone, Debug)]
pub struct ArbNetwork {
    pub graph: TransportGraph<u8>,
}

impl ArbNetwork {
    fn generate(g: &mut Gen, paired: bool, allow_negative: bool) -> Self {
        let num_stations = (usize::arbitrary(g) % 12 + 1) as u8;
        let num_links = usize::arbitrary(g) % 30;
        let mut graph = TransportGraph::new();
        for _ in 0..num_links {
            let from = u8::arbitrary(g) % num_stations;
            let to = u8::arbitrary(g) % num_stations;
            let mut weight = f64::from(u8::arbitrary(g) % 20);
            if allow_negative && bool::arbitrary(g) {
                weight = -weight;
            }
            graph.add_route(from, to, weight);
            if paired {
                graph.add_route(to, from, weight);
            }
        }
        Self { graph }
    }
}

impl Arbitrary for ArbNetwork {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::generate(g, false, false)
    }
}

/// Like [`ArbNetwork`], but every link is registered in both directions.
#[derive(Clone, Debug)]
pub struct ArbUndirectedNetwork {
    pub graph: TransportGraph<u8>,
}

impl Arbitrary for ArbUndirectedNetwork {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            graph: ArbNetwork::generate(g, true, false).graph,
        }
    }
}

/// Like [`ArbNetwork`], but about half the weights are negative.
#[derive(Clone, Debug)]
pub struct ArbSignedNetwork {
    pub graph: TransportGraph<u8>,
}

impl Arbitrary for ArbSignedNetwork {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            graph: ArbNetwork::generate(g, false, true).graph,
        }
    }
}
