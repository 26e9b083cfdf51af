#![allow(dead_code)]

use std::collections::HashMap;

use transit_graph::TransportGraph;

/// Registers each link as a pair of opposite routes.
pub fn undirected(links: &[(&'static str, &'static str, f64)]) -> TransportGraph<&'static str> {
    let mut graph = TransportGraph::new();
    for &(a, b, weight) in links {
        graph.add_route(a, b, weight);
        graph.add_route(b, a, weight);
    }
    graph
}

pub fn reference_network() -> TransportGraph<&'static str> {
    undirected(&[
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
    ])
}

/// Eight stations of a city network linked by bus and rail.
pub fn city_network() -> TransportGraph<&'static str> {
    undirected(&[
        ("Central Station", "Lenin Square", 1.2),
        ("Central Station", "Bus Station 1", 3.5),
        ("Central Station", "North Station", 4.0),
        ("Lenin Square", "Bus Station 1", 2.1),
        ("Lenin Square", "University", 0.8),
        ("Lenin Square", "Bus Station 2", 3.0),
        ("Lenin Square", "Park", 1.5),
        ("Bus Station 1", "Bus Station 2", 5.4),
        ("Bus Station 1", "Harbour", 4.2),
        ("University", "North Station", 2.7),
        ("University", "Bus Station 2", 1.9),
        ("North Station", "Park", 3.3),
        ("North Station", "Harbour", 6.0),
        ("Bus Station 2", "Park", 2.5),
    ])
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        actual == expected || (actual - expected).abs() < 1e-9,
        "expected {expected}, found {actual}"
    );
}

pub fn assert_distances(actual: &HashMap<&str, f64>, expected: &[(&str, f64)]) {
    assert_eq!(actual.len(), expected.len(), "distances: {actual:?}");
    for (station, distance) in expected {
        assert_close(actual[station], *distance);
    }
}
