//! Page-rank scenarios and the conservation property.

use densegraph::{MatrixGraph, PageRank};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

mod common;

#[test]
fn directed_path_boosts_the_sink() {
    common::init_tracing();
    let mut graph = MatrixGraph::new(true);
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    graph.add_edge(a, b, None).unwrap();
    let ranks = PageRank::new().compute(&mut graph).unwrap();
    assert!(ranks[&b] > ranks[&a]);
    let sum: f64 = ranks.values().sum();
    assert!((sum - 1.0).abs() < 0.03);
}

#[test]
fn four_cycle_ranks_evenly() {
    common::init_tracing();
    let mut graph = MatrixGraph::new(true);
    let vertices: Vec<_> = (0..4).map(|i| graph.add_vertex(i)).collect();
    for i in 0..4 {
        graph
            .add_edge(vertices[i], vertices[(i + 1) % 4], None)
            .unwrap();
    }
    let ranks = PageRank::new().compute(&mut graph).unwrap();
    let sum: f64 = ranks.values().sum();
    assert!((sum - 1.0).abs() < 0.03);
    for v in &vertices {
        assert!((ranks[v] - 0.25).abs() < 0.01);
    }
}

#[test]
fn rerunning_operates_on_the_mutated_graph() {
    // Sink handling is a structural mutation that persists; a second run
    // sees the already-connected graph and still conserves rank.
    let mut graph = MatrixGraph::new(true);
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    graph.add_edge(a, b, None).unwrap();
    PageRank::new().compute(&mut graph).unwrap();
    assert_eq!(graph.num_edges_from(b).unwrap(), 2);
    let ranks = PageRank::new().compute(&mut graph).unwrap();
    let sum: f64 = ranks.values().sum();
    assert!((sum - 1.0).abs() < 0.03);
}

/// A random directed graph: `n` vertices plus arbitrary ordered edge pairs.
#[derive(Clone, Debug)]
struct SmallDigraph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl Arbitrary for SmallDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 10 + 1;
        let edges = (0..usize::arbitrary(g) % 20)
            .map(|_| (usize::arbitrary(g) % n, usize::arbitrary(g) % n))
            .collect();
        SmallDigraph { n, edges }
    }
}

/// Whatever the shape of the graph, the returned ranks sum to 1 within the
/// documented tolerance.
#[quickcheck]
fn prop_ranks_are_conserved(shape: SmallDigraph) -> bool {
    let mut graph = MatrixGraph::new(true);
    let vertices: Vec<_> = (0..shape.n).map(|i| graph.add_vertex(i)).collect();
    for &(a, b) in &shape.edges {
        graph.add_edge(vertices[a], vertices[b], None).unwrap();
    }
    let ranks = match PageRank::new().compute(&mut graph) {
        Ok(ranks) => ranks,
        Err(_) => return false,
    };
    let sum: f64 = ranks.values().sum();
    ranks.len() == shape.n && (sum - 1.0).abs() < 0.03
}
