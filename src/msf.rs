//! Prim-Jarnik minimum spanning forest.
//!
//! The classic algorithm grows a single tree from a start vertex.  Seeding
//! *every* vertex into the priority queue at infinite cost extends it to
//! disconnected graphs: whenever the popped minimum has no recorded
//! predecessor, a new component starts without emitting an edge, so the
//! result is one minimum spanning tree per connected component.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    adaptable_heap::{AdaptableHeap, HeapHandle},
    decoration::Decoration,
    error::GraphError,
    ids::{EdgeId, VertexId},
    matrix_graph::MatrixGraph,
};

const INFINITE_COST: u32 = u32::MAX;

/// Computes the edge set of a minimum spanning forest of `g`.
///
/// Costs are edge labels; an unlabeled edge weighs 0.  Self-loops never span
/// anything and are excluded from relaxation.  Runs in
/// O((|E| + |V|) log |V|) thanks to the adaptable heap's decrease-key.
///
/// Ties between equal-weight edges are broken arbitrarily, so only the total
/// weight and the edge count are stable across runs.
pub fn min_spanning_forest<V>(g: &MatrixGraph<V>) -> Result<Vec<EdgeId>, GraphError> {
    let vertices: Vec<VertexId> = g.vertex_ids().collect();
    let Some(&start) = vertices.first() else {
        return Ok(Vec::new());
    };

    // Snapshot of the canonical edge set, so forest membership tests see the
    // graph as it was on entry.
    let edge_snapshot: HashSet<EdgeId> = g.edge_ids().collect();

    let mut cost: Decoration<VertexId, u32> = Decoration::new();
    let mut predecessor: Decoration<VertexId, VertexId> = Decoration::new();
    let mut queued: Decoration<VertexId, HeapHandle> = Decoration::new();
    let mut visited: Decoration<EdgeId, bool> = Decoration::new();

    for &v in &vertices {
        cost.set(v, INFINITE_COST);
    }
    for &e in &edge_snapshot {
        visited.set(e, false);
    }
    cost.set(start, 0);

    let mut pq = AdaptableHeap::new();
    for &v in &vertices {
        let c = *cost.get(&v).expect("every vertex was seeded with a cost");
        queued.set(v, pq.insert(c, v));
    }

    let mut forest: Vec<EdgeId> = Vec::new();
    while let Some((_, v)) = pq.remove_min() {
        queued.remove(&v);
        if let Some(&p) = predecessor.get(&v) {
            // Edge identity depends on insertion order, so probe both
            // orientations and keep whichever belongs to the snapshot.
            for connection in [g.connecting_edge(p, v), g.connecting_edge(v, p)] {
                if let Ok(e) = connection {
                    if edge_snapshot.contains(&e) {
                        forest.push(e);
                        break;
                    }
                }
            }
        }
        for e in g.edges_into(v)? {
            if visited.set(e, true) == Some(true) {
                continue;
            }
            let u = g.opposite(v, e)?;
            if u == v {
                // Self-loop; can never lower its own vertex's cost.
                continue;
            }
            // Relax only vertices still waiting in the queue.
            let Some(&handle) = queued.get(&u) else {
                continue;
            };
            let weight = g.edge_label(e)?.unwrap_or(0);
            let current = *cost.get(&u).expect("every vertex was seeded with a cost");
            if weight < current {
                cost.set(u, weight);
                predecessor.set(u, v);
                pq.replace_key(handle, weight);
            }
        }
    }

    debug!(
        vertices = vertices.len(),
        edges = forest.len(),
        "minimum spanning forest complete"
    );
    Ok(forest)
}
