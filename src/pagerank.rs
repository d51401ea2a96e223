//! Iterative page rank over a directed graph.
//!
//! A synchronous (Jacobi) fixed-point loop: every sweep computes all new
//! ranks from the previous snapshot, then compares the two snapshots whole.
//! There is no per-vertex early exit and no retry logic; a hard iteration cap
//! bounds the loop when the graph refuses to converge.
//!
//! Sink handling and denylisting are *structural graph mutations* performed
//! before iteration and never reverted, which is why [`PageRank::compute`]
//! takes the graph by `&mut`.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{error::GraphError, ids::VertexId, matrix_graph::MatrixGraph};

/// Probability that rank flows along graph links rather than uniformly.
pub const DAMPING_FACTOR: f64 = 0.85;
/// Iteration cap when convergence never happens.
pub const MAX_ITERATIONS: usize = 100;
/// Per-vertex rank movement below which a sweep counts as converged.
pub const CONVERGENCE_TOLERANCE: f64 = 0.01;

/// Configuration for the page-rank computation.
#[derive(Debug, Clone)]
pub struct PageRank {
    damping_factor: f64,
    max_iterations: usize,
    tolerance: f64,
    denylist: HashSet<String>,
}

impl Default for PageRank {
    fn default() -> Self {
        PageRank {
            damping_factor: DAMPING_FACTOR,
            max_iterations: MAX_ITERATIONS,
            tolerance: CONVERGENCE_TOLERANCE,
            denylist: HashSet::new(),
        }
    }
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses every vertex whose display name appears in `names` by
    /// inverting its incoming edges before iteration, forcing it toward the
    /// minimum achievable rank without removing it.
    pub fn with_denylist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Computes a rank in `[0, 1]` for every vertex of a directed graph; the
    /// ranks sum to 1 up to floating tolerance.
    ///
    /// Mutates the graph: sinks gain an unlabeled edge to every vertex
    /// (themselves included) and denylisted vertices have their incoming
    /// edges inverted.  A second
    /// run on the same graph therefore operates on the mutated structure.
    pub fn compute<V>(
        &self,
        g: &mut MatrixGraph<V>,
    ) -> Result<HashMap<VertexId, f64>, GraphError> {
        if !g.is_directed() {
            return Err(GraphError::Direction);
        }
        let vertices: Vec<VertexId> = g.vertex_ids().collect();
        if vertices.is_empty() {
            return Ok(HashMap::new());
        }
        let n = vertices.len() as f64;

        let mut previous: HashMap<VertexId, f64> =
            vertices.iter().map(|&v| (v, 1.0 / n)).collect();

        // Sinks are recorded before any structural mutation.
        let mut sinks: Vec<VertexId> = Vec::new();
        for &v in &vertices {
            if g.num_edges_from(v)? == 0 {
                sinks.push(v);
            }
        }

        self.invert_denylisted(g, &vertices)?;

        // Make sinks non-absorbing: one unlabeled outgoing edge to every
        // vertex, the sink itself included.  The self-edge matters: without
        // it a path A->B collapses into a symmetric 2-cycle and the sink
        // loses its rank advantage.
        for &sink in &sinks {
            for &v in &vertices {
                g.add_edge(sink, v, None)?;
            }
        }
        if !sinks.is_empty() {
            debug!(sinks = sinks.len(), "connected sink vertices");
        }

        for iteration in 0..self.max_iterations {
            let mut next: HashMap<VertexId, f64> = HashMap::with_capacity(vertices.len());
            for &v in &vertices {
                let mut link_sum = 0.0;
                for e in g.edges_into(v)? {
                    let u = g.opposite(v, e)?;
                    // `u` has at least the edge into `v` outgoing, so the
                    // divisor is never zero.
                    link_sum += previous[&u] / g.num_edges_from(u)? as f64;
                }
                next.insert(
                    v,
                    (1.0 - self.damping_factor) / n + self.damping_factor * link_sum,
                );
            }
            let worst_delta = vertices
                .iter()
                .map(|v| (next[v] - previous[v]).abs())
                .fold(0.0_f64, f64::max);
            debug!(iteration, worst_delta, "page rank sweep");
            if worst_delta <= self.tolerance {
                return Ok(next);
            }
            previous = next;
        }
        // Cap reached: the previous snapshot is the last fully-settled one.
        debug!(iterations = self.max_iterations, "page rank hit iteration cap");
        Ok(previous)
    }

    fn invert_denylisted<V>(
        &self,
        g: &mut MatrixGraph<V>,
        vertices: &[VertexId],
    ) -> Result<(), GraphError> {
        if self.denylist.is_empty() {
            return Ok(());
        }
        for &v in vertices {
            let denied = g
                .vertex_name(v)?
                .is_some_and(|name| self.denylist.contains(name));
            if !denied {
                continue;
            }
            let mut inverted = 0;
            for e in g.edges_into(v)? {
                let u = g.opposite(v, e)?;
                g.remove_edge(e)?;
                g.add_edge(v, u, None)?;
                inverted += 1;
            }
            debug!(vertex = ?v, inverted, "inverted incoming edges of denylisted vertex");
        }
        Ok(())
    }
}
