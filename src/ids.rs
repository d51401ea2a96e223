use std::fmt::Debug;

use derivative::Derivative;

use crate::graph_id::GraphId;

/// Handle for a live vertex.  Carries the vertex's matrix number and the
/// identity of the owning graph; operations reject handles issued by a
/// different graph with `GraphError::InvalidVertex`.
///
/// The graph id takes no part in hashing or ordering, so handles behave as
/// plain numbers inside decorations and priority queues.
#[derive(Derivative)]
#[derivative(Clone, Copy, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) number: usize,
    #[derivative(PartialOrd = "ignore", Ord = "ignore", Hash = "ignore")]
    pub(crate) graph_id: GraphId,
}

impl PartialEq for VertexId {
    fn eq(&self, other: &Self) -> bool {
        assert_eq!(self.graph_id, other.graph_id);
        self.number == other.number
    }
}

impl VertexId {
    pub(crate) fn new(number: usize, graph_id: GraphId) -> Self {
        Self { number, graph_id }
    }

    /// The vertex number: the index of this vertex in the adjacency matrix.
    /// Unique among live vertices and recycled after removal.
    pub fn number(&self) -> usize {
        self.number
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexId({})", self.number)
    }
}

/// Handle for a live edge.  Edge keys are issued from a monotonically
/// increasing counter and never recycled, so a stale handle can never alias a
/// newer edge.
#[derive(Derivative)]
#[derivative(Clone, Copy, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub(crate) key: u32,
    #[derivative(PartialOrd = "ignore", Ord = "ignore", Hash = "ignore")]
    pub(crate) graph_id: GraphId,
}

impl PartialEq for EdgeId {
    fn eq(&self, other: &Self) -> bool {
        assert_eq!(self.graph_id, other.graph_id);
        self.key == other.key
    }
}

impl EdgeId {
    pub(crate) fn new(key: u32, graph_id: GraphId) -> Self {
        Self { key, graph_id }
    }
}

impl Debug for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeId({})", self.key)
    }
}
