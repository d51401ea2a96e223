use std::sync::atomic::{AtomicUsize, Ordering};

/// A global counter for graph identifiers.  We assume no two graphs will have
/// the same identifier; if the counter ever wrapped, the only impact would be
/// false negatives when rejecting handles that belong to another graph.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance, carried by every vertex and edge
/// handle so the engine can reject foreign handles.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        GraphId::new()
    }
}
