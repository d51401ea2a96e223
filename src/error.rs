use thiserror::Error;

/// Errors reported by graph operations.
///
/// Handle validation distinguishes two cases: a handle that does not name a
/// live member of the queried graph (stale after removal, or issued by a
/// different graph) is `InvalidVertex`/`InvalidEdge`, while a well-formed
/// query whose answer does not exist is `NoSuchEdge`/`NoSuchVertex`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex handle is not a live member of this graph.
    #[error("vertex handle is not a live member of this graph")]
    InvalidVertex,
    /// The edge handle is not a live member of this graph.
    #[error("edge handle is not a live member of this graph")]
    InvalidEdge,
    /// No edge connects the queried pair of vertices.
    #[error("no edge connects the queried vertices")]
    NoSuchEdge,
    /// The vertex is not an endpoint of the edge.
    #[error("vertex is not an endpoint of the edge")]
    NoSuchVertex,
    /// The operation requires the other directedness mode.
    #[error("operation is not defined for this graph's directedness")]
    Direction,
}
