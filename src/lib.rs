//! Fixed-capacity adjacency-matrix graphs with two classical algorithms on
//! top: a Prim-Jarnik minimum spanning forest and an iterative page rank.
//!
//! The storage engine is [`MatrixGraph`]: vertices are dense matrix slots
//! addressed by a recycled integer number, which keeps adjacency and
//! connecting-edge queries O(1).  The algorithms talk to the graph only
//! through its public contract and attach their transient state through
//! [`Decoration`] side tables.

pub mod adaptable_heap;
pub mod decoration;
pub mod error;
pub mod matrix_graph;
pub mod msf;
pub mod pagerank;

mod graph_id;
mod ids;
mod numbering;

pub use adaptable_heap::{AdaptableHeap, HeapHandle};
pub use decoration::Decoration;
pub use error::GraphError;
pub use ids::{EdgeId, VertexId};
pub use matrix_graph::{MAX_VERTICES, MatrixGraph};
pub use msf::min_spanning_forest;
pub use pagerank::PageRank;
