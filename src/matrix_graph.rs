//! The graph storage engine: a fixed-capacity adjacency matrix of edge keys,
//! with vertex numbers recycled through a LIFO free list.
//!
//! Cell `[i][j]` holds the key of the edge directed from the vertex numbered
//! `i` to the vertex numbered `j`, which gives O(1) adjacency and
//! connecting-edge queries at the cost of O(capacity) row/column scans for
//! incidence queries and vertex removal.
//!
//! In undirected mode an inserted edge populates both mirrored cells with two
//! distinct edge records carrying the same label and swapped endpoints; only
//! the forward record is *canonical* and visible through [`MatrixGraph::edge_ids`].
//! The mirror exists for adjacency queries, so `connecting_edge(v1, v2)` and
//! `connecting_edge(v2, v1)` may return different handles for the same
//! logical edge.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::{
    error::GraphError,
    graph_id::GraphId,
    ids::{EdgeId, VertexId},
    numbering::Numbering,
};

/// Maximum number of vertices a graph can hold at any one time.  Exceeding it
/// is out of contract and asserted, not signalled.
pub const MAX_VERTICES: usize = 100;

struct VertexSlot<V> {
    element: V,
    name: Option<String>,
}

struct EdgeRecord {
    label: Option<u32>,
    // Endpoint numbers in insertion order.
    one: usize,
    two: usize,
    canonical: bool,
    mirror: Option<u32>,
}

/// An adjacency-matrix graph over elements of type `V`, directed or
/// undirected, holding at most [`MAX_VERTICES`] vertices at a time.
pub struct MatrixGraph<V> {
    slots: Vec<Option<VertexSlot<V>>>,
    edges: HashMap<u32, EdgeRecord>,
    matrix: Vec<Option<u32>>,
    directed: bool,
    numbering: Numbering,
    next_edge_key: u32,
    num_vertices: usize,
    id: GraphId,
}

impl<V> MatrixGraph<V> {
    /// Creates an empty graph.  `directed` fixes the edge semantics until the
    /// next [`toggle_directed`](Self::toggle_directed).
    pub fn new(directed: bool) -> Self {
        MatrixGraph {
            slots: (0..MAX_VERTICES).map(|_| None).collect(),
            edges: HashMap::new(),
            matrix: vec![None; MAX_VERTICES * MAX_VERTICES],
            directed,
            numbering: Numbering::new(MAX_VERTICES),
            next_edge_key: 0,
            num_vertices: 0,
            id: GraphId::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn capacity(&self) -> usize {
        MAX_VERTICES
    }

    /// Number of live vertices.  O(1).
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Iterates over all live vertices, in no particular order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(number, slot)| slot.as_ref().map(|_| VertexId::new(number, self.id)))
    }

    /// Iterates over all live canonical edges, in no particular order.  The
    /// mirror records of undirected edges are not reported.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .filter(|(_, record)| record.canonical)
            .map(|(&key, _)| EdgeId::new(key, self.id))
    }

    /// Inserts a vertex, assigning it the most recently freed number if any,
    /// else the lowest never-issued one.  O(1).
    pub fn add_vertex(&mut self, element: V) -> VertexId {
        self.insert_slot(element, None)
    }

    /// Inserts a vertex with a display name, used by the page-rank denylist.
    pub fn add_vertex_named(&mut self, element: V, name: impl Into<String>) -> VertexId {
        self.insert_slot(element, Some(name.into()))
    }

    fn insert_slot(&mut self, element: V, name: Option<String>) -> VertexId {
        let number = self.numbering.allocate();
        self.slots[number] = Some(VertexSlot { element, name });
        self.num_vertices += 1;
        trace!(number, "inserted vertex");
        VertexId::new(number, self.id)
    }

    /// Borrows the element of a live vertex.
    pub fn vertex_element(&self, v: VertexId) -> Result<&V, GraphError> {
        let number = self.check_vertex(v)?;
        Ok(&self.slot(number).element)
    }

    /// The display name of a live vertex, if it has one.
    pub fn vertex_name(&self, v: VertexId) -> Result<Option<&str>, GraphError> {
        let number = self.check_vertex(v)?;
        Ok(self.slot(number).name.as_deref())
    }

    /// Inserts an edge from `v1` to `v2`.  In undirected mode both mirrored
    /// matrix cells are populated with two distinct records; the returned
    /// handle names the forward one.  Self-loops are permitted.  An existing
    /// cell is overwritten silently.  O(1).
    pub fn add_edge(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        label: Option<u32>,
    ) -> Result<EdgeId, GraphError> {
        let n1 = self.check_vertex(v1)?;
        let n2 = self.check_vertex(v2)?;
        let key = self.next_edge_key;
        self.next_edge_key += 1;
        let mirror = if self.directed {
            None
        } else {
            let mirror_key = self.next_edge_key;
            self.next_edge_key += 1;
            Some(mirror_key)
        };
        self.edges.insert(
            key,
            EdgeRecord {
                label,
                one: n1,
                two: n2,
                canonical: true,
                mirror,
            },
        );
        self.matrix[Self::cell(n1, n2)] = Some(key);
        if let Some(mirror_key) = mirror {
            self.edges.insert(
                mirror_key,
                EdgeRecord {
                    label,
                    one: n2,
                    two: n1,
                    canonical: false,
                    mirror: Some(key),
                },
            );
            self.matrix[Self::cell(n2, n1)] = Some(mirror_key);
        }
        trace!(from = n1, into = n2, ?label, "inserted edge");
        Ok(EdgeId::new(key, self.id))
    }

    /// The label of a live edge, which may be absent.
    pub fn edge_label(&self, e: EdgeId) -> Result<Option<u32>, GraphError> {
        let key = self.check_edge(e)?;
        Ok(self.record(key).label)
    }

    /// The two endpoints of a live edge, in insertion order.  O(1).
    pub fn end_vertices(&self, e: EdgeId) -> Result<(VertexId, VertexId), GraphError> {
        let key = self.check_edge(e)?;
        let record = self.record(key);
        Ok((
            VertexId::new(record.one, self.id),
            VertexId::new(record.two, self.id),
        ))
    }

    /// Removes a vertex and every edge incident to it, then returns the
    /// vertex's number to the free list.  O(capacity).  Returns the element.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<V, GraphError> {
        let number = self.check_vertex(v)?;
        for i in 0..MAX_VERTICES {
            if let Some(key) = self.matrix[Self::cell(i, number)].take() {
                self.drop_edge_pair(key);
            }
            if let Some(key) = self.matrix[Self::cell(number, i)].take() {
                self.drop_edge_pair(key);
            }
        }
        let slot = self.slots[number].take().expect("vertex was checked live");
        self.numbering.release(number);
        self.num_vertices -= 1;
        debug!(number, "removed vertex and incident edges");
        Ok(slot.element)
    }

    /// Removes an edge (given by either its forward or mirror handle) from
    /// the edge table and from the matrix.  A matrix cell is only cleared if
    /// it actually references this edge, so an unrelated edge occupying the
    /// reverse cell of a directed graph is never disturbed.  O(1).  Returns
    /// the label.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<Option<u32>, GraphError> {
        let mut key = self.check_edge(e)?;
        // Normalize a mirror handle to its canonical partner.
        let record = self.record(key);
        if !record.canonical {
            key = record.mirror.expect("mirror records link their partner");
        }
        let record = self.record(key);
        let (one, two, mirror, label) = (record.one, record.two, record.mirror, record.label);
        let forward = Self::cell(one, two);
        if self.matrix[forward] == Some(key) {
            self.matrix[forward] = None;
        }
        if let Some(mirror_key) = mirror {
            let reverse = Self::cell(two, one);
            if self.matrix[reverse] == Some(mirror_key) {
                self.matrix[reverse] = None;
            }
            self.edges.remove(&mirror_key);
        }
        self.edges.remove(&key);
        trace!(from = one, into = two, "removed edge");
        Ok(label)
    }

    /// The edge connecting `v1` to `v2`.  Directed mode consults the one
    /// cell; undirected mode requires both mirrored cells to be populated.
    /// O(1).
    pub fn connecting_edge(&self, v1: VertexId, v2: VertexId) -> Result<EdgeId, GraphError> {
        let n1 = self.check_vertex(v1)?;
        let n2 = self.check_vertex(v2)?;
        let forward = self.matrix[Self::cell(n1, n2)];
        let connected = if self.directed {
            forward
        } else {
            forward.filter(|_| self.matrix[Self::cell(n2, n1)].is_some())
        };
        connected
            .map(|key| EdgeId::new(key, self.id))
            .ok_or(GraphError::NoSuchEdge)
    }

    /// The edges incoming to `v`.  In undirected mode this is the set of
    /// canonical edges incident to `v`.  O(capacity).
    pub fn edges_into(&self, v: VertexId) -> Result<Vec<EdgeId>, GraphError> {
        let number = self.check_vertex(v)?;
        if self.directed {
            Ok((0..MAX_VERTICES)
                .filter_map(|i| self.matrix[Self::cell(i, number)])
                .map(|key| EdgeId::new(key, self.id))
                .collect())
        } else {
            Ok(self.incident_edges(number))
        }
    }

    /// The edges outgoing from `v`.  In undirected mode this is the same set
    /// as [`edges_into`](Self::edges_into).  O(capacity).
    pub fn edges_from(&self, v: VertexId) -> Result<Vec<EdgeId>, GraphError> {
        let number = self.check_vertex(v)?;
        if self.directed {
            Ok((0..MAX_VERTICES)
                .filter_map(|i| self.matrix[Self::cell(number, i)])
                .map(|key| EdgeId::new(key, self.id))
                .collect())
        } else {
            Ok(self.incident_edges(number))
        }
    }

    /// Counts the edges leaving `v`.  Only meaningful for directed graphs;
    /// undirected graphs get `GraphError::Direction`.  O(capacity).
    pub fn num_edges_from(&self, v: VertexId) -> Result<usize, GraphError> {
        let number = self.check_vertex(v)?;
        if !self.directed {
            return Err(GraphError::Direction);
        }
        Ok((0..MAX_VERTICES)
            .filter(|&i| self.matrix[Self::cell(number, i)].is_some())
            .count())
    }

    /// The vertex on the other side of `e` from `v`.  Uses the edge record's
    /// own endpoints, not the matrix.  O(1).
    pub fn opposite(&self, v: VertexId, e: EdgeId) -> Result<VertexId, GraphError> {
        let number = self.check_vertex(v)?;
        let key = self.check_edge(e)?;
        let record = self.record(key);
        if record.one == number {
            Ok(VertexId::new(record.two, self.id))
        } else if record.two == number {
            Ok(VertexId::new(record.one, self.id))
        } else {
            Err(GraphError::NoSuchVertex)
        }
    }

    /// True iff the matrix cell from `v1` to `v2` is populated.  Directed
    /// semantics in both modes; undirected insertion populates both mirrored
    /// cells, so undirected adjacency is symmetric by construction.  O(1).
    pub fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> Result<bool, GraphError> {
        let n1 = self.check_vertex(v1)?;
        let n2 = self.check_vertex(v2)?;
        Ok(self.matrix[Self::cell(n1, n2)].is_some())
    }

    /// Clears the graph, then flips the directedness flag.
    pub fn toggle_directed(&mut self) {
        self.clear();
        self.directed = !self.directed;
        debug!(directed = self.directed, "toggled directedness");
    }

    /// Removes every vertex and edge and resets the numbering, so the first
    /// vertex inserted afterwards gets number 0 again.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.edges.clear();
        self.matrix.fill(None);
        self.numbering.reset();
        self.num_vertices = 0;
        debug!("cleared graph");
    }

    /// Canonical edges incident to the vertex numbered `number`, collected
    /// from both the row and the column and deduplicated.  Mirror records
    /// are filtered out, so an undirected self-loop (whose only cell holds
    /// the mirror) reports no incidence, which keeps it out of spanning
    /// computations.
    fn incident_edges(&self, number: usize) -> Vec<EdgeId> {
        let mut keys: HashSet<u32> = HashSet::new();
        for i in 0..MAX_VERTICES {
            for cell in [Self::cell(i, number), Self::cell(number, i)] {
                if let Some(key) = self.matrix[cell] {
                    if self.record(key).canonical {
                        keys.insert(key);
                    }
                }
            }
        }
        keys.into_iter()
            .map(|key| EdgeId::new(key, self.id))
            .collect()
    }

    fn cell(from: usize, into: usize) -> usize {
        from * MAX_VERTICES + into
    }

    fn slot(&self, number: usize) -> &VertexSlot<V> {
        self.slots[number].as_ref().expect("vertex was checked live")
    }

    fn record(&self, key: u32) -> &EdgeRecord {
        self.edges.get(&key).expect("edge was checked live")
    }

    /// Validates a vertex handle and returns its number.
    fn check_vertex(&self, v: VertexId) -> Result<usize, GraphError> {
        if v.graph_id != self.id || self.slots.get(v.number).is_none_or(|slot| slot.is_none()) {
            return Err(GraphError::InvalidVertex);
        }
        Ok(v.number)
    }

    /// Validates an edge handle and returns its key.
    fn check_edge(&self, e: EdgeId) -> Result<u32, GraphError> {
        if e.graph_id != self.id || !self.edges.contains_key(&e.key) {
            return Err(GraphError::InvalidEdge);
        }
        Ok(e.key)
    }

    /// Drops an edge record and its mirror from the edge table without
    /// touching the matrix; used by `remove_vertex`, whose row/column scan
    /// clears the cells itself.  Idempotent, since both cells of a mirrored
    /// pair are visited by the scan.
    fn drop_edge_pair(&mut self, key: u32) {
        if let Some(record) = self.edges.remove(&key) {
            if let Some(mirror_key) = record.mirror {
                self.edges.remove(&mirror_key);
            }
        }
    }
}
