// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph model: vertices, adjacency and the vertex arena.
//!
//! The graph owns all vertices in an insertion-ordered arena; adjacency
//! lists hold [`VertexId`] indices into that arena rather than owning
//! references, so cyclic adjacency is representable without any reference
//! counting and edges can never outlive their endpoints.
//!
//! The structure is built once by the input layer and then frozen: the
//! solver never adds vertices or edges, it only mutates its own per-vertex
//! search state (see [`crate::state`]).

pub mod color;
pub mod errors;

pub use color::{Color, Palette};
pub use errors::GraphError;

use std::collections::HashMap;

/// Index of a vertex within its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(u32);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The vertex's position in insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single vertex: a stable name plus its adjacency list.
#[derive(Debug)]
pub struct Vertex {
    name: String,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            neighbors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbor ids in the order the edges were added.
    ///
    /// Adjacency is directional per connect call; duplicate edges and
    /// self-loops are tolerated and simply inflate the degree.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Static degree: the number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// An insertion-ordered collection of vertices, reachable by name and by
/// position.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    ids_by_name: HashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph with room for `count` vertices.
    pub fn with_capacity(count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(count),
            ids_by_name: HashMap::with_capacity(count),
        }
    }

    /// Add a vertex with a unique name.
    ///
    /// Name collisions are rejected: the existing vertex is left untouched
    /// and [`GraphError::DuplicateName`] is returned.
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexId, GraphError> {
        if self.ids_by_name.contains_key(name) {
            return Err(GraphError::DuplicateName {
                name: name.to_string(),
            });
        }
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(name));
        self.ids_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Create an edge `from -> to` (and `to -> from` when bidirectional).
    ///
    /// Fails with [`GraphError::NullTarget`] if either endpoint is absent;
    /// no edge is created in that case.
    pub fn connect(&mut self, from: &str, to: &str, bidirectional: bool) -> Result<(), GraphError> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        self.vertices[from_id.index()].neighbors.push(to_id);
        if bidirectional {
            self.vertices[to_id.index()].neighbors.push(from_id);
        }
        Ok(())
    }

    fn resolve(&self, name: &str) -> Result<VertexId, GraphError> {
        self.ids_by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NullTarget {
                name: name.to_string(),
            })
    }

    /// Look up a vertex id by name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.ids_by_name.get(name).copied()
    }

    /// Get a vertex by id.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut g = Graph::new();
        let a = g.add_vertex("A").unwrap();
        let b = g.add_vertex("B").unwrap();

        assert_eq!(g.len(), 2);
        assert_eq!(g.vertex_id("A"), Some(a));
        assert_eq!(g.vertex_id("B"), Some(b));
        assert_eq!(g.vertex(a).name(), "A");
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut g = Graph::new();
        let x = g.add_vertex("X").unwrap();
        g.add_vertex("Y").unwrap();
        g.connect("X", "Y", true).unwrap();

        let err = g.add_vertex("X").unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateName {
                name: "X".to_string()
            }
        );

        // The first vertex and its adjacency are untouched.
        assert_eq!(g.len(), 2);
        assert_eq!(g.vertex(x).degree(), 1);
        assert_eq!(g.vertex_id("X"), Some(x));
    }

    #[test]
    fn test_connect_directional() {
        let mut g = Graph::new();
        let a = g.add_vertex("A").unwrap();
        let b = g.add_vertex("B").unwrap();

        g.connect("A", "B", false).unwrap();
        assert_eq!(g.vertex(a).neighbors(), &[b]);
        assert!(g.vertex(b).neighbors().is_empty());

        g.connect("B", "A", false).unwrap();
        assert_eq!(g.vertex(b).neighbors(), &[a]);
    }

    #[test]
    fn test_connect_bidirectional() {
        let mut g = Graph::new();
        let a = g.add_vertex("A").unwrap();
        let b = g.add_vertex("B").unwrap();

        g.connect("A", "B", true).unwrap();
        assert_eq!(g.vertex(a).neighbors(), &[b]);
        assert_eq!(g.vertex(b).neighbors(), &[a]);
    }

    #[test]
    fn test_connect_missing_endpoint() {
        let mut g = Graph::new();
        let a = g.add_vertex("A").unwrap();

        let err = g.connect("A", "Z", true).unwrap_err();
        assert_eq!(
            err,
            GraphError::NullTarget {
                name: "Z".to_string()
            }
        );
        // No edge was created.
        assert_eq!(g.vertex(a).degree(), 0);
    }

    #[test]
    fn test_duplicate_edges_inflate_degree() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        g.add_vertex("B").unwrap();
        g.connect("A", "B", false).unwrap();
        g.connect("A", "B", false).unwrap();

        let a = g.vertex_id("A").unwrap();
        assert_eq!(g.vertex(a).degree(), 2);
    }
}
