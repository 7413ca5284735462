//! Adjacency mapping with symmetric edge insertion.

use std::collections::HashMap;
use std::fmt;

/// Identifier of a graph vertex.
///
/// Vertices carry no payload beyond identity. Any integer is legal,
/// including negatives; vertices are created implicitly on first
/// reference.
pub type VertexId = i64;

/// An undirected graph stored as an adjacency list.
///
/// Each vertex maps to the ordered sequence of its neighbors. Insertion
/// order is preserved and determines the exploration order (and
/// tie-breaks) of every search strategy in this crate.
///
/// Parallel edges and self-loops are permitted and simply duplicate list
/// entries; visited-set bookkeeping in the traversals makes the
/// duplicates invisible in visitation order, though they do show in
/// [`entry_count`](Self::entry_count) and [`Display`](fmt::Display)
/// output.
///
/// # Examples
///
/// ```
/// use u_unisearch::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(1, 6);
///
/// assert_eq!(graph.neighbors(1), &[2, 6]);
/// assert_eq!(graph.neighbors(2), &[1]);
/// assert!(graph.neighbors(99).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adjacency: HashMap<VertexId, Vec<VertexId>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `vertex` exists, with an empty neighbor list if new.
    /// No-op when the vertex is already present.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds the undirected edge `u -- v`.
    ///
    /// Both endpoints are created if absent; `v` is appended to `u`'s
    /// neighbor list and `u` to `v`'s, preserving call order. A self-loop
    /// (`u == v`) performs both appends on the same list and so
    /// contributes two entries.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.adjacency.entry(u).or_default().push(v);
        self.adjacency.entry(v).or_default().push(u);
    }

    /// Ordered neighbors of `vertex`.
    ///
    /// An unknown vertex has no neighbors: the result is an empty slice,
    /// never an error.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// Whether `vertex` has been added, explicitly or via an edge.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Number of vertices in the store.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// True when no vertex has been added yet.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All vertices, in arbitrary map-iteration order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Total number of adjacency entries.
    ///
    /// Every `add_edge` call contributes two entries, self-loops and
    /// duplicates included.
    pub fn entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Discards all vertices and edges, returning the store to its
    /// freshly-constructed state.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl FromIterator<(VertexId, VertexId)> for Graph {
    /// Builds a graph from an edge list, one `add_edge` per pair.
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (u, v) in iter {
            graph.add_edge(u, v);
        }
        graph
    }
}

impl fmt::Display for Graph {
    /// One `vertex -> n n n` line per vertex, in map-iteration order
    /// (not stable across insertion orders).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex} ->")?;
            for neighbor in neighbors {
                write!(f, " {neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
