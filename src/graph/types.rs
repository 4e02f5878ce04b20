//! Static adjacency structure.

use crate::error::InstanceLoadError;

/// An undirected simple graph over vertices `0..n`.
///
/// Built once per instance and read-only afterwards; share it by
/// reference (or `Arc`) across any number of concurrent decode calls.
///
/// Adjacency lists are sorted and free of duplicates and self-loops, so
/// every neighbor contributes exactly once to coverage bookkeeping.
///
/// # Examples
///
/// ```
/// use domset_rk::graph::Graph;
///
/// let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.neighbors(1), &[0, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    num_edges: usize,
}

impl Graph {
    /// Builds a graph from an edge list over `vertex_count` vertices.
    ///
    /// Every endpoint must lie in `[0, vertex_count)`. Self-loops are
    /// dropped and repeated edges are collapsed.
    ///
    /// # Errors
    ///
    /// [`InstanceLoadError::NoVertices`] when `vertex_count == 0`,
    /// [`InstanceLoadError::TooManyVertices`] when the adjacency table
    /// cannot be allocated,
    /// [`InstanceLoadError::InvalidEdge`] for the first out-of-range edge.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, InstanceLoadError> {
        if vertex_count == 0 {
            return Err(InstanceLoadError::NoVertices);
        }

        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| InstanceLoadError::TooManyVertices { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);
        let mut self_loops = 0usize;

        for (index, &(u, v)) in edges.iter().enumerate() {
            if u >= vertex_count || v >= vertex_count {
                return Err(InstanceLoadError::InvalidEdge {
                    index,
                    u: u as i64,
                    v: v as i64,
                    vertex_count,
                });
            }
            if u == v {
                self_loops += 1;
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut half_edges = 0usize;
        let mut duplicates = 0usize;
        for neighbors in adjacency.iter_mut() {
            let before = neighbors.len();
            neighbors.sort_unstable();
            neighbors.dedup();
            duplicates += before - neighbors.len();
            half_edges += neighbors.len();
        }

        if self_loops > 0 || duplicates > 0 {
            log::debug!(
                "dropped {} self-loop(s) and {} duplicate edge(s)",
                self_loops,
                duplicates / 2
            );
        }

        Ok(Self {
            adjacency,
            num_edges: half_edges / 2,
        })
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct undirected edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the graph holds no vertices (never built or torn down).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the sorted neighbors of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v >= self.num_vertices()`.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Returns `true` if `v` has no neighbors and can only dominate itself.
    pub fn is_isolated(&self, v: usize) -> bool {
        self.adjacency[v].is_empty()
    }

    /// Returns the largest degree, or 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterates over every edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Releases all adjacency storage.
    ///
    /// Idempotent, and a no-op on a graph that was never built. Afterwards
    /// the graph has zero vertices, so any decode against it is rejected.
    pub fn teardown(&mut self) {
        if self.adjacency.is_empty() {
            return;
        }
        log::debug!(
            "releasing graph with {} vertices and {} edges",
            self.adjacency.len(),
            self.num_edges
        );
        self.adjacency = Vec::new();
        self.num_edges = 0;
    }
}
