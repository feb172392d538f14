//! Directed graph builder.
//!
//! Edges are ordered pairs: `(u, v)` and `(v, u)` are distinct and may both
//! be present. There is no connectivity enforcement for directed graphs;
//! strong connectivity is out of scope.

use std::collections::BTreeSet;

use itertools::Itertools;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::{
    add_random_edges, triangular_edge, triangular_rank, Edge, Edges, GraphError, GraphView,
};

/// A directed graph under construction.
///
/// The vertex count is fixed at creation; the edge set is duplicate-free,
/// self-loop-free and only ever grows.
///
/// # Example
///
/// ```
/// use graphgen::{DirectedGraph, RandomEngine};
///
/// let mut rng = RandomEngine::new(1);
/// let mut graph = DirectedGraph::new(5);
/// graph.add_edges(&mut rng, 20)?;
///
/// // All 20 ordered pairs on 5 vertices are present.
/// assert_eq!(graph.edge_count() as u64, graph.edge_capacity());
/// # Ok::<(), graphgen::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct DirectedGraph {
    vertices: usize,
    edges: BTreeSet<Edge>,
}

impl DirectedGraph {
    /// Creates an empty graph on `vertices` vertices.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: BTreeSet::new(),
        }
    }

    /// Number of vertices, fixed at construction.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Number of edges currently present.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Maximum number of edges the graph can hold: `n(n-1)`.
    pub fn edge_capacity(&self) -> u64 {
        let n = self.vertices as u64;
        if n < 2 {
            0
        } else {
            n * (n - 1)
        }
    }

    /// Iterates over the present edges in ascending `(tail, head)` order.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self.edges.iter())
    }

    /// Whether the edge from `tail` to `head` is present. The opposite
    /// orientation does not count.
    pub fn contains_edge(&self, tail: usize, head: usize) -> bool {
        self.edges.contains(&Edge::new(tail, head))
    }

    /// Adds the edge from `tail` to `head`.
    ///
    /// Returns whether the edge was absent before the call.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::OutOfRange`] if either endpoint is not a
    /// vertex, and with [`GraphError::SelfLoop`] if both endpoints coincide.
    pub fn add_edge(&mut self, tail: usize, head: usize) -> Result<bool, GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        if tail == head {
            return Err(GraphError::SelfLoop { vertex: tail });
        }
        Ok(self.edges.insert(Edge::new(tail, head)))
    }

    /// Adds `count` new edges chosen uniformly at random from the ordered
    /// pairs currently absent.
    ///
    /// Every size-`count` subset of the absent edges is equally likely. The
    /// call either commits all `count` edges or fails without modifying the
    /// graph.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::TooManyEdges`] if fewer than `count` edges
    /// are absent.
    pub fn add_edges<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), GraphError> {
        let capacity = self.edge_capacity();
        let n = self.vertices as u64;
        add_random_edges(
            rng,
            &mut self.edges,
            count,
            capacity,
            |_| true,
            move |edge| {
                edge.tail as u64 * (n - 1) + edge.head as u64 - u64::from(edge.head > edge.tail)
            },
            move |rank| {
                let tail = rank / (n - 1);
                let offset = rank % (n - 1);
                Edge {
                    tail: tail as usize,
                    head: (offset + u64::from(offset >= tail)) as usize,
                }
            },
        )
    }

    /// Adds `count` random edges oriented from higher to lower vertex
    /// indices, keeping the graph acyclic if it only holds such edges.
    ///
    /// The edges are chosen uniformly among the absent `tail > head` pairs;
    /// forward-oriented edges already present are ignored by the sampling.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::TooManyEdges`] if fewer than `count` of the
    /// `n(n-1)/2` back-oriented edges are absent.
    pub fn add_random_dag<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), GraphError> {
        let n = self.vertices as u64;
        let capacity = if n < 2 { 0 } else { n * (n - 1) / 2 };
        add_random_edges(
            rng,
            &mut self.edges,
            count,
            capacity,
            |edge| edge.tail > edge.head,
            |edge| triangular_rank(edge.reversed()),
            |rank| triangular_edge(rank).reversed(),
        )
    }

    /// Adds the path `0 -> 1 -> ... -> n-1`.
    pub fn add_path(&mut self) {
        for (a, b) in (0..self.vertices).tuple_windows() {
            self.edges.insert(Edge::new(a, b));
        }
    }

    /// Adds the cycle `0 -> 1 -> ... -> n-1 -> 0`.
    pub fn add_cycle(&mut self) {
        self.add_path();
        if self.vertices >= 2 {
            self.edges.insert(Edge::new(self.vertices - 1, 0));
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertices {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertices: self.vertices,
            })
        }
    }
}

impl GraphView for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn edges(&self) -> Edges<'_> {
        self.edges()
    }

    fn contains_edge(&self, tail: usize, head: usize) -> bool {
        self.contains_edge(tail, head)
    }
}
