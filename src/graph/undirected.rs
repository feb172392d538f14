//! Undirected graph builder.
//!
//! Edges are unordered pairs stored in canonical orientation (`tail < head`).
//! Besides uniform bulk sampling, the builder offers a connectivity
//! enforcement pass built on [`DisjointSet`] and a handful of structured
//! generators (paths, cycles, stars, cliques, random forests and trees).

use std::collections::BTreeSet;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::{
    add_random_edges, triangular_edge, triangular_rank, Edge, Edges, GraphError, GraphView,
};
use crate::sample::RangeSampler;
use crate::unionfind::DisjointSet;

/// An undirected graph under construction.
///
/// The vertex count is fixed at creation; the edge set is duplicate-free,
/// self-loop-free and only ever grows. `(u, v)` and `(v, u)` denote the same
/// edge and are stored once, smaller index first.
///
/// # Example
///
/// ```
/// use graphgen::{RandomEngine, UndirectedGraph};
///
/// let mut rng = RandomEngine::new(1);
/// let mut graph = UndirectedGraph::new(10);
/// graph.add_edges(&mut rng, 20)?;
/// graph.connect(&mut rng);
///
/// assert!(graph.is_connected());
/// assert!(graph.edge_count() <= 28);
/// # Ok::<(), graphgen::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct UndirectedGraph {
    vertices: usize,
    edges: BTreeSet<Edge>,
}

impl UndirectedGraph {
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

    /// Maximum number of edges the graph can hold: `n(n-1)/2`.
    pub fn edge_capacity(&self) -> u64 {
        let n = self.vertices as u64;
        if n < 2 {
            0
        } else {
            n * (n - 1) / 2
        }
    }

    /// Iterates over the present edges in ascending canonical order.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self.edges.iter())
    }

    /// Whether an edge joins `tail` and `head`, in either orientation.
    pub fn contains_edge(&self, tail: usize, head: usize) -> bool {
        tail != head && self.edges.contains(&Edge::canonical(tail, head))
    }

    /// Adds the edge between `tail` and `head`.
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
        Ok(self.edges.insert(Edge::canonical(tail, head)))
    }

    /// Adds `count` new edges chosen uniformly at random from the edges
    /// currently absent.
    ///
    /// Every size-`count` subset of the absent edges is equally likely. The
    /// call either commits all `count` edges or fails without modifying the
    /// graph.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::TooManyEdges`] if fewer than `count` edges
    /// are absent.
    ///
    /// # Example
    ///
    /// ```
    /// use graphgen::{RandomEngine, UndirectedGraph};
    ///
    /// let mut rng = RandomEngine::new(7);
    /// let mut graph = UndirectedGraph::new(6);
    /// graph.add_edges(&mut rng, 10)?;
    ///
    /// assert_eq!(graph.edge_count(), 10);
    /// assert!(graph.add_edges(&mut rng, 6).is_err()); // only 5 remain
    /// # Ok::<(), graphgen::GraphError>(())
    /// ```
    pub fn add_edges<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), GraphError> {
        let capacity = self.edge_capacity();
        add_random_edges(
            rng,
            &mut self.edges,
            count,
            capacity,
            |_| true,
            triangular_rank,
            triangular_edge,
        )
    }

    /// Makes the graph connected by adding the minimum number of edges.
    ///
    /// Present edges are folded into a [`DisjointSet`]; one representative
    /// per component is then picked by scanning the vertices in a seeded
    /// random shuffle, and each representative after the first is joined to
    /// a uniformly chosen earlier one. Exactly `components - 1` edges are
    /// added, none of which can collide with a present edge. The selection
    /// is arbitrary but deterministic given the seed.
    ///
    /// Graphs with fewer than two vertices are already connected and are
    /// left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use graphgen::{RandomEngine, UndirectedGraph};
    ///
    /// let mut rng = RandomEngine::new(3);
    /// let mut graph = UndirectedGraph::new(10);
    /// graph.connect(&mut rng);
    ///
    /// assert!(graph.is_connected());
    /// assert_eq!(graph.edge_count(), 9);
    /// ```
    pub fn connect<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.vertices < 2 {
            return;
        }

        let mut components = DisjointSet::new(self.vertices);
        for edge in &self.edges {
            components.join(edge.tail, edge.head);
        }

        let mut order: Vec<usize> = (0..self.vertices).collect();
        order.shuffle(rng);

        // The first vertex seen from each component represents it. Joining
        // each new representative to a random earlier one samples a uniform
        // random tree shape over the components.
        let base = order[0];
        let mut representatives = vec![base];
        for &vertex in &order[1..] {
            if components.join(base, vertex) {
                let anchor = representatives[rng.random_range(0..representatives.len())];
                self.edges.insert(Edge::canonical(anchor, vertex));
                representatives.push(vertex);
            }
        }
    }

    /// Whether the graph consists of a single connected component.
    ///
    /// Graphs with fewer than two vertices count as connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices < 2 {
            return true;
        }
        let mut components = DisjointSet::new(self.vertices);
        for edge in &self.edges {
            components.join(edge.tail, edge.head);
        }
        components.set_count() == 1
    }

    /// Adds the path `0 - 1 - ... - n-1`.
    pub fn add_path(&mut self) {
        for (a, b) in (0..self.vertices).tuple_windows() {
            self.edges.insert(Edge::new(a, b));
        }
    }

    /// Adds the cycle `0 - 1 - ... - n-1 - 0`.
    ///
    /// On two vertices this degenerates into the single edge `0 - 1`.
    pub fn add_cycle(&mut self) {
        self.add_path();
        if self.vertices >= 2 {
            self.edges.insert(Edge::canonical(self.vertices - 1, 0));
        }
    }

    /// Adds an edge from vertex `0` to every other vertex.
    pub fn add_star(&mut self) {
        for vertex in 1..self.vertices {
            self.edges.insert(Edge::new(0, vertex));
        }
    }

    /// Adds every possible edge, saturating the graph.
    pub fn add_clique(&mut self) {
        for (u, v) in (0..self.vertices).tuple_combinations() {
            self.edges.insert(Edge::new(u, v));
        }
    }

    /// Adds `count` edges forming a random forest.
    ///
    /// `count` distinct vertices are sampled from `1..n`; each is attached
    /// to a uniformly chosen lower-indexed vertex, so no cycles can form
    /// among the added edges. Intended for empty builders: an added edge
    /// that already exists is not duplicated, reducing the effective count.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::TooManyEdges`] if `count` exceeds `n - 1`,
    /// the size of a spanning tree.
    pub fn add_random_forest<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<(), GraphError> {
        let slots = self.vertices.saturating_sub(1);
        if count > slots {
            return Err(GraphError::TooManyEdges {
                requested: count,
                available: slots as u64,
            });
        }
        if count == 0 {
            return Ok(());
        }

        let Ok(sampler) = RangeSampler::new(rng, count, 0, slots as i64) else {
            unreachable!("forest size checked against the vertex count");
        };
        for picked in sampler {
            let child = picked as usize + 1;
            let parent = rng.random_range(0..=picked) as usize;
            self.edges.insert(Edge::canonical(parent, child));
        }
        Ok(())
    }

    /// Adds `n - 1` edges forming a uniform random spanning tree shape.
    ///
    /// Equivalent to [`add_random_forest`](Self::add_random_forest) with a
    /// full complement of edges; on an empty builder the result is
    /// connected.
    pub fn add_random_tree<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = self.vertices.saturating_sub(1);
        let Ok(()) = self.add_random_forest(rng, count) else {
            unreachable!("a spanning tree never exceeds the forest capacity");
        };
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

impl GraphView for UndirectedGraph {
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
