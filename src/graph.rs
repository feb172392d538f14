//! Random graph builders.
//!
//! This module defines the [`UndirectedGraph`] and [`DirectedGraph`]
//! builders together with their shared vocabulary: the [`Edge`] pair type,
//! the [`GraphError`] taxonomy and the [`GraphView`] read-out trait.
//!
//! A builder owns a fixed vertex count and a duplicate-free, self-loop-free
//! edge set that only ever grows. Bulk random insertion works on a
//! *linearized rank space*: each kind of graph defines a bijection between
//! the integers `0..capacity` and the valid edges, so that sampling edges
//! reduces to sampling integers. While plenty of capacity remains the
//! builders draw ranks by rejection; near saturation they enumerate the
//! complement of the present edge set through
//! [`RangeSampler::with_excluded`], which bounds the running time without
//! giving up exact uniformity.

pub mod directed;
pub mod undirected;

mod iter;

use std::collections::BTreeSet;

use rand::Rng;
use thiserror::Error;

use crate::sample::RangeSampler;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use directed::DirectedGraph;
pub use iter::Edges;
pub use undirected::UndirectedGraph;

/// An edge between two vertices of a generated graph.
///
/// Vertices are plain indices in `[0, n)` where `n` is the vertex count of
/// the owning graph. In an [`UndirectedGraph`] the stored orientation is
/// canonical (`tail < head`) and stands for both directions; in a
/// [`DirectedGraph`] the orientation is meaningful.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Edge {
    /// Source vertex.
    pub tail: usize,
    /// Target vertex.
    pub head: usize,
}

impl Edge {
    /// Creates an edge from `tail` to `head`.
    #[inline]
    pub fn new(tail: usize, head: usize) -> Self {
        Self { tail, head }
    }

    /// Returns the edge with its endpoints swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
        }
    }

    /// Canonical orientation for undirected storage: smaller index first.
    #[inline]
    pub(crate) fn canonical(a: usize, b: usize) -> Self {
        Self {
            tail: a.min(b),
            head: a.max(b),
        }
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((tail, head): (usize, usize)) -> Self {
        Self { tail, head }
    }
}

impl From<Edge> for (usize, usize) {
    #[inline]
    fn from(edge: Edge) -> Self {
        (edge.tail, edge.head)
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({}, {})", self.tail, self.head)
    }
}

/// Error generated when modifying a graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum GraphError {
    /// The requested number of edges exceeds the remaining capacity.
    #[error("cannot add {requested} edges: only {available} absent edges remain")]
    TooManyEdges { requested: usize, available: u64 },
    /// A vertex index is outside the graph.
    #[error("vertex {vertex} is out of range for a graph on {vertices} vertices")]
    OutOfRange { vertex: usize, vertices: usize },
    /// Both endpoints of an edge are the same vertex.
    #[error("cannot add a self-loop at vertex {vertex}")]
    SelfLoop { vertex: usize },
}

/// Read access to a generated graph.
///
/// Consumers that format or further process graphs can accept either kind
/// through this trait; the core supplies vertex counts and edge lists and
/// imposes no presentation format.
pub trait GraphView {
    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Number of edges currently present.
    fn edge_count(&self) -> usize;

    /// Iterates over the present edges in ascending `(tail, head)` order.
    fn edges(&self) -> Edges<'_>;

    /// Whether the given edge is present. Orientation-insensitive for
    /// undirected graphs.
    fn contains_edge(&self, tail: usize, head: usize) -> bool;
}

/// Adds `count` distinct absent edges, drawn uniformly from the rank space
/// `0..capacity` restricted by `in_space`.
///
/// `rank_of` and `edge_at` must be inverse bijections between the ranks and
/// the edges satisfying `in_space`; present edges outside the space (e.g.
/// forward edges while sampling a DAG's back edges) are left alone and do
/// not count against the capacity.
pub(crate) fn add_random_edges<R: Rng + ?Sized>(
    rng: &mut R,
    edges: &mut BTreeSet<Edge>,
    count: usize,
    capacity: u64,
    in_space: impl Fn(Edge) -> bool,
    rank_of: impl Fn(Edge) -> u64,
    edge_at: impl Fn(u64) -> Edge,
) -> Result<(), GraphError> {
    let present = edges.iter().filter(|&&edge| in_space(edge)).count() as u64;
    let available = capacity - present;
    if count as u64 > available {
        return Err(GraphError::TooManyEdges {
            requested: count,
            available,
        });
    }
    if count == 0 {
        return Ok(());
    }

    // Same density rule as the sampler: rejection needs headroom both in the
    // remaining capacity and in the raw rank space, otherwise it degrades
    // into a retry storm near saturation.
    if (count as u64) * 2 <= available && available * 2 >= capacity {
        let mut added = 0;
        while added < count {
            let edge = edge_at(rng.random_range(0..capacity));
            if edges.insert(edge) {
                added += 1;
            }
        }
    } else {
        let excluded = edges
            .iter()
            .filter(|&&edge| in_space(edge))
            .map(|&edge| rank_of(edge) as i64)
            .collect();
        let Ok(sampler) = RangeSampler::with_excluded(rng, count, 0, capacity as i64, excluded)
        else {
            unreachable!("sample count checked against the remaining capacity");
        };
        for rank in sampler {
            edges.insert(edge_at(rank as u64));
        }
    }

    Ok(())
}

/// Rank of a canonical `tail < head` pair in the triangular enumeration of
/// all such pairs: `(0,1), (0,2), (1,2), (0,3), ...`
pub(crate) fn triangular_rank(edge: Edge) -> u64 {
    let (u, v) = (edge.tail as u64, edge.head as u64);
    v * (v - 1) / 2 + u
}

/// Inverse of [`triangular_rank`].
pub(crate) fn triangular_edge(rank: u64) -> Edge {
    // Float estimate of the triangular root, corrected to the exact integer.
    let mut v = ((1.0 + (8.0 * rank as f64 + 1.0).sqrt()) / 2.0) as u64;
    v = v.max(1);
    while v * (v - 1) / 2 > rank {
        v -= 1;
    }
    while v * (v + 1) / 2 <= rank {
        v += 1;
    }
    Edge {
        tail: (rank - v * (v - 1) / 2) as usize,
        head: v as usize,
    }
}
