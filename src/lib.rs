#![warn(missing_docs)]
//! `graphgen` is a library for generating synthetic graphs as programmatic
//! test data, with reproducible randomness and guaranteed structural
//! properties.
//!
//! Graphs are built incrementally: construct an [`UndirectedGraph`] or
//! [`DirectedGraph`] with a fixed vertex count, then add edges through bulk
//! random sampling ([`UndirectedGraph::add_edges`]), structured generators
//! (paths, cycles, stars, cliques, forests, DAGs) or explicit insertion. The
//! edge set is always duplicate-free and self-loop-free, and for undirected
//! graphs a single canonical orientation (`tail < head`) is stored. Bulk
//! sampling is exactly uniform over the absent edges and switches between
//! rejection sampling and complement enumeration so that it stays fast even
//! when the graph approaches saturation.
//!
//! All randomness flows through an explicitly owned [`RandomEngine`] (or any
//! other [`rand::Rng`]): the same seed and the same sequence of calls always
//! produce the same graph.
//!
//! The two lower-level building blocks are exposed as general-purpose
//! utilities: [`RangeSampler`] draws a uniform subset of fixed size from an
//! integer range, and [`DisjointSet`] is a union-find structure used to track
//! connectivity during construction.
//!
//! # Example
//!
//! ```
//! use graphgen::{DirectedGraph, RandomEngine, UndirectedGraph};
//!
//! let mut rng = RandomEngine::new(1);
//!
//! // Sample 20 of the 45 possible edges on 10 vertices, then connect.
//! let mut graph = UndirectedGraph::new(10);
//! graph.add_edges(&mut rng, 20)?;
//! graph.connect(&mut rng);
//!
//! assert!(graph.is_connected());
//! assert!(graph.edge_count() >= 20 && graph.edge_count() <= 28);
//! assert!(graph.edges().all(|e| e.tail < e.head));
//!
//! // A directed graph distinguishes the two orientations of a pair.
//! let mut digraph = DirectedGraph::new(5);
//! digraph.add_edges(&mut rng, 20)?;
//! assert_eq!(digraph.edge_count(), 20);
//! # Ok::<(), graphgen::GraphError>(())
//! ```
//!
//! # Features
//!
//! - `serde` enables serialization and deserialization of graphs and edges.
//! - `proptest` enables property-testing strategies that generate random
//!   graphs.

pub mod graph;
pub mod random;
pub mod sample;
pub mod unionfind;

#[cfg(feature = "proptest")]
pub mod proptest;

#[doc(inline)]
pub use crate::graph::{DirectedGraph, Edge, Edges, GraphError, GraphView, UndirectedGraph};
#[doc(inline)]
pub use crate::random::RandomEngine;
#[doc(inline)]
pub use crate::sample::{InvalidRange, RangeSampler};
#[doc(inline)]
pub use crate::unionfind::{DisjointSet, OutOfRange};
