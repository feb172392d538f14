//! Proptest strategies for generating random graphs.
//!
//! The strategies derive a seed and size parameters from the proptest input,
//! then drive the builders through a [`RandomEngine`], so shrinking explores
//! smaller vertex counts and sparser graphs while every generated value
//! still satisfies the builder invariants.

use proptest::prelude::*;

use crate::{DirectedGraph, RandomEngine, UndirectedGraph};

prop_compose! {
    /// A random undirected graph.
    ///
    /// With at most `max_vertices` vertices and a uniformly chosen density
    /// of its possible edges.
    pub fn gen_undirected_graph(max_vertices: usize)(
        seed in any::<u64>(),
        vertices in 0..=max_vertices,
        density in 0.0..=1.0f64,
    ) -> UndirectedGraph {
        let mut rng = RandomEngine::new(seed);
        let mut graph = UndirectedGraph::new(vertices);
        let count = (graph.edge_capacity() as f64 * density) as usize;
        let Ok(()) = graph.add_edges(&mut rng, count) else {
            unreachable!("density never exceeds the edge capacity");
        };
        graph
    }
}

prop_compose! {
    /// A random directed graph.
    ///
    /// With at most `max_vertices` vertices and a uniformly chosen density
    /// of its possible edges.
    pub fn gen_directed_graph(max_vertices: usize)(
        seed in any::<u64>(),
        vertices in 0..=max_vertices,
        density in 0.0..=1.0f64,
    ) -> DirectedGraph {
        let mut rng = RandomEngine::new(seed);
        let mut graph = DirectedGraph::new(vertices);
        let count = (graph.edge_capacity() as f64 * density) as usize;
        let Ok(()) = graph.add_edges(&mut rng, count) else {
            unreachable!("density never exceeds the edge capacity");
        };
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::{gen_directed_graph, gen_undirected_graph};
    use crate::RandomEngine;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn undirected_invariants(graph in gen_undirected_graph(12)) {
            prop_assert!(graph.vertex_count() <= 12);
            prop_assert!(graph.edge_count() as u64 <= graph.edge_capacity());
            for edge in graph.edges() {
                prop_assert!(edge.tail < edge.head);
                prop_assert!(edge.head < graph.vertex_count());
            }
        }

        #[test]
        fn connecting_any_graph_succeeds(mut graph in gen_undirected_graph(12)) {
            let mut rng = RandomEngine::new(0);
            let components_bound = graph.vertex_count().max(1);
            let before = graph.edge_count();
            graph.connect(&mut rng);
            prop_assert!(graph.is_connected());
            prop_assert!(graph.edge_count() - before < components_bound);
        }

        #[test]
        fn directed_invariants(graph in gen_directed_graph(12)) {
            prop_assert!(graph.vertex_count() <= 12);
            prop_assert!(graph.edge_count() as u64 <= graph.edge_capacity());
            for edge in graph.edges() {
                prop_assert!(edge.tail != edge.head);
                prop_assert!(edge.tail < graph.vertex_count());
                prop_assert!(edge.head < graph.vertex_count());
            }
        }
    }
}
