//! Edge reversal.

use crate::graph::DirectedGraph;

/// Returns a new graph with every edge of `graph` reversed.
///
/// For every edge `u -> v` of `graph` the result contains `v -> u`, and every
/// node of `graph` is a node of the result, including nodes without edges.
/// `graph` is left untouched, and transposing twice gives back a graph equal
/// to the original.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::graph::{algorithms::transpose, DirectedGraph};
///
/// let graph: DirectedGraph = vec![("A", "B"), ("A", "C")].into_iter().collect();
/// let rev = transpose(&graph);
///
/// assert!(rev.contains_edge("B", "A"));
/// assert!(rev.contains_edge("C", "A"));
/// assert!(!rev.contains_edge("A", "B"));
/// assert_eq!(transpose(&rev), graph);
/// ```
#[must_use]
pub fn transpose(graph: &DirectedGraph) -> DirectedGraph {
    let mut rev = DirectedGraph::with_capacity(graph.node_count());

    for (node, successors) in graph.node_sets() {
        rev.ensure_node(node);
        for succ in successors {
            rev.add_edge(succ, node);
        }
    }

    rev
}
