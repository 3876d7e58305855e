//! Reachability subgraph extraction.

use crate::graph::{algorithms::dfs, DirectedGraph, NodeSet};

/// Computes the subgraph of `graph` reachable from `roots`.
///
/// The result is the smallest graph `S` such that:
///
/// - every root that is a node of `graph` is a node of `S`;
/// - for every node `n` of `S` and every successor `e` of `n` in `graph`, the
///   edge `n -> e` (and therefore the node `e`) is in `S`.
///
/// Roots that are not nodes of `graph` contribute nothing, so an empty root set
/// or one made only of unknown names yields the empty graph. The node and edge
/// sets of `S` do not depend on the order of `roots` or of any successor set.
///
/// The returned graph owns its data and shares nothing with `graph`.
///
/// # Arguments
///
/// * `graph` - The graph to query
/// * `roots` - The starting nodes
///
/// # Returns
///
/// A new [`DirectedGraph`] holding the reachable region of `graph`.
///
/// # Complexity
///
/// Linear in the size of the reachable region (up to the ordering done by the
/// traversal), even for diamond-shaped or cyclic graphs, because every node is
/// expanded once.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::graph::{algorithms::reachable_from, DirectedGraph, NodeSet};
///
/// // Edges as produced from `go mod graph`: dependency -> dependent
/// let graph: DirectedGraph = vec![("B", "A"), ("C", "A"), ("D", "B"), ("E", "C")]
///     .into_iter()
///     .collect();
///
/// let roots: NodeSet = ["D"].into_iter().collect();
/// let sub = reachable_from(&graph, &roots);
///
/// assert!(sub.contains_edge("D", "B"));
/// assert!(sub.contains_edge("B", "A"));
/// assert_eq!(sub.edge_count(), 2);
/// ```
#[must_use]
pub fn reachable_from(graph: &DirectedGraph, roots: &NodeSet) -> DirectedGraph {
    let mut sub = DirectedGraph::new();

    for node in dfs(graph, roots) {
        let targets = graph.successor_set(node.as_str()).into_iter().flatten();
        sub.add_edges(node, targets);
    }

    log::debug!(
        "{} root(s) reach {} node(s) over {} edge(s)",
        roots.len(),
        sub.node_count(),
        sub.edge_count()
    );

    sub
}
