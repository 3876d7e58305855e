//! Graph traversal.
//!
//! This module provides an iterative depth-first traversal over a
//! [`DirectedGraph`] that can start from several roots at once. It is the
//! building block of [`reachable_from`](super::reachable_from).
//!
//! # Iteration Order
//!
//! Roots are taken in ascending order and the successors of each node are
//! pushed so that they are visited in ascending order, which makes the
//! pre-order sequence reproducible. Each node is yielded at most once, even when
//! it is reachable from several roots or along several paths.

use std::collections::HashSet;

use crate::graph::{DirectedGraph, NodeName, NodeSet};

/// Depth-first search iterator over graph nodes.
///
/// This iterator performs an iterative (non-recursive) depth-first traversal,
/// so its depth is bounded by the heap and not by the call stack. Roots that
/// are not nodes of the graph are skipped.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::graph::{algorithms::dfs, DirectedGraph, NodeSet};
///
/// let graph: DirectedGraph = vec![("A", "B"), ("A", "C"), ("B", "D")].into_iter().collect();
/// let roots: NodeSet = ["A"].into_iter().collect();
///
/// let order: Vec<&str> = dfs(&graph, &roots).map(|n| n.as_str()).collect();
/// assert_eq!(order, vec!["A", "B", "D", "C"]);
/// ```
pub struct DfsIterator<'g> {
    graph: &'g DirectedGraph,
    stack: Vec<&'g NodeName>,
    visited: HashSet<&'g NodeName>,
}

impl<'g> DfsIterator<'g> {
    fn new(graph: &'g DirectedGraph, roots: &NodeSet) -> Self {
        // Resolve roots to the graph's own keys; unknown roots drop out here
        let mut stack: Vec<&'g NodeName> = roots
            .iter()
            .filter_map(|root| graph.node(root.as_str()))
            .collect();
        // Reverse order so the smallest root is popped first
        stack.sort_by(|a, b| b.cmp(a));

        let visited: HashSet<&'g NodeName> = stack.iter().copied().collect();

        DfsIterator {
            graph,
            stack,
            visited,
        }
    }
}

impl<'g> Iterator for DfsIterator<'g> {
    type Item = &'g NodeName;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push unvisited successors in reverse so they pop in ascending order
        for succ in self.graph.successors(node.as_str()).into_iter().rev() {
            if self.visited.insert(succ) {
                self.stack.push(succ);
            }
        }

        Some(node)
    }
}

/// Returns a depth-first search iterator starting from every node in `roots`.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `roots` - The starting nodes; unknown names are ignored
///
/// # Returns
///
/// An iterator yielding every node reachable from a known root exactly once.
///
/// # Complexity
///
/// - Time: O(V log V + E log E) over the reachable region, the log factors
///   coming from ordering roots and successor lists
/// - Space: O(V) for the visited set and stack
pub fn dfs<'g>(graph: &'g DirectedGraph, roots: &NodeSet) -> DfsIterator<'g> {
    DfsIterator::new(graph, roots)
}
