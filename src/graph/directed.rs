//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], a mutable directed graph keyed by node
//! identifier. Each node maps to the [`NodeSet`] of its immediate successors, which
//! makes duplicate edge insertion a no-op and membership queries O(1).

use std::collections::{hash_map, HashMap};

use crate::graph::{
    algorithms,
    node::{NodeName, NodeSet},
};

/// A directed, unweighted, unlabeled graph over string identifiers.
///
/// `DirectedGraph` maps every node to the set of its immediate successors. It
/// upholds two invariants:
///
/// - Every identifier that appears as the source or the target of an edge is a
///   node of the graph, even when its successor set is empty.
/// - A successor set holds no duplicates, and holds the node itself only when a
///   self-edge was inserted explicitly.
///
/// # Ordering
///
/// Storage is a hash map, so the order of [`successor_set`](Self::successor_set)
/// and [`node_sets`](Self::node_sets) is unspecified. Every listing meant to be
/// observed ([`nodes`](Self::nodes), [`successors`](Self::successors),
/// [`edges`](Self::edges)) is sorted immediately before it is returned.
///
/// # Equality
///
/// Two graphs are equal when they have the same node set and the same edge set,
/// regardless of the order in which they were built.
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. It does not support concurrent
/// modification; build the graph on one thread, then query it immutably.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("B", "A");
/// graph.add_edge("D", "B");
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
///
/// let nodes: Vec<&str> = graph.nodes().iter().map(|n| n.as_str()).collect();
/// assert_eq!(nodes, vec!["A", "B", "D"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Successor set per node
    nodes: HashMap<NodeName, NodeSet>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modgraphfind::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::new();
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `node_capacity` nodes.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        DirectedGraph {
            nodes: HashMap::with_capacity(node_capacity),
        }
    }

    /// Inserts `node` with an empty successor set unless it is already present.
    ///
    /// This method is idempotent: calling it again for an existing node leaves
    /// its successors untouched.
    ///
    /// # Arguments
    ///
    /// * `node` - The identifier of the node
    ///
    /// # Returns
    ///
    /// The successor set of `node`, newly created or existing.
    pub fn ensure_node(&mut self, node: impl Into<NodeName>) -> &mut NodeSet {
        self.nodes.entry(node.into()).or_default()
    }

    /// Adds the directed edge `from -> to`, creating both nodes as needed.
    ///
    /// Inserting an edge that already exists changes nothing.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node
    /// * `to` - The target node
    ///
    /// # Returns
    ///
    /// `true` if the edge was not present before.
    pub fn add_edge(&mut self, from: impl Into<NodeName>, to: impl Into<NodeName>) -> bool {
        let to = to.into();
        if !self.nodes.contains_key(&to) {
            self.nodes.insert(to.clone(), NodeSet::new());
        }
        self.ensure_node(from).insert(to)
    }

    /// Adds an edge from `from` to every node yielded by `to`.
    ///
    /// `from` is created even when `to` is empty.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node shared by all new edges
    /// * `to` - The target nodes
    pub fn add_edges<I>(&mut self, from: impl Into<NodeName>, to: I)
    where
        I: IntoIterator,
        I::Item: Into<NodeName>,
    {
        let from = from.into();
        self.ensure_node(from.clone());
        for target in to {
            self.add_edge(from.clone(), target);
        }
    }

    /// Returns all node identifiers in ascending lexicographic order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&NodeName> {
        let mut names: Vec<&NodeName> = self.nodes.keys().collect();
        names.sort();
        names
    }

    /// Returns the successors of `node` in ascending lexicographic order.
    ///
    /// An unknown node has no successors.
    #[must_use]
    pub fn successors(&self, node: &str) -> Vec<&NodeName> {
        self.nodes
            .get(node)
            .map(NodeSet::sorted)
            .unwrap_or_default()
    }

    /// Returns the successor set of `node`, or `None` if the node is unknown.
    #[must_use]
    pub fn successor_set(&self, node: &str) -> Option<&NodeSet> {
        self.nodes.get(node)
    }

    /// Returns every edge as a `(source, target)` pair, sorted by source and
    /// then by target.
    #[must_use]
    pub fn edges(&self) -> Vec<(&NodeName, &NodeName)> {
        self.nodes()
            .into_iter()
            .flat_map(|source| {
                self.successors(source.as_str())
                    .into_iter()
                    .map(move |target| (source, target))
            })
            .collect()
    }

    /// Iterates over each node and its successor set, in unspecified order.
    pub fn node_sets(&self) -> hash_map::Iter<'_, NodeName, NodeSet> {
        self.nodes.iter()
    }

    /// Returns the graph's own identifier for `node`, or `None` if it is unknown.
    #[must_use]
    pub fn node(&self, node: &str) -> Option<&NodeName> {
        self.nodes.get_key_value(node).map(|(name, _)| name)
    }

    /// Returns `true` if `node` is a node of the graph.
    #[must_use]
    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Returns `true` if the graph contains the edge `from -> to`.
    #[must_use]
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.nodes.get(from).is_some_and(|succ| succ.contains(to))
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(NodeSet::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Computes the subgraph reachable from `roots`.
    ///
    /// See [`algorithms::reachable_from`].
    #[must_use]
    pub fn reachable_from(&self, roots: &NodeSet) -> DirectedGraph {
        algorithms::reachable_from(self, roots)
    }

    /// Returns a new graph with every edge reversed.
    ///
    /// See [`algorithms::transpose`].
    #[must_use]
    pub fn transpose(&self) -> DirectedGraph {
        algorithms::transpose(self)
    }
}

impl<F, T> FromIterator<(F, T)> for DirectedGraph
where
    F: Into<NodeName>,
    T: Into<NodeName>,
{
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend(iter);
        graph
    }
}

impl<F, T> Extend<(F, T)> for DirectedGraph
where
    F: Into<NodeName>,
    T: Into<NodeName>,
{
    fn extend<I: IntoIterator<Item = (F, T)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(list: impl IntoIterator<Item = &'a NodeName>) -> Vec<&'a str> {
        list.into_iter().map(NodeName::as_str).collect()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.nodes().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_ensure_node_idempotent() {
        let mut graph = DirectedGraph::with_capacity(2);
        graph.add_edge("A", "B");

        graph.ensure_node("A");
        graph.ensure_node("A");
        graph.ensure_node("C");
        graph.ensure_node("C");

        assert_eq!(graph.node_count(), 3);
        assert_eq!(names(graph.successors("A")), vec!["B"]);
        assert!(graph.successor_set("C").is_some_and(NodeSet::is_empty));
    }

    #[test]
    fn test_ensure_node_returns_successor_set() {
        let mut graph = DirectedGraph::new();
        graph.ensure_node("A").insert("B");

        assert!(graph.contains_edge("A", "B"));
    }

    #[test]
    fn test_add_edge_creates_both_endpoints() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_edge("A", "B"));

        assert!(graph.contains_node("A"));
        assert!(graph.contains_node("B"));
        assert!(graph.successors("B").is_empty());
        assert!(graph.contains_edge("A", "B"));
        assert!(!graph.contains_edge("B", "A"));
    }

    #[test]
    fn test_add_edge_duplicate() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_edge("A", "B"));
        assert!(!graph.add_edge("A", "B"));

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_no_implicit_self_edge() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("A", "B");
        assert!(!graph.contains_edge("A", "A"));

        graph.add_edge("A", "A");
        assert!(graph.contains_edge("A", "A"));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_add_edges_vararg() {
        let mut graph = DirectedGraph::new();
        graph.add_edges("A", ["C", "B", "D"]);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(names(graph.successors("A")), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_add_edges_no_targets() {
        let mut graph = DirectedGraph::new();
        graph.add_edges("A", Vec::<&str>::new());

        assert!(graph.contains_node("A"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_nodes_sorted() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("test.com/E@v1.0.0", "test.com/C@v1.0.0");
        graph.add_edge("test.com/B@v1.0.0", "test.com/A@v1.0.0");
        graph.add_edge("test.com/D@v1.0.0", "test.com/B@v1.0.0");

        assert_eq!(
            names(graph.nodes()),
            vec![
                "test.com/A@v1.0.0",
                "test.com/B@v1.0.0",
                "test.com/C@v1.0.0",
                "test.com/D@v1.0.0",
                "test.com/E@v1.0.0",
            ]
        );
    }

    #[test]
    fn test_successors_unknown_node() {
        let graph = DirectedGraph::new();
        assert!(graph.successors("missing").is_empty());
        assert!(graph.successor_set("missing").is_none());
    }

    #[test]
    fn test_edges_sorted_by_source_then_target() {
        let mut graph = DirectedGraph::new();
        graph.add_edge("C", "A");
        graph.add_edge("B", "Z");
        graph.add_edge("B", "A");

        let edges: Vec<(&str, &str)> = graph
            .edges()
            .into_iter()
            .map(|(s, t)| (s.as_str(), t.as_str()))
            .collect();
        assert_eq!(edges, vec![("B", "A"), ("B", "Z"), ("C", "A")]);
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut graph: DirectedGraph = vec![("A", "B"), ("B", "C")].into_iter().collect();
        graph.extend([("C".to_string(), "A".to_string())]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge("C", "A"));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let first: DirectedGraph = vec![("A", "B"), ("A", "C"), ("B", "C")]
            .into_iter()
            .collect();
        let second: DirectedGraph = vec![("B", "C"), ("A", "C"), ("A", "B"), ("A", "B")]
            .into_iter()
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_equality_sees_isolated_nodes() {
        let mut first = DirectedGraph::new();
        first.add_edge("A", "B");
        let mut second = first.clone();
        second.ensure_node("C");

        assert_ne!(first, second);
    }
}
