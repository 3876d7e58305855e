//! Directed graph over string identifiers.
//!
//! This module provides the graph store, its deterministic listings, and the
//! algorithms that derive new graphs from it.
//!
//! # Key Components
//!
//! - [`NodeName`] - Node identifier, ordered byte-wise
//! - [`NodeSet`] - Unordered set of identifiers with a sorted listing
//! - [`DirectedGraph`] - Node to successor-set mapping
//! - [`algorithms`] - Traversal, reachability and transposition
//!
//! # Design Principles
//!
//! ## Sort on Read
//!
//! Nodes and successor sets live in hash tables. Nothing relies on their
//! iteration order; every listing whose order is visible is sorted right before
//! it is handed out.
//!
//! ## Build, Then Query
//!
//! A graph is filled by edge insertion and afterwards only read. Derived graphs
//! (subgraphs, transposes) are independent values that own their nodes.
//!
//! # Usage Examples
//!
//! ```rust
//! use modgraphfind::graph::{DirectedGraph, NodeSet};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge("B", "A");
//! graph.add_edge("C", "A");
//! graph.add_edge("D", "B");
//!
//! let roots: NodeSet = ["D"].into_iter().collect();
//! let sub = graph.reachable_from(&roots);
//! assert_eq!(sub.node_count(), 3);
//!
//! let rev = graph.transpose();
//! assert!(rev.contains_edge("A", "C"));
//! ```

mod directed;
mod node;

pub mod algorithms;

pub use directed::DirectedGraph;
pub use node::{NodeName, NodeSet};
