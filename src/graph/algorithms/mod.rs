//! Graph algorithms.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search from a set of roots
//!
//! ## Derived Graphs
//!
//! - [`reachable_from`] - The subgraph reachable from a set of roots
//! - [`transpose`] - The graph with every edge reversed
//!
//! Derived graphs are always built fresh and own their data.
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | General traversal |
//! | Reachability | O(V + E) of the reachable region | "What leads to X" queries |
//! | Transpose | O(V + E) | Walking edges in the other direction |
//!
//! (Traversal and reachability add a sort of each successor list, to keep the
//! visiting order reproducible.)

mod reachability;
mod transpose;
mod traversal;

pub use reachability::reachable_from;
pub use transpose::transpose;
pub use traversal::{dfs, DfsIterator};
