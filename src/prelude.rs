//! # modgraphfind Prelude
//!
//! Commonly used types and modules, for a single glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all modgraphfind operations
pub use crate::Error;

/// The result type used throughout modgraphfind
pub use crate::Result;

// ================================================================================================
// Graph
// ================================================================================================

/// Graph store and identifier types
pub use crate::graph::{DirectedGraph, NodeName, NodeSet};

/// Graph algorithms
pub use crate::graph::algorithms::{dfs, reachable_from, transpose};

// ================================================================================================
// Input and Output
// ================================================================================================

/// Edge-list parsing and DOT rendering
pub use crate::{dot, edgelist};

/// DOT header settings
pub use crate::dot::DotOptions;
