// Copyright 2025 The modgraphfind Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # modgraphfind
//!
//! Trace the paths of influence between a chosen set of nodes and everything that
//! transitively leads to them, and render the result as Graphviz DOT.
//!
//! `modgraphfind` reads a directed edge list (such as the output of
//! `go mod graph`), builds an in-memory graph, extracts the subgraph reachable
//! from a set of root identifiers and renders it deterministically.
//!
//! ## Features
//!
//! - **Graph store** - A node to successor-set mapping with idempotent inserts
//! - **Deterministic output** - Every visible listing is sorted, never storage-ordered
//! - **Reachability** - Iterative depth-first extraction of the reachable subgraph
//! - **Transposition** - Reverse every edge to walk the graph the other way
//! - **DOT rendering** - Byte-identical output for equal graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use modgraphfind::prelude::*;
//!
//! let input = "A B\nA C\nB D\nC E\n";
//! let graph = edgelist::parse(input.as_bytes())?;
//!
//! let roots: NodeSet = ["D"].into_iter().collect();
//! let sub = graph.reachable_from(&roots);
//!
//! let mut out = Vec::new();
//! dot::write_dot(&sub, &mut out)?;
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph gomodgraph {\n\tnode [ shape=rectangle fontsize=12 ]\n\t\"B\" -> \"A\";\n\t\"D\" -> \"B\";\n}\n"
//! );
//! # Ok::<(), modgraphfind::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - [`DirectedGraph`](graph::DirectedGraph), node identifiers and
//!   the [`algorithms`](graph::algorithms) that derive new graphs
//! - [`edgelist`] - Parsing of `go mod graph`-style input
//! - [`dot`] - DOT rendering
//! - [`Error`] - The error type shared by all fallible operations
//!
//! The library does not install a logger; it emits `debug` records through the
//! [`log`] facade and leaves output configuration to the application.

pub(crate) mod error;

pub mod dot;
pub mod edgelist;
pub mod graph;
pub mod prelude;

/// The result type used throughout modgraphfind.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
pub use graph::{DirectedGraph, NodeName, NodeSet};
