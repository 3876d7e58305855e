//! Node identifiers and node sets.
//!
//! This module provides [`NodeName`], the identifier of a graph vertex, and
//! [`NodeSet`], an unordered collection of unique identifiers. A `NodeSet` is
//! used both as the successor set of a node inside a
//! [`DirectedGraph`](crate::graph::DirectedGraph) and as the root set of a
//! reachability query.
//!
//! # Ordering
//!
//! Sets are backed by a hash table, so their iteration order is unspecified.
//! Anything that must be reproducible goes through [`NodeSet::sorted`], which
//! performs a stable sort on the identifiers' byte-wise order.

use std::{
    borrow::Borrow,
    collections::{hash_set, HashSet},
    fmt,
};

/// The identifier of a node within a directed graph.
///
/// `NodeName` wraps an immutable string. Two names are the same node if and only
/// if their strings are equal, and names order byte-wise, which for UTF-8 is the
/// same as ordering by code point.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::graph::NodeName;
///
/// let a = NodeName::from("test.com/A@v1.0.0");
/// let b = NodeName::from("test.com/B@v1.0.0");
///
/// assert!(a < b);
/// assert_eq!(a.as_str(), "test.com/A@v1.0.0");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeName(Box<str>);

impl NodeName {
    /// Creates a new `NodeName` from anything convertible into a string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        NodeName(name.into().into_boxed_str())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeName({:?})", self.as_str())
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        NodeName(name.into())
    }
}

impl From<String> for NodeName {
    fn from(name: String) -> Self {
        NodeName(name.into_boxed_str())
    }
}

impl From<&String> for NodeName {
    fn from(name: &String) -> Self {
        NodeName(name.as_str().into())
    }
}

impl From<&NodeName> for NodeName {
    fn from(name: &NodeName) -> Self {
        name.clone()
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Hash and Eq of `Box<str>` agree with `str`, so maps keyed by `NodeName`
// can be queried with a plain `&str`.
impl Borrow<str> for NodeName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// An unordered collection of unique node identifiers.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::graph::NodeSet;
///
/// let roots: NodeSet = ["b", "a", "b"].into_iter().collect();
/// assert_eq!(roots.len(), 2);
///
/// let listed: Vec<&str> = roots.sorted().iter().map(|n| n.as_str()).collect();
/// assert_eq!(listed, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    inner: HashSet<NodeName>,
}

impl NodeSet {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty set with room for `capacity` names.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeSet {
            inner: HashSet::with_capacity(capacity),
        }
    }

    /// Adds a name to the set.
    ///
    /// # Returns
    ///
    /// `true` if the name was not already present.
    pub fn insert(&mut self, name: impl Into<NodeName>) -> bool {
        self.inner.insert(name.into())
    }

    /// Returns `true` if the set contains `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    /// Returns the number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the names in unspecified order.
    ///
    /// Use [`sorted`](Self::sorted) when the order is observable.
    pub fn iter(&self) -> hash_set::Iter<'_, NodeName> {
        self.inner.iter()
    }

    /// Lists the names of the set in ascending lexicographic order.
    ///
    /// This is the only listing of a set whose order callers may rely on.
    ///
    /// # Returns
    ///
    /// The names of the set, stably sorted by their byte-wise order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&NodeName> {
        let mut names: Vec<&NodeName> = self.inner.iter().collect();
        names.sort();
        names
    }
}

impl<N: Into<NodeName>> FromIterator<N> for NodeSet {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        NodeSet {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<N: Into<NodeName>> Extend<N> for NodeSet {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a NodeName;
    type IntoIter = hash_set::Iter<'a, NodeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for NodeSet {
    type Item = NodeName;
    type IntoIter = hash_set::IntoIter<NodeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
