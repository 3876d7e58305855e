use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::FieldCount`] - An edge-list line did not contain exactly two identifiers
///
/// ## I/O Errors
/// - [`Error::Io`] - Reading the edge list or writing DOT output failed
///
/// Unknown root identifiers are not an error anywhere in this crate; they simply
/// contribute nothing to a reachability query.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::{edgelist, Error};
///
/// match edgelist::parse_str("a b c\n") {
///     Err(Error::FieldCount { fields, .. }) => assert_eq!(fields, 3),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An edge-list line split into a number of fields other than two.
    ///
    /// Parsing stops at the first such line. Empty lines are skipped, but a line
    /// holding only whitespace reports 0 fields.
    ///
    /// # Fields
    ///
    /// * `line_number` - 1-based position of the line in the input
    /// * `line` - The offending line as read
    /// * `fields` - How many whitespace-separated fields were found
    #[error("line {line_number}: expected 2 words in line, but got {fields}: {line}")]
    FieldCount {
        /// 1-based line number of the offending line
        line_number: usize,
        /// The content of the offending line
        line: String,
        /// Number of whitespace-separated fields found on the line
        fields: usize,
    },

    /// I/O error while reading input or writing output.
    ///
    /// Output already written to a sink before the failure is not retracted.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
