//! Edge-list input.
//!
//! Reads the line-oriented output of `go mod graph`, where each line holds two
//! whitespace-separated module identifiers:
//!
//! ```text
//! example.com/app golang.org/x/text@v0.3.0
//! golang.org/x/text@v0.3.0 golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e
//! ```
//!
//! A line `A B` reads "A requires B". It is stored as the edge `B -> A`, so the
//! subgraph reachable from a module is everything that depends on it, directly
//! or transitively.
//!
//! Identifiers are opaque: bytes that are not valid UTF-8 are replaced with
//! U+FFFD rather than rejected.

use std::io::BufRead;

use crate::{
    graph::{DirectedGraph, NodeName},
    Error, Result,
};

/// Parses a single edge-list line.
///
/// # Arguments
///
/// * `line` - The raw line, without its line terminator
///
/// # Returns
///
/// * `Ok(None)` for an empty line
/// * `Ok(Some((from, to)))` where `from` is the second field and `to` the first
///
/// # Errors
///
/// Returns [`Error::FieldCount`] with `line_number` 0 when the line does not
/// have exactly two fields, including a line of only whitespace; [`parse`]
/// fills in the real position.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::edgelist::parse_line;
///
/// let (from, to) = parse_line("app lib@v1.0.0")?.unwrap();
/// assert_eq!(from.as_str(), "lib@v1.0.0");
/// assert_eq!(to.as_str(), "app");
///
/// assert!(parse_line("")?.is_none());
/// assert!(parse_line("   ").is_err());
/// assert!(parse_line("a b c").is_err());
/// # Ok::<(), modgraphfind::Error>(())
/// ```
pub fn parse_line(line: &str) -> Result<Option<(NodeName, NodeName)>> {
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [to, from] => Ok(Some((NodeName::from(*from), NodeName::from(*to)))),
        _ => Err(Error::FieldCount {
            line_number: 0,
            line: line.to_string(),
            fields: fields.len(),
        }),
    }
}

/// Reads an edge list from `reader` and builds the corresponding graph.
///
/// Lines end at `\n`, with one trailing `\r` removed. Empty lines are skipped.
/// Parsing stops at the first malformed line.
///
/// # Arguments
///
/// * `reader` - Source of the edge list
///
/// # Errors
///
/// - [`Error::FieldCount`] for a line without exactly two fields, carrying its
///   1-based line number, content and field count
/// - [`Error::Io`] if reading from `reader` fails
///
/// # Examples
///
/// ```rust
/// use modgraphfind::edgelist::parse;
///
/// let input = "A B\nA C\n\nB D\n";
/// let graph = parse(input.as_bytes())?;
///
/// assert!(graph.contains_edge("B", "A"));
/// assert!(graph.contains_edge("D", "B"));
/// assert_eq!(graph.node_count(), 4);
/// # Ok::<(), modgraphfind::Error>(())
/// ```
pub fn parse<R: BufRead>(mut reader: R) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new();
    let mut edges = 0usize;
    let mut line_number = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(strip_line_end(&buf));
        match parse_line(&line) {
            Ok(Some((from, to))) => {
                graph.add_edge(from, to);
                edges += 1;
            }
            Ok(None) => {}
            Err(Error::FieldCount { line, fields, .. }) => {
                return Err(Error::FieldCount {
                    line_number,
                    line,
                    fields,
                })
            }
            Err(err) => return Err(err),
        }
    }

    log::debug!(
        "parsed {edges} edge line(s) into {} node(s) and {} distinct edge(s)",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Drops the `\n` terminator and one `\r` before it, or a lone trailing `\r`
/// on the last line.
fn strip_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parses an edge list held in memory.
///
/// # Errors
///
/// Returns [`Error::FieldCount`] for the first malformed line.
pub fn parse_str(input: &str) -> Result<DirectedGraph> {
    parse(input.as_bytes())
}
