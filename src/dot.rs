//! DOT output for graph visualization.
//!
//! This module renders a [`DirectedGraph`] in the DOT language, which can be
//! rendered with Graphviz tools:
//!
//! ```text
//! go mod graph | modgraphfind <node> | dot -Tpng -o x.png
//! ```
//!
//! The output only lists edges. Sources appear in ascending order and, for each
//! source, targets appear in ascending order, so rendering the same graph always
//! produces the same bytes no matter how the graph was built.

use std::io::{self, Write};

use crate::{graph::DirectedGraph, Result};

/// Graph-level settings for the DOT header.
///
/// The [`Default`] value produces the header used by `modgraphfind`:
///
/// ```text
/// digraph gomodgraph {
/// 	node [ shape=rectangle fontsize=12 ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Name of the digraph
    pub name: String,
    /// Graphviz shape applied to every node
    pub node_shape: String,
    /// Font size applied to every node
    pub font_size: u32,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            name: "gomodgraph".to_string(),
            node_shape: "rectangle".to_string(),
            font_size: 12,
        }
    }
}

/// Escapes a string for use inside a double-quoted DOT identifier.
///
/// Backslashes and double quotes are backslash-escaped. Control characters and
/// whitespace other than a plain space use the C-style short escapes (`\n`,
/// `\t`, ...) where one exists, `\xNN` below U+0080, and `\uNNNN` or
/// `\UNNNNNNNN` above. Other characters pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::dot::escape_dot;
///
/// assert_eq!(escape_dot("golang.org/x/text@v0.3.0"), "golang.org/x/text@v0.3.0");
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape_dot("A\u{1}x"), "A\\x01x");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = u32::from(c);
                if code < 0x80 {
                    out.push_str(&format!("\\x{code:02x}"));
                } else if code < 0x1_0000 {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Writes `graph` to `w` as a DOT digraph with the default header.
///
/// # Arguments
///
/// * `graph` - The graph to render
/// * `w` - The output sink
///
/// # Errors
///
/// Returns [`crate::Error::Io`] as soon as a write to `w` fails. Whatever was
/// already written stays in the sink.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::{dot::write_dot, graph::DirectedGraph};
///
/// let graph: DirectedGraph = vec![("D", "B"), ("B", "A")].into_iter().collect();
/// let mut out = Vec::new();
/// write_dot(&graph, &mut out)?;
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "digraph gomodgraph {\n\tnode [ shape=rectangle fontsize=12 ]\n\t\"B\" -> \"A\";\n\t\"D\" -> \"B\";\n}\n"
/// );
/// # Ok::<(), modgraphfind::Error>(())
/// ```
pub fn write_dot<W: Write>(graph: &DirectedGraph, w: &mut W) -> Result<()> {
    write_dot_with(graph, w, &DotOptions::default())
}

/// Writes `graph` to `w` as a DOT digraph using `options` for the header.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] as soon as a write to `w` fails.
pub fn write_dot_with<W: Write>(
    graph: &DirectedGraph,
    w: &mut W,
    options: &DotOptions,
) -> Result<()> {
    write_header(w, options)?;

    for source in graph.nodes() {
        let source_id = escape_dot(source.as_str());
        for target in graph.successors(source.as_str()) {
            writeln!(
                w,
                "\t\"{source_id}\" -> \"{}\";",
                escape_dot(target.as_str())
            )?;
        }
    }

    writeln!(w, "}}")?;
    Ok(())
}

fn write_header<W: Write>(w: &mut W, options: &DotOptions) -> io::Result<()> {
    writeln!(w, "digraph {} {{", options.name)?;
    writeln!(
        w,
        "\tnode [ shape={} fontsize={} ]",
        options.node_shape, options.font_size
    )
}

/// Renders `graph` as a DOT string with the default header.
///
/// # Examples
///
/// ```rust
/// use modgraphfind::{dot::to_dot, graph::DirectedGraph};
///
/// let empty = DirectedGraph::new();
/// assert_eq!(
///     to_dot(&empty),
///     "digraph gomodgraph {\n\tnode [ shape=rectangle fontsize=12 ]\n}\n"
/// );
/// ```
#[must_use]
pub fn to_dot(graph: &DirectedGraph) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_dot(graph, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
