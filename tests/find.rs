//! End-to-end tests over the public API: edge list in, DOT text out.
//!
//! Each test parses a `go mod graph`-style edge list, extracts the subgraph
//! reachable from a root set and checks the rendered DOT.

use modgraphfind::{
    dot::{to_dot, write_dot},
    edgelist, DirectedGraph, Error, NodeSet, Result,
};

const SAMPLE: &str = "A B\nA C\nB D\nC E\n";

const HEADER: &str = "digraph gomodgraph {\n\tnode [ shape=rectangle fontsize=12 ]\n";

/// Parse `input`, query `roots`, render the result.
fn find(input: &str, roots: &[&str]) -> Result<String> {
    let graph = edgelist::parse_str(input)?;
    let roots: NodeSet = roots.iter().copied().collect();
    let mut out = Vec::new();
    write_dot(&graph.reachable_from(&roots), &mut out)?;
    Ok(String::from_utf8(out).expect("DOT output is UTF-8"))
}

#[test]
fn test_single_root_depth_two() -> Result<()> {
    assert_eq!(
        find(SAMPLE, &["D"])?,
        format!("{HEADER}\t\"B\" -> \"A\";\n\t\"D\" -> \"B\";\n}}\n")
    );
    Ok(())
}

#[test]
fn test_two_roots() -> Result<()> {
    let out = find(SAMPLE, &["B", "E"])?;
    assert_eq!(
        out,
        format!("{HEADER}\t\"B\" -> \"A\";\n\t\"C\" -> \"A\";\n\t\"E\" -> \"C\";\n}}\n")
    );
    assert_eq!(out.matches("->").count(), 3);
    Ok(())
}

#[test]
fn test_unknown_roots_give_empty_graph() -> Result<()> {
    let empty = format!("{HEADER}}}\n");
    assert_eq!(find(SAMPLE, &[""])?, empty);
    assert_eq!(find(SAMPLE, &["Z"])?, empty);
    assert_eq!(find(SAMPLE, &[])?, empty);
    Ok(())
}

#[test]
fn test_three_fields_is_an_error() {
    match find("A B B\nA C\n", &["D"]) {
        Err(Error::FieldCount { fields, .. }) => assert_eq!(fields, 3),
        other => panic!("expected a field count error, got {other:?}"),
    }
}

#[test]
fn test_root_order_and_duplicates_do_not_matter() -> Result<()> {
    let reference = find(SAMPLE, &["B", "E"])?;
    assert_eq!(find(SAMPLE, &["E", "B"])?, reference);
    assert_eq!(find(SAMPLE, &["E", "B", "E", "B"])?, reference);
    Ok(())
}

#[test]
fn test_line_order_does_not_matter() -> Result<()> {
    let shuffled = "C E\nA B\n\nB D\nA C\n";
    assert_eq!(find(shuffled, &["B", "E"])?, find(SAMPLE, &["B", "E"])?);
    Ok(())
}

#[test]
fn test_real_module_paths() -> Result<()> {
    let input = "\
example.com/app golang.org/x/text@v0.3.7
example.com/app github.com/pkg/errors@v0.9.1
golang.org/x/text@v0.3.7 golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e
github.com/pkg/errors@v0.9.1 golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e
";
    let out = find(input, &["golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e"])?;

    assert_eq!(
        out,
        format!(
            "{HEADER}\
             \t\"github.com/pkg/errors@v0.9.1\" -> \"example.com/app\";\n\
             \t\"golang.org/x/text@v0.3.7\" -> \"example.com/app\";\n\
             \t\"golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e\" -> \"github.com/pkg/errors@v0.9.1\";\n\
             \t\"golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e\" -> \"golang.org/x/text@v0.3.7\";\n\
             }}\n"
        )
    );
    Ok(())
}

#[test]
fn test_transpose_walks_the_other_way() -> Result<()> {
    // In the parsed graph D reaches what depends on it; in the transpose A
    // reaches what it depends on.
    let graph = edgelist::parse_str(SAMPLE)?;
    let rev = graph.transpose();
    let roots: NodeSet = ["A"].into_iter().collect();

    assert_eq!(
        to_dot(&rev.reachable_from(&roots)),
        format!(
            "{HEADER}\t\"A\" -> \"B\";\n\t\"A\" -> \"C\";\n\t\"B\" -> \"D\";\n\t\"C\" -> \"E\";\n}}\n"
        )
    );
    Ok(())
}

#[test]
fn test_derived_graphs_are_independent() -> Result<()> {
    let mut graph = edgelist::parse_str(SAMPLE)?;
    let roots: NodeSet = ["D"].into_iter().collect();
    let sub = graph.reachable_from(&roots);
    let rev = graph.transpose();

    graph.add_edge("A", "Q");

    assert!(!sub.contains_node("Q"));
    assert!(!rev.contains_node("Q"));
    assert_eq!(rev.transpose(), edgelist::parse_str(SAMPLE)?);
    Ok(())
}

#[test]
fn test_empty_graph_round() {
    let graph = DirectedGraph::new();
    let roots: NodeSet = ["A"].into_iter().collect();
    assert_eq!(to_dot(&graph.reachable_from(&roots)), format!("{HEADER}}}\n"));
}
