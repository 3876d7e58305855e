use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use anyhow::Context;
use modgraphfind::{dot, edgelist, NodeSet};

/// Parse the edge list, extract the subgraph reachable from `nodes`, and render it as DOT.
///
/// Nothing is written anywhere; the rendered bytes are returned so the caller can
/// commit them to the sink in one pass.
pub fn render<R: BufRead>(nodes: &[String], input: R) -> anyhow::Result<Vec<u8>> {
    let graph = edgelist::parse(input).context("parsing graph")?;

    let roots: NodeSet = nodes.iter().collect();
    for root in roots.sorted() {
        if !graph.contains_node(root.as_str()) {
            log::debug!("node '{root}' does not appear in the graph");
        }
    }

    let sub = graph.reachable_from(&roots);

    let mut buf = Vec::new();
    dot::write_dot(&sub, &mut buf).context("building graph dot")?;
    Ok(buf)
}

/// Write rendered output to `out` and flush it.
pub fn commit<W: Write>(bytes: &[u8], out: &mut W) -> anyhow::Result<()> {
    out.write_all(bytes).context("writing output")?;
    out.flush().context("writing output")?;
    Ok(())
}

/// Open the edge-list source: the given file, or standard input.
pub fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input '{}'", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Write `bytes` to the given file, or to standard output.
///
/// The file is only created here, after rendering succeeded, so a failed run
/// leaves an existing output file untouched.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating output '{}'", path.display()))?;
            commit(bytes, &mut file)
        }
        None => commit(bytes, &mut io::stdout().lock()),
    }
}
