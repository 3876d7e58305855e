use std::path::PathBuf;

use clap::Parser;

/// modgraphfind - trace what leads to a set of modules in `go mod graph` output
///
/// Reads `go mod graph` output and prints, as Graphviz DOT, the part of the
/// graph reachable from the given nodes.
#[derive(Debug, Parser)]
#[command(
    name = "modgraphfind",
    version,
    about,
    long_about = None,
    after_help = "Example:\n  go mod graph | modgraphfind golang.org/x/text@v0.3.0 | dot -Tpng -o x.png"
)]
pub struct Cli {
    /// Nodes to trace from (e.g., golang.org/x/text@v0.3.0).
    #[arg(value_name = "NODE", required = true)]
    pub nodes: Vec<String>,

    /// Read the edge list from a file instead of standard input.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the DOT output to a file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,
}
