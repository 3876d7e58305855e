mod app;
mod find;

use clap::Parser;

use crate::app::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to stderr only; stdout carries the DOT output. RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("modgraphfind", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let input = find::open_input(cli.input.as_deref())?;
    let bytes = find::render(&cli.nodes, input)?;
    find::write_output(cli.output.as_deref(), &bytes)
}
