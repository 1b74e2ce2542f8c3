//! Print the GraphQL schema as SDL.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use bookgraph::inbound::graphql::schema_sdl;
use clap::Parser;

/// `schema-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schema-dump",
    about = "Print the GraphQL schema definition language for the query graph",
    version
)]
struct CliArgs {
    /// Write the SDL to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let sdl = schema_sdl();

    match args.output {
        Some(path) => fs::write(&path, sdl)
            .map_err(|error| io::Error::other(format!("write {}: {error}", path.display()))),
        None => io::stdout().lock().write_all(sdl.as_bytes()),
    }
}
