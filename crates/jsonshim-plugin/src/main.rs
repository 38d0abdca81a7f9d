//! protoc-gen-golang-jsonshim - protoc plugin emitting Go JSON shims
//!
//! protoc runs the plugin with no arguments, writes an encoded
//! `CodeGeneratorRequest` to stdin and reads an encoded
//! `CodeGeneratorResponse` from stdout:
//!
//! ```bash
//! protoc --golang-jsonshim_out=. --golang-jsonshim_opt=paths=source_relative widgets.proto
//! ```
//!
//! Diagnostics go to stderr; set `JSONSHIM_LOG=debug` to see per-message output.

use anyhow::{Context, Result};
use clap::Parser;
use prost::Message;
use std::io::{self, Read, Write};

mod logging;

#[derive(Parser)]
#[command(name = "protoc-gen-golang-jsonshim")]
#[command(
    author,
    version,
    about = "protoc plugin generating MarshalJSON/UnmarshalJSON shims for Go protobuf messages",
    long_about = None
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init_logging();

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read CodeGeneratorRequest from stdin")?;

    let output = run(&input)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .context("Failed to write CodeGeneratorResponse to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Turn an encoded request into an encoded response.
fn run(input: &[u8]) -> Result<Vec<u8>> {
    let response = jsonshim_core::generate_from_bytes(input)
        .context("Failed to decode CodeGeneratorRequest")?;

    tracing::debug!(
        files = response.file.len(),
        error = response.error.as_deref().unwrap_or(""),
        "writing CodeGeneratorResponse"
    );

    Ok(response.encode_to_vec())
}
