//! ParanoiaList MCP Server - Main Entry Point
//!
//! This is the main entry point for the checklist MCP server application.
//! The actual implementation is in the `paranoia_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use paranoia_mcp::{ChecklistServerHandler, DEFAULT_STORAGE_KEY, logging};

/// ParanoiaList MCP Server - reassurance checklist and daily CBT tips via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the key-value store file
    file: String,

    /// Slot in the store file that holds the checklist
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Log level for stderr output (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    tracing::info!(file = %args.file, key = %args.storage_key, "starting checklist server");
    let handler = ChecklistServerHandler::with_storage_key(&args.file, &args.storage_key)?;
    serve_stdio(handler).await?;
    Ok(())
}
