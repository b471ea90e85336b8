//! Wolfram|Alpha MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - query_wolfram: Query the Wolfram|Alpha LLM API
//!
//! Prompts:
//! - unit_conversion: Conversion instructions, with unit-name completion
//!   narrowed to the category of the unit already chosen
//!
//! Resources:
//! - units://categories - Unit taxonomy
//! - units://categories/{name} - Units of one category

mod completion;
mod config;
mod prompts;
mod protocol;
mod resources;
mod server;
mod tools;

#[cfg(test)]
mod testing;

use std::io::IsTerminal;
use std::process::ExitCode;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wolfram_query::WolframClient;
use wolfram_units::{CompletionEngine, UnitTaxonomy};

use crate::config::{ServerConfig, APP_ID_VAR};
use crate::server::{Server, PROTOCOL_VERSION, SERVER_VERSION};

/// Logs go to stderr; stdout carries protocol messages only
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = ServerConfig::from_env();

    let taxonomy = match UnitTaxonomy::builtin() {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "unit taxonomy failed validation");
            return ExitCode::FAILURE;
        }
    };

    let client = match WolframClient::new(config.client_config()) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to create query client");
            return ExitCode::FAILURE;
        }
    };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Wolfram|Alpha MCP server started");
    info!(
        categories = taxonomy.categories().len(),
        units = taxonomy.unit_count(),
        "unit taxonomy loaded"
    );
    if config.app_id.is_none() {
        info!("{} not set; query_wolfram will report a missing credential", APP_ID_VAR);
    }

    let server = Server::new(CompletionEngine::new(taxonomy), Box::new(client));

    match serve(&server).await {
        Ok(()) => {
            info!("server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "stdio transport failed");
            ExitCode::FAILURE
        }
    }
}

async fn serve(server: &Server) -> io::Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    info!("server ready, waiting for requests");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::trace!(bytes = line.len(), "received");

        if let Some(reply) = server.handle_line(line).await {
            stdout.write_all(reply.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    info!("client disconnected (EOF)");
    Ok(())
}
