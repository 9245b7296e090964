// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Mock PyQueue REST API server binary

use clap::Parser;
use pq_logging::CliLoggingArgs;
use pq_mock_server::{serve, MockState};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the server
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    #[command(flatten)]
    logging: CliLoggingArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.logging.init("pq-mock-server")?;

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    serve(listener, MockState::new()).await?;

    Ok(())
}
