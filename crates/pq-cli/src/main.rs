// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use pq_cli::{Cli, Commands, Parser};
use pq_rest_client::QueueClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.clone().init("pq-cli")?;

    let mut stdout = std::io::stdout();
    match &cli.command {
        Commands::Types => pq_cli::write_task_types(&mut stdout, cli.json),
        command => {
            let client = QueueClient::new(cli.client_config()?)?;
            pq_cli::run(command, &client, &mut stdout, cli.json).await
        }
    }
}
