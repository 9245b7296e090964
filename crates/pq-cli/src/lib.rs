// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use clap::Subcommand;
use pq_logging::CliLoggingArgs;
use pq_rest_api_contract::{parse_status_filter, TaskStatus};
use pq_rest_client::ClientConfig;

pub mod commands;
pub mod output;

pub use clap::Parser;
pub use commands::{run, write_task_types};

#[derive(clap::Parser, Debug)]
#[command(
    name = "pyq",
    about = "PyQueue job queue CLI",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Base URL of the queue service, e.g. http://localhost:8000
    #[arg(long, global = true, env = "PYQUEUE_API_BASE", hide_env_values = true)]
    pub api_base: Option<String>,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub logging: CliLoggingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration, preferring `--api-base` over the environment
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let config = match &self.api_base {
            Some(base) => ClientConfig::new(base)?,
            None => ClientConfig::from_env()?,
        };
        Ok(config)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Inspect and manage individual jobs
    Jobs {
        #[command(subcommand)]
        subcommand: JobsCommands,
    },
    /// Submit a new job
    Enqueue {
        /// Task type key, e.g. `email` or `data-cleanup` (see `pyq types`)
        #[arg(long = "type", value_name = "KEY")]
        type_key: String,
        payload: String,
    },
    /// Remove every job from the queue
    Clear,
    /// List the accepted task type keys
    Types,
    /// Check that the queue service answers
    Health,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum JobsCommands {
    List {
        /// Only show jobs in this state (queued, inprogress, completed, failed)
        #[arg(long, value_parser = parse_status_filter)]
        status: Option<TaskStatus>,
    },
    Get {
        id: String,
    },
    Delete {
        id: String,
    },
    /// Re-enqueue a failed job
    Retry {
        id: String,
    },
}
