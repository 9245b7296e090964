// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Command dispatch against a [`JobQueueApi`]

use pq_client_api::JobQueueApi;
use pq_rest_client::TaskTypeTable;
use serde_json::json;
use std::io::Write;
use tracing::debug;

use crate::output;
use crate::{Commands, JobsCommands};

/// Run one command, writing its result to `out`
///
/// With `json` set, responses are written as the backend sent them.
pub async fn run(
    command: &Commands,
    api: &dyn JobQueueApi,
    out: &mut dyn Write,
    json: bool,
) -> anyhow::Result<()> {
    debug!(?command, "running command");

    match command {
        Commands::Jobs { subcommand } => run_jobs(subcommand, api, out, json).await,
        Commands::Enqueue { type_key, payload } => {
            let response = api.enqueue_job(payload, type_key).await?;
            if json {
                write_json(out, &response)
            } else {
                Ok(output::write_job_response(out, &response)?)
            }
        }
        Commands::Clear => {
            let response = api.clear_queue().await?;
            if json {
                write_json(out, &response)
            } else {
                Ok(output::write_job_response(out, &response)?)
            }
        }
        Commands::Types => write_task_types(out, json),
        Commands::Health => {
            let body = api.health().await?;
            if json {
                return write_json(out, &body);
            }
            match body.get("message").and_then(|m| m.as_str()) {
                Some(message) => writeln!(out, "ok: {message}")?,
                None => writeln!(out, "ok: {body}")?,
            }
            Ok(())
        }
    }
}

async fn run_jobs(
    command: &JobsCommands,
    api: &dyn JobQueueApi,
    out: &mut dyn Write,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        JobsCommands::List { status } => {
            let tasks = api.list_jobs(*status).await?;
            if json {
                write_json(out, &tasks)
            } else {
                Ok(output::write_task_table(out, &tasks)?)
            }
        }
        JobsCommands::Get { id } => {
            let task = api.get_job(id).await?;
            if json {
                write_json(out, &task)
            } else {
                Ok(output::write_task(out, &task)?)
            }
        }
        JobsCommands::Delete { id } => {
            let response = api.delete_job(id).await?;
            if json {
                write_json(out, &response)
            } else {
                Ok(output::write_job_response(out, &response)?)
            }
        }
        JobsCommands::Retry { id } => {
            let response = api.retry_job(id).await?;
            if json {
                write_json(out, &response)
            } else {
                Ok(output::write_job_response(out, &response)?)
            }
        }
    }
}

/// Print the accepted task-type keys and what each is sent as
///
/// Needs no connection to the service.
pub fn write_task_types(out: &mut dyn Write, json: bool) -> anyhow::Result<()> {
    let table = TaskTypeTable::global();
    if json {
        let entries: Vec<serde_json::Value> = table
            .entries()
            .map(|(key, canonical)| json!({"key": key, "type": canonical}))
            .collect();
        return write_json(out, &entries);
    }

    for (key, canonical) in table.entries() {
        writeln!(out, "{key:<14} {canonical}")?;
    }
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
