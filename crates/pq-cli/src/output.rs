// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Human-readable rendering of queue responses

use pq_rest_api_contract::{JobResponse, Task};
use std::io::{self, Write};

const ID_WIDTH: usize = 42;
const TYPE_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 12;
const CREATED_WIDTH: usize = 27;

pub fn write_task_table(out: &mut dyn Write, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No jobs in the queue.");
    }

    writeln!(
        out,
        "{:<ID_WIDTH$} {:<TYPE_WIDTH$} {:<STATUS_WIDTH$} {:<CREATED_WIDTH$} PAYLOAD",
        "ID", "TYPE", "STATUS", "CREATED"
    )?;
    for task in tasks {
        writeln!(
            out,
            "{:<ID_WIDTH$} {:<TYPE_WIDTH$} {:<STATUS_WIDTH$} {:<CREATED_WIDTH$} {}",
            task.id, task.task_type, task.status, task.created_at, task.payload
        )?;
    }
    Ok(())
}

pub fn write_task(out: &mut dyn Write, task: &Task) -> io::Result<()> {
    writeln!(out, "id:         {}", task.id)?;
    writeln!(out, "type:       {}", task.task_type)?;
    writeln!(out, "status:     {}", task.status)?;
    writeln!(out, "created_at: {}", task.created_at)?;
    writeln!(out, "payload:    {}", task.payload)?;
    for (key, value) in &task.extra {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}

pub fn write_job_response(out: &mut dyn Write, response: &JobResponse) -> io::Result<()> {
    match response {
        JobResponse::Task(task) => write_task(out, task),
        JobResponse::Message(message) => writeln!(out, "{}", message.message),
        JobResponse::Other(value) => writeln!(out, "{value}"),
    }
}
